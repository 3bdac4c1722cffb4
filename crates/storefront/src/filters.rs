//! Product filtering.
//!
//! [`FilterState::matches`] is a pure predicate over a product and the
//! current filter configuration; the facade applies it across the working
//! catalog to derive the visible product list.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use ecuruza_core::Product;

/// Buyer-selected filter configuration.
///
/// An empty category set means no category restriction. Absent price bounds
/// default to zero and positive infinity respectively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    categories: BTreeSet<String>,
    min_price: Option<Decimal>,
    max_price: Option<Decimal>,
    verified_only: bool,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `product` passes every active predicate.
    ///
    /// Category match is case-sensitive and exact. Price bounds are
    /// inclusive. The three predicates are ANDed.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_category(product)
            && self.matches_verified(product)
            && self.matches_price(product)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.categories.is_empty() || self.categories.contains(&product.category)
    }

    fn matches_verified(&self, product: &Product) -> bool {
        !self.verified_only || product.is_verified_seller
    }

    fn matches_price(&self, product: &Product) -> bool {
        let min = self.min_price.unwrap_or(Decimal::ZERO);
        if product.price.amount < min {
            return false;
        }
        self.max_price.is_none_or(|max| product.price.amount <= max)
    }

    /// Add or remove a category from the selection.
    pub fn toggle_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    /// Selected categories, sorted.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub const fn set_min_price(&mut self, min: Option<Decimal>) {
        self.min_price = min;
    }

    pub const fn set_max_price(&mut self, max: Option<Decimal>) {
        self.max_price = max;
    }

    /// Set the price range from raw form input.
    ///
    /// Blank or non-numeric input is treated as "unset", never an error.
    pub fn set_price_range_input(&mut self, min: &str, max: &str) {
        self.min_price = parse_price_input(min);
        self.max_price = parse_price_input(max);
    }

    pub const fn set_verified_only(&mut self, verified_only: bool) {
        self.verified_only = verified_only;
    }

    #[must_use]
    pub const fn verified_only(&self) -> bool {
        self.verified_only
    }

    /// Number of active filter selections, for the filter-button badge.
    ///
    /// Each selected category counts once; a price bound on either end
    /// counts once; verified-only counts once.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let mut count = self.categories.len();
        if self.min_price.is_some() || self.max_price.is_some() {
            count += 1;
        }
        if self.verified_only {
            count += 1;
        }
        count
    }

    /// Reset to the unfiltered state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Parse raw price input; blank or unparseable text means "unset".
#[must_use]
pub fn parse_price_input(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<Decimal>().ok()
}
