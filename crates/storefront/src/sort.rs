//! Stable product sort orders.

use ecuruza_core::Product;

/// Sort order for the visible product list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortOption {
    /// Catalog insertion order; the tie-break baseline for every other mode.
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortOption {
    /// Parse from a URL or CLI parameter value.
    ///
    /// Unrecognized values fall back to [`Self::Newest`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "price_asc" | "price-ascending" => Self::PriceAsc,
            "price_desc" | "price-descending" => Self::PriceDesc,
            "rating_desc" | "rating-descending" => Self::RatingDesc,
            _ => Self::Newest,
        }
    }

    /// Convert to the canonical parameter value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::RatingDesc => "rating_desc",
        }
    }

    /// Human-readable label for sort menus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Newest => "Newest Arrivals",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::RatingDesc => "Rating: High to Low",
        }
    }
}

/// Sort a product list without mutating the input.
///
/// All modes use a stable sort, so products with tied keys keep their
/// relative input order, and re-sorting sorted input is a no-op.
#[must_use]
pub fn sorted(products: &[Product], option: SortOption) -> Vec<Product> {
    let mut out = products.to_vec();
    match option {
        SortOption::Newest => {}
        SortOption::PriceAsc => out.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
        SortOption::PriceDesc => out.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
        SortOption::RatingDesc => out.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    out
}
