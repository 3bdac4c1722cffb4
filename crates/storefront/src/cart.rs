//! The cart ledger.
//!
//! Line items are keyed by product identity: adding an already-carted
//! product accumulates quantity instead of inserting a second line.

use rust_decimal::Decimal;

use ecuruza_core::{Product, ProductId};

/// A cart line: a product and how many of it.
///
/// Quantity is always at least 1; a line that would reach zero is removed
/// from the ledger instead.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.times(self.quantity)
    }
}

/// Cart line items in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartLedger {
    items: Vec<CartItem>,
}

impl CartLedger {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add `quantity` of `product` to the cart.
    ///
    /// Non-positive quantities are clamped to 1. If the product is already
    /// carted its line quantity is incremented; otherwise a new line is
    /// appended.
    pub fn add(&mut self, product: Product, quantity: u32) {
        let quantity = quantity.max(1);
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity += quantity;
        } else {
            self.items.push(CartItem { product, quantity });
        }
    }

    /// Remove the line for `id`. Removing an absent id is a no-op.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|i| &i.product.id != id);
    }

    /// Decrease the line quantity for `id` by one.
    ///
    /// A line at quantity 1 is removed entirely; quantity never reaches
    /// zero. Decrementing an absent id is a no-op.
    pub fn decrement(&mut self, id: &ProductId) {
        if let Some(item) = self.items.iter_mut().find(|i| &i.product.id == id) {
            if item.quantity > 1 {
                item.quantity -= 1;
            } else {
                self.remove(id);
            }
        }
    }

    /// Sum of price times quantity across all lines; zero when empty.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Current quantity for `id`, zero if not carted.
    #[must_use]
    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.items
            .iter()
            .find(|i| &i.product.id == id)
            .map_or(0, |i| i.quantity)
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct lines (not total units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Empty the cart, e.g. after checkout.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
