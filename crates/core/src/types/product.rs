//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Price, ProductId};

/// An immutable catalog product.
///
/// Products are created by catalog seed data and never mutated by the core;
/// search replaces the working catalog wholesale instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: String,
    /// Image reference (URL or asset path).
    pub image: String,
    /// Average rating, 0.0 through 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub reviews: u32,
    pub seller_name: String,
    #[serde(default)]
    pub is_verified_seller: bool,
    pub description: String,
    pub stock: u32,
    #[serde(default)]
    pub is_sponsored: bool,
}

impl Product {
    /// Whether the product can currently be purchased.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Woven Basket".to_owned(),
            price: Price::rwf(12_000),
            category: "Home & Living".to_owned(),
            image: "baskets/agaseke.jpg".to_owned(),
            rating: 4.7,
            reviews: 83,
            seller_name: "Kigali Crafts".to_owned(),
            is_verified_seller: true,
            description: "Handwoven agaseke peace basket.".to_owned(),
            stock: 14,
            is_sponsored: false,
        }
    }

    #[test]
    fn test_in_stock() {
        let mut product = sample();
        assert!(product.in_stock());
        product.stock = 0;
        assert!(!product.in_stock());
    }

    #[test]
    fn test_optional_flags_default_off() {
        let json = r#"{
            "id": "p9",
            "name": "Test",
            "price": { "amount": "100", "currency_code": "RWF" },
            "category": "Misc",
            "image": "x.jpg",
            "rating": 3.0,
            "reviews": 1,
            "seller_name": "Someone",
            "description": "d",
            "stock": 1
        }"#;
        let product: Product = serde_json::from_str(json).expect("deserialize");
        assert!(!product.is_verified_seller);
        assert!(!product.is_sponsored);
    }
}
