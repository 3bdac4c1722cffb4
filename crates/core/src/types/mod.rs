//! Shared domain types for Ecuruza.

mod id;
mod price;
mod product;
mod shop;

pub use id::{ProductId, ShopId, UserId};
pub use price::{CurrencyCode, Price, UnknownCurrency};
pub use product::Product;
pub use shop::{Shop, SubscriptionPlan, SubscriptionStatus};
