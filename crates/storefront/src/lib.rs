//! Ecuruza storefront core.
//!
//! Everything the surrounding UI needs to run a buyer/seller marketplace
//! session against an in-memory catalog:
//!
//! - [`catalog`] - the working product set and seed data
//! - [`filters`] - pure filter predicate over products
//! - [`sort`] - stable sort orders
//! - [`search`] - AI-assisted search with a deterministic local fallback
//! - [`cart`] - line items keyed by product identity
//! - [`wishlist`] - durable set of saved product ids
//! - [`session`] - explicit view-mode and seller-role state machines
//! - [`state`] - the [`Storefront`](state::Storefront) facade tying it together
//!
//! Rendering, routing, and all visual concerns live outside this crate; the
//! facade exposes derived state (`visible_products`, `cart_total`,
//! `active_filter_count`) and drains UI events for the host to act on.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod filters;
pub mod search;
pub mod session;
pub mod sort;
pub mod state;
pub mod wishlist;

pub use cart::{CartItem, CartLedger};
pub use catalog::{Catalog, ProductSummary};
pub use filters::FilterState;
pub use search::{SearchOutcome, SearchResolver, SearchSource};
pub use session::{Role, Session, ShopRegistration, TransitionError, ViewMode};
pub use sort::SortOption;
pub use state::{Storefront, UiEvent};
pub use wishlist::Wishlist;
