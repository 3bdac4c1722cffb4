//! Integration tests for Ecuruza.
//!
//! These tests drive the public [`ecuruza_storefront`] API the way a host
//! UI would: construct a [`Storefront`](ecuruza_storefront::Storefront),
//! mutate it through user-shaped actions, and assert on the derived state.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ecuruza-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `buyer_flows` - filter/sort/search/cart/wishlist end to end
//! - `seller_journey` - shop registration and subscription transitions
//! - `wishlist_persistence` - durable wishlist across restarts

#![cfg_attr(not(test), forbid(unsafe_code))]
