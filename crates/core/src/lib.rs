//! Ecuruza Core - Shared domain types.
//!
//! This crate provides common types used across all Ecuruza components:
//! - `storefront` - Catalog, search, cart, wishlist, and session logic
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, products, shops, and subscription statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
