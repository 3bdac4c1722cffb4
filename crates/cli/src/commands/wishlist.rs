//! Wishlist management.
//!
//! The wishlist persists between runs at `ECURUZA_WISHLIST_PATH`
//! (default `.ecuruza/wishlist.json`).

use ecuruza_core::ProductId;
use ecuruza_storefront::Storefront;

use super::print_products;

/// Print wishlisted products in catalog order.
#[allow(clippy::print_stdout)]
pub fn list(shop: &Storefront) {
    let products = shop.wishlist_products();
    if products.is_empty() {
        println!("Wishlist is empty.");
        return;
    }
    print_products(&products);
}

/// Toggle a product id in the wishlist.
#[allow(clippy::print_stdout)]
pub fn toggle(shop: &mut Storefront, id: &str) {
    let id = ProductId::new(id);
    if shop.catalog().get(&id).is_none() {
        println!("Unknown product id: {id}");
        return;
    }
    if shop.toggle_wishlist(&id) {
        println!("Saved {id} to wishlist.");
    } else {
        println!("Removed {id} from wishlist.");
    }
}
