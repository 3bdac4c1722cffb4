//! Browse the catalog with filters and sorting.

use ecuruza_storefront::{SortOption, Storefront};

use super::print_products;

/// Apply the requested filters and sort, then print the visible products.
pub fn run(
    shop: &mut Storefront,
    categories: &[String],
    min_price: Option<&str>,
    max_price: Option<&str>,
    verified_only: bool,
    sort: &str,
) {
    for category in categories {
        shop.toggle_category(category);
    }
    shop.set_price_range_input(min_price.unwrap_or(""), max_price.unwrap_or(""));
    shop.set_verified_only(verified_only);
    shop.set_sort(SortOption::parse(sort));

    let products = shop.visible_products();
    tracing::debug!(
        shown = products.len(),
        filters = shop.active_filter_count(),
        sort = shop.sort().as_str(),
        "Rendering catalog"
    );
    sponsored_banner(shop);
    print_products(&products);
}

/// One-line promo for the first sponsored product, above the listing.
#[allow(clippy::print_stdout)]
fn sponsored_banner(shop: &Storefront) {
    if let Some(p) = shop.catalog().sponsored().next() {
        println!(
            "Sponsored: {} ({}) by {}\n",
            p.name,
            p.price.display(),
            p.seller_name
        );
    }
}

/// Print the catalog's categories, sorted.
#[allow(clippy::print_stdout)]
pub fn categories(shop: &Storefront) {
    for category in shop.catalog().categories() {
        println!("{category}");
    }
}
