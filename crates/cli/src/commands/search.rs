//! Catalog search.

use ecuruza_storefront::{SearchSource, Storefront};

use super::print_products;

/// Resolve `query` and print the results.
///
/// With an assistant configured the picks come with a one-line reasoning;
/// otherwise (or on assistant failure) results come from the local
/// substring match.
#[allow(clippy::print_stdout)]
pub async fn run(shop: &mut Storefront, query: &str) {
    if !shop.search(query).await {
        println!("Nothing to search for.");
        return;
    }

    match shop.search_source() {
        Some(SearchSource::Assistant) => {
            if let Some(reasoning) = shop.reasoning() {
                println!("{reasoning}\n");
            }
        }
        Some(SearchSource::Fallback) => {
            println!("Results for \"{}\":\n", query.trim());
        }
        None => {}
    }

    print_products(&shop.visible_products());
}
