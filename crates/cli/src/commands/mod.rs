//! CLI command implementations.

pub mod browse;
pub mod search;
pub mod wishlist;

use std::fs::File;
use std::path::Path;

use ecuruza_core::Product;
use ecuruza_storefront::config::StorefrontConfig;
use ecuruza_storefront::{Catalog, Storefront};

/// Build a storefront from the environment and an optional catalog file.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the catalog file cannot be
/// read, or the assistant client cannot be constructed.
pub fn load_storefront(
    catalog_path: Option<&Path>,
) -> Result<Storefront, Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    tracing::debug!(
        currency = config.currency.code(),
        assistant = config.assistant.is_some(),
        "Loaded configuration"
    );

    let catalog = match catalog_path {
        Some(path) => Catalog::from_json(File::open(path)?)?,
        None => Catalog::seed(),
    };

    Ok(Storefront::from_config(&config, catalog)?)
}

/// Print one product per line.
#[allow(clippy::print_stdout)]
pub fn print_products(products: &[Product]) {
    if products.is_empty() {
        println!("No products found.");
        return;
    }
    for p in products {
        let badge = if p.is_verified_seller { " [verified]" } else { "" };
        println!(
            "{:<4} {:<36} {:>12}  {:.1}* ({})  {} - {}{}",
            p.id.as_str(),
            p.name,
            p.price.display(),
            p.rating,
            p.reviews,
            p.category,
            p.seller_name,
            badge,
        );
    }
}
