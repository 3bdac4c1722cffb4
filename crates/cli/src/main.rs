//! Ecuruza CLI - a terminal storefront for the Ecuruza marketplace.
//!
//! # Usage
//!
//! ```bash
//! # Browse the shop with filters and sorting
//! ecuruza browse --category Electronics --min-price 10000 --sort price_asc
//!
//! # List catalog categories
//! ecuruza categories
//!
//! # Search (assistant-backed when ECURUZA_ASSISTANT_API_KEY is set)
//! ecuruza search "a gift for a coffee lover"
//!
//! # Wishlist
//! ecuruza wishlist list
//! ecuruza wishlist toggle p2
//! ```
//!
//! # Commands
//!
//! - `browse` - List products with optional filters and sorting
//! - `categories` - List the catalog's categories
//! - `search` - AI-assisted search with a local fallback
//! - `wishlist` - List or toggle saved products

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "ecuruza")]
#[command(author, version, about = "Ecuruza marketplace storefront")]
struct Cli {
    /// Load the catalog from a JSON product array instead of the built-in seed
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with optional filters and sorting
    Browse {
        /// Restrict to a category (repeatable)
        #[arg(short, long)]
        category: Vec<String>,

        /// Minimum price in RWF
        #[arg(long)]
        min_price: Option<String>,

        /// Maximum price in RWF
        #[arg(long)]
        max_price: Option<String>,

        /// Only show products from verified sellers
        #[arg(long)]
        verified_only: bool,

        /// Sort order (`newest`, `price_asc`, `price_desc`, `rating_desc`)
        #[arg(short, long, default_value = "newest")]
        sort: String,
    },
    /// List the catalog's categories
    Categories,
    /// Search the catalog
    Search {
        /// Free-text query
        query: String,
    },
    /// Manage the wishlist
    Wishlist {
        #[command(subcommand)]
        action: WishlistAction,
    },
}

#[derive(Subcommand)]
enum WishlistAction {
    /// List wishlisted products
    List,
    /// Add or remove a product id
    Toggle {
        /// Product id, e.g. `p2`
        id: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut shop = commands::load_storefront(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Browse {
            category,
            min_price,
            max_price,
            verified_only,
            sort,
        } => commands::browse::run(
            &mut shop,
            &category,
            min_price.as_deref(),
            max_price.as_deref(),
            verified_only,
            &sort,
        ),
        Commands::Categories => commands::browse::categories(&shop),
        Commands::Search { query } => commands::search::run(&mut shop, &query).await,
        Commands::Wishlist { action } => match action {
            WishlistAction::List => commands::wishlist::list(&shop),
            WishlistAction::Toggle { id } => commands::wishlist::toggle(&mut shop, &id),
        },
    }
    Ok(())
}
