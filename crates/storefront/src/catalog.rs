//! The working product catalog.
//!
//! A catalog is an ordered, immutable set of products. "Newest" sorting and
//! deterministic search results both lean on catalog insertion order, so the
//! order of the backing vector is load-bearing.

use std::collections::BTreeSet;
use std::io::Read;

use serde::Serialize;

use ecuruza_core::{Price, Product, ProductId};

/// An ordered product catalog.
///
/// The storefront keeps two of these: the seed catalog (never changes) and
/// the working catalog, which search replaces wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an ordered product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Load a catalog from a JSON array of products.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid product array.
    pub fn from_json(reader: impl Read) -> Result<Self, serde_json::Error> {
        let products: Vec<Product> = serde_json::from_reader(reader)?;
        Ok(Self::new(products))
    }

    /// All products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Unique categories, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.products.iter().map(|p| p.category.as_str()).collect();
        set.into_iter().map(str::to_owned).collect()
    }

    /// Sponsored products, in catalog order.
    pub fn sponsored(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_sponsored)
    }

    /// Products whose id is in `ids`, returned in catalog order.
    ///
    /// Unknown ids are skipped; duplicates in `ids` do not duplicate output.
    #[must_use]
    pub fn select(&self, ids: &[ProductId]) -> Vec<Product> {
        let wanted: BTreeSet<&ProductId> = ids.iter().collect();
        self.products
            .iter()
            .filter(|p| wanted.contains(&p.id))
            .cloned()
            .collect()
    }

    /// Compact per-product summaries for the assistant prompt.
    #[must_use]
    pub fn summaries(&self) -> Vec<ProductSummary> {
        self.products
            .iter()
            .map(|p| ProductSummary {
                id: p.id.clone(),
                name: p.name.clone(),
                category: p.category.clone(),
                description: p.description.clone(),
                seller: p.seller_name.clone(),
            })
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The built-in seed catalog.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(seed_products())
    }
}

/// The slice of a product the assistant sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductSummary {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub description: String,
    pub seller: String,
}

fn product(
    id: &str,
    name: &str,
    price: i64,
    category: &str,
    image: &str,
    rating: f32,
    reviews: u32,
    seller: &str,
    verified: bool,
    description: &str,
    stock: u32,
    sponsored: bool,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::rwf(price),
        category: category.to_owned(),
        image: image.to_owned(),
        rating,
        reviews,
        seller_name: seller.to_owned(),
        is_verified_seller: verified,
        description: description.to_owned(),
        stock,
        is_sponsored: sponsored,
    }
}

#[rustfmt::skip]
fn seed_products() -> Vec<Product> {
    vec![
        product("p1", "Agaseke Peace Basket", 12_000, "Home & Living", "img/agaseke.jpg", 4.8, 214,
                "Kigali Crafts", true,
                "Handwoven sisal peace basket with traditional zigzag pattern.", 34, true),
        product("p2", "Rwandan Single-Origin Coffee 1kg", 9_500, "Food & Drink", "img/coffee.jpg", 4.9, 530,
                "Huye Mountain Beans", true,
                "Bourbon arabica, washed and sun-dried on raised beds.", 120, false),
        product("p3", "Kitenge Print Dress", 25_000, "Fashion", "img/kitenge-dress.jpg", 4.6, 88,
                "Mama Africa Styles", true,
                "Tailored midi dress in vibrant kitenge fabric.", 12, true),
        product("p4", "Running Shoes - Trail Edition", 48_000, "Footwear", "img/trail-shoes.jpg", 4.4, 301,
                "Tech World RW", false,
                "Lightweight trail running shoes with grippy outsole.", 40, false),
        product("p5", "Bluetooth Earbuds Pro", 35_000, "Electronics", "img/earbuds.jpg", 4.2, 764,
                "Tech World RW", false,
                "Noise-isolating wireless earbuds, 24h battery case.", 85, false),
        product("p6", "Solar Lantern", 18_000, "Electronics", "img/lantern.jpg", 4.7, 156,
                "Fresh Energy Ltd", true,
                "Rechargeable solar lantern with phone charging port.", 60, false),
        product("p7", "Imigongo Wall Art Panel", 30_000, "Home & Living", "img/imigongo.jpg", 4.9, 47,
                "Kigali Crafts", true,
                "Geometric imigongo panel in natural earth pigments.", 9, false),
        product("p8", "Leather Sandals", 15_000, "Footwear", "img/sandals.jpg", 4.1, 122,
                "Nyamirambo Leatherworks", false,
                "Hand-stitched leather sandals, unisex sizing.", 27, false),
        product("p9", "Macadamia Nut Butter 400g", 7_000, "Food & Drink", "img/nut-butter.jpg", 4.5, 63,
                "Fresh Foods Market", false,
                "Stone-ground macadamia butter, no added sugar.", 48, false),
        product("p10", "Woven Laptop Sleeve 14\"", 22_000, "Accessories", "img/laptop-sleeve.jpg", 4.3, 39,
                "Mama Africa Styles", true,
                "Padded laptop sleeve wrapped in handwoven fabric.", 18, false),
        product("p11", "Ceramic Tea Set", 28_000, "Home & Living", "img/tea-set.jpg", 4.6, 71,
                "Gatagara Pottery", true,
                "Six-piece stoneware tea set, volcanic glaze finish.", 11, false),
        product("p12", "Smartphone Tripod", 13_500, "Electronics", "img/tripod.jpg", 3.9, 208,
                "Tech World RW", false,
                "Extendable tripod with bluetooth shutter remote.", 73, false),
    ]
}
