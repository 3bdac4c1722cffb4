//! The storefront facade.
//!
//! One struct owning the whole session: catalogs, filters, sort, search,
//! cart, wishlist, and session state. The host renders from derived state
//! (`visible_products`, `cart_total`) and drains [`UiEvent`]s after each
//! mutation.
//!
//! Two catalogs are held: the seed catalog never changes, and the working
//! catalog is what search replaces wholesale. Filters and sort always apply
//! to the working catalog, so a filtered view of search results behaves the
//! same as a filtered view of the full shop.

use ecuruza_core::{Product, ProductId};
use rust_decimal::Decimal;

use crate::assistant::{AssistantClient, AssistantError, RecommendationProvider};
use crate::cart::CartLedger;
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::filters::FilterState;
use crate::search::{SearchResolver, SearchSource};
use crate::session::{Session, ViewMode};
use crate::sort::SortOption;
use crate::wishlist::{JsonFileStore, Wishlist};

/// A side effect the host UI should act on.
///
/// Events accumulate in order and are handed over by [`Storefront::take_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A product was added; the host should slide the cart drawer open.
    CartOpened,
    /// The wishlist changed; `saved` is the id's new membership.
    WishlistChanged { id: ProductId, saved: bool },
}

/// The complete storefront session.
pub struct Storefront<P = AssistantClient> {
    seed: Catalog,
    working: Catalog,
    filters: FilterState,
    sort: SortOption,
    reasoning: Option<String>,
    search_source: Option<SearchSource>,
    cart: CartLedger,
    wishlist: Wishlist,
    session: Session,
    resolver: SearchResolver<P>,
    events: Vec<UiEvent>,
}

impl Storefront<AssistantClient> {
    /// Build a storefront from configuration: a file-backed wishlist and,
    /// when an API key is configured, an assistant-backed search.
    ///
    /// # Errors
    ///
    /// Returns an error if the assistant client cannot be constructed.
    pub fn from_config(
        config: &StorefrontConfig,
        catalog: Catalog,
    ) -> Result<Self, AssistantError> {
        let provider = config
            .assistant
            .as_ref()
            .map(AssistantClient::new)
            .transpose()?;
        let wishlist = Wishlist::open(Box::new(JsonFileStore::new(&config.wishlist_path)));
        Ok(Self::new(catalog, wishlist, provider))
    }
}

impl<P: RecommendationProvider> Storefront<P> {
    /// Create a storefront over `catalog`. With no provider, search runs in
    /// fallback-only mode.
    #[must_use]
    pub fn new(catalog: Catalog, wishlist: Wishlist, provider: Option<P>) -> Self {
        Self {
            working: catalog.clone(),
            seed: catalog,
            filters: FilterState::default(),
            sort: SortOption::default(),
            reasoning: None,
            search_source: None,
            cart: CartLedger::new(),
            wishlist,
            session: Session::new(),
            resolver: SearchResolver::new(provider),
            events: Vec::new(),
        }
    }

    // --- derived state ---

    /// The products the host should render: the working catalog, filtered,
    /// then stably sorted.
    #[must_use]
    pub fn visible_products(&self) -> Vec<Product> {
        let matching: Vec<Product> = self
            .working
            .products()
            .iter()
            .filter(|p| self.filters.matches(p))
            .cloned()
            .collect();
        crate::sort::sorted(&matching, self.sort)
    }

    /// Wishlisted products that exist in the seed catalog, in catalog order.
    #[must_use]
    pub fn wishlist_products(&self) -> Vec<Product> {
        self.seed.select(&self.wishlist.ids())
    }

    /// Sum of price times quantity across all cart lines.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.total()
    }

    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    /// Assistant reasoning for the current results, if any.
    #[must_use]
    pub fn reasoning(&self) -> Option<&str> {
        self.reasoning.as_deref()
    }

    /// Where the current working catalog came from; `None` before any search.
    #[must_use]
    pub const fn search_source(&self) -> Option<SearchSource> {
        self.search_source
    }

    // --- search ---

    /// Run a search and replace the working catalog with the outcome.
    ///
    /// Blank queries and stale responses leave all state untouched. Returns
    /// whether the working catalog was replaced.
    pub async fn search(&mut self, query: &str) -> bool {
        let Some(outcome) = self.resolver.resolve(query, &self.seed).await else {
            return false;
        };
        self.working = Catalog::new(outcome.products);
        self.reasoning = outcome.reasoning;
        self.search_source = Some(outcome.source);
        true
    }

    /// Restore the full shop: seed catalog, no filters, default sort, no
    /// search context. From a buyer view this also returns to browsing.
    pub fn reset_to_shop(&mut self) {
        self.working = self.seed.clone();
        self.filters.clear();
        self.sort = SortOption::default();
        self.reasoning = None;
        self.search_source = None;
        // Seller views keep their screen; only buyer views snap back.
        let _ = self.session.set_buyer_view(ViewMode::BuyerBrowse);
    }

    // --- filters and sort ---

    pub fn toggle_category(&mut self, category: &str) {
        self.filters.toggle_category(category);
    }

    /// Apply raw min/max price inputs; blank or unparseable bounds clear.
    pub fn set_price_range_input(&mut self, min: &str, max: &str) {
        self.filters.set_price_range_input(min, max);
    }

    pub fn set_verified_only(&mut self, verified_only: bool) {
        self.filters.set_verified_only(verified_only);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.sort = sort;
    }

    #[must_use]
    pub const fn sort(&self) -> SortOption {
        self.sort
    }

    // --- cart ---

    /// Add `quantity` of `id` to the cart and open the cart drawer.
    ///
    /// Ids are resolved against the seed catalog, so a product stays
    /// addable from search results and the wishlist. Unknown ids are a
    /// no-op; returns whether the product was found. Quantity is clamped
    /// to at least 1 by the ledger.
    pub fn add_to_cart(&mut self, id: &ProductId, quantity: u32) -> bool {
        let Some(product) = self.seed.get(id).cloned() else {
            return false;
        };
        self.cart.add(product, quantity);
        self.events.push(UiEvent::CartOpened);
        true
    }

    pub fn remove_from_cart(&mut self, id: &ProductId) {
        self.cart.remove(id);
    }

    pub fn decrement_cart(&mut self, id: &ProductId) {
        self.cart.decrement(id);
    }

    #[must_use]
    pub const fn cart(&self) -> &CartLedger {
        &self.cart
    }

    // --- wishlist ---

    /// Toggle `id` in the wishlist; returns its new membership.
    pub fn toggle_wishlist(&mut self, id: &ProductId) -> bool {
        let saved = self.wishlist.toggle(id.clone());
        self.events.push(UiEvent::WishlistChanged {
            id: id.clone(),
            saved,
        });
        saved
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    // --- session ---

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub const fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    // --- events ---

    /// Drain accumulated UI events, oldest first.
    pub fn take_events(&mut self) -> Vec<UiEvent> {
        std::mem::take(&mut self.events)
    }

    /// The immutable seed catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use ecuruza_core::Price;

    use crate::assistant::Recommendation;
    use crate::catalog::ProductSummary;

    /// Provider that always recommends a fixed id list.
    struct FixedProvider {
        ids: Vec<ProductId>,
    }

    #[async_trait]
    impl RecommendationProvider for FixedProvider {
        async fn recommend(
            &self,
            _query: &str,
            _catalog: &[ProductSummary],
        ) -> Result<Recommendation, AssistantError> {
            Ok(Recommendation {
                recommended_product_ids: self.ids.clone(),
                reasoning: "Fixed picks.".to_owned(),
            })
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    fn product(id: &str, name: &str, price: i64, verified: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Price::rwf(price),
            category: "Test".to_owned(),
            image: String::new(),
            rating: 4.0,
            reviews: 0,
            seller_name: "Seller".to_owned(),
            is_verified_seller: verified,
            description: String::new(),
            stock: 5,
            is_sponsored: false,
        }
    }

    fn three_product_shop() -> Catalog {
        Catalog::new(vec![
            product("a", "Alpha", 500, false),
            product("b", "Beta", 1_500, false),
            product("c", "Gamma", 1_000, false),
        ])
    }

    fn storefront(catalog: Catalog) -> Storefront<FixedProvider> {
        Storefront::new(catalog, Wishlist::in_memory(), None)
    }

    #[test]
    fn test_no_filters_shows_everything() {
        let shop = storefront(three_product_shop());
        assert_eq!(shop.visible_products().len(), 3);
        assert_eq!(shop.active_filter_count(), 0);
    }

    #[test]
    fn test_min_price_excludes_cheaper_products() {
        let mut shop = storefront(three_product_shop());
        shop.set_price_range_input("600", "");

        let products = shop.visible_products();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
        assert_eq!(shop.active_filter_count(), 1);
    }

    #[test]
    fn test_filter_then_sort_price_ascending() {
        let mut shop = storefront(three_product_shop());
        shop.set_price_range_input("600", "");
        shop.set_sort(SortOption::PriceAsc);

        let products = shop.visible_products();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["c", "b"]);
    }

    #[test]
    fn test_verified_only_with_no_verified_sellers_is_empty() {
        let mut shop = storefront(three_product_shop());
        shop.set_verified_only(true);
        assert!(shop.visible_products().is_empty());
    }

    #[test]
    fn test_cart_flow_and_total() {
        let mut shop = storefront(three_product_shop());
        let a = ProductId::new("a");
        let c = ProductId::new("c");

        assert!(shop.add_to_cart(&c, 1));
        assert!(shop.add_to_cart(&c, 1));
        assert!(shop.add_to_cart(&a, 1));
        assert!(!shop.add_to_cart(&ProductId::new("nope"), 1));

        // 1000 * 2 + 500
        assert_eq!(shop.cart_total(), Decimal::from(2_500));

        shop.decrement_cart(&c);
        assert_eq!(shop.cart_total(), Decimal::from(1_500));

        shop.remove_from_cart(&a);
        assert_eq!(shop.cart_total(), Decimal::from(1_000));
    }

    #[test]
    fn test_add_to_cart_emits_event() {
        let mut shop = storefront(three_product_shop());
        shop.add_to_cart(&ProductId::new("a"), 1);

        assert_eq!(shop.take_events(), vec![UiEvent::CartOpened]);
        // Drained.
        assert!(shop.take_events().is_empty());
    }

    #[test]
    fn test_wishlist_toggle_and_products() {
        let mut shop = storefront(three_product_shop());
        let b = ProductId::new("b");

        assert!(shop.toggle_wishlist(&b));
        let products = shop.wishlist_products();
        let saved: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(saved, ["b"]);

        assert!(!shop.toggle_wishlist(&b));
        assert!(shop.wishlist_products().is_empty());

        let events = shop.take_events();
        assert_eq!(
            events,
            vec![
                UiEvent::WishlistChanged {
                    id: b.clone(),
                    saved: true
                },
                UiEvent::WishlistChanged { id: b, saved: false },
            ]
        );
    }

    #[tokio::test]
    async fn test_search_replaces_working_catalog() {
        let provider = FixedProvider {
            ids: vec![ProductId::new("b")],
        };
        let mut shop = Storefront::new(three_product_shop(), Wishlist::in_memory(), Some(provider));

        assert!(shop.search("something beta").await);
        let products = shop.visible_products();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b"]);
        assert_eq!(shop.reasoning(), Some("Fixed picks."));
        assert_eq!(shop.search_source(), Some(SearchSource::Assistant));
    }

    #[tokio::test]
    async fn test_blank_search_is_noop() {
        let mut shop = storefront(three_product_shop());
        assert!(!shop.search("   ").await);
        assert_eq!(shop.visible_products().len(), 3);
        assert_eq!(shop.search_source(), None);
    }

    #[tokio::test]
    async fn test_fallback_search_clears_reasoning() {
        let mut shop = storefront(three_product_shop());

        assert!(shop.search("alpha").await);
        assert_eq!(shop.search_source(), Some(SearchSource::Fallback));
        assert_eq!(shop.reasoning(), None);
        assert_eq!(shop.visible_products().len(), 1);
    }

    #[tokio::test]
    async fn test_search_runs_against_full_catalog() {
        let mut shop = storefront(three_product_shop());

        // Narrow to search results, then search again; the second query
        // still sees all three products.
        assert!(shop.search("alpha").await);
        assert_eq!(shop.visible_products().len(), 1);

        assert!(shop.search("beta").await);
        let products = shop.visible_products();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b"]);
    }

    #[tokio::test]
    async fn test_reset_to_shop_restores_everything() {
        let mut shop = storefront(three_product_shop());
        shop.set_price_range_input("600", "");
        shop.set_sort(SortOption::PriceDesc);
        assert!(shop.search("beta").await);

        shop.reset_to_shop();

        assert_eq!(shop.visible_products().len(), 3);
        assert_eq!(shop.active_filter_count(), 0);
        assert_eq!(shop.sort(), SortOption::Newest);
        assert_eq!(shop.reasoning(), None);
        assert_eq!(shop.search_source(), None);
        assert_eq!(shop.session().view(), ViewMode::BuyerBrowse);
    }

    #[test]
    fn test_filters_survive_cart_and_wishlist_mutations() {
        let mut shop = storefront(three_product_shop());
        shop.set_price_range_input("600", "");

        shop.add_to_cart(&ProductId::new("b"), 1);
        shop.toggle_wishlist(&ProductId::new("c"));

        assert_eq!(shop.visible_products().len(), 2);
        assert_eq!(shop.active_filter_count(), 1);
    }
}
