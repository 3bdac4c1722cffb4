//! AI-assisted product search with a deterministic local fallback.
//!
//! The resolver issues exactly one provider call per search and never
//! raises: a provider failure or an empty recommendation degrades to a
//! case-insensitive substring match over product names and categories.
//!
//! Overlapping searches are serialized by a monotonic request generation:
//! a response is applied only if its generation is still the latest, so a
//! slow first response can never clobber a newer search.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::instrument;

use ecuruza_core::Product;

use crate::assistant::RecommendationProvider;
use crate::catalog::Catalog;

/// Where a search outcome came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchSource {
    /// The assistant returned at least one recommended id.
    Assistant,
    /// Local substring match (assistant unavailable, failed, or empty).
    Fallback,
}

/// The result of a resolved search.
///
/// An empty product list is a valid outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Matching products, in catalog order.
    pub products: Vec<Product>,
    /// Assistant reasoning; always `None` for fallback outcomes.
    pub reasoning: Option<String>,
    pub source: SearchSource,
}

/// Search resolver: one provider call, then local fallback.
pub struct SearchResolver<P> {
    provider: Option<P>,
    generation: AtomicU64,
}

impl<P: RecommendationProvider> SearchResolver<P> {
    /// Create a resolver. With no provider every search uses the fallback.
    #[must_use]
    pub const fn new(provider: Option<P>) -> Self {
        Self {
            provider,
            generation: AtomicU64::new(0),
        }
    }

    /// Resolve `query` against `catalog`.
    ///
    /// Returns `None` for blank queries (a no-op; callers leave state
    /// untouched) and for responses that lost the race to a newer search.
    /// Otherwise always returns an outcome; no failure path escapes.
    #[instrument(skip(self, catalog), fields(products = catalog.len()))]
    pub async fn resolve(&self, query: &str, catalog: &Catalog) -> Option<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let outcome = match &self.provider {
            Some(provider) => match provider.recommend(query, &catalog.summaries()).await {
                Ok(rec) if !rec.recommended_product_ids.is_empty() => SearchOutcome {
                    products: catalog.select(&rec.recommended_product_ids),
                    reasoning: Some(rec.reasoning),
                    source: SearchSource::Assistant,
                },
                Ok(_) => {
                    tracing::debug!(query, "Assistant returned no ids, using fallback");
                    fallback(query, catalog)
                }
                Err(e) => {
                    tracing::warn!(query, error = %e, "Assistant search failed, using fallback");
                    fallback(query, catalog)
                }
            },
            None => fallback(query, catalog),
        };

        // A newer search was issued while we were waiting; discard.
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!(query, generation, "Discarding stale search response");
            return None;
        }

        Some(outcome)
    }
}

/// Deterministic local search: case-insensitive substring match of the
/// query against product name or category. Never fails.
#[must_use]
pub fn fallback(query: &str, catalog: &Catalog) -> SearchOutcome {
    let needle = query.trim().to_lowercase();
    let products = catalog
        .products()
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle) || p.category.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    SearchOutcome {
        products,
        reasoning: None,
        source: SearchSource::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    use ecuruza_core::{Price, ProductId};

    use crate::assistant::{AssistantError, Recommendation};
    use crate::catalog::ProductSummary;

    fn product(id: &str, name: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            price: Price::rwf(1_000),
            category: category.to_owned(),
            image: String::new(),
            rating: 4.0,
            reviews: 0,
            seller_name: "Seller".to_owned(),
            is_verified_seller: false,
            description: String::new(),
            stock: 1,
            is_sponsored: false,
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            product("p1", "Running Shoes", "Sportswear"),
            product("p2", "Leather Boots", "Footwear"),
            product("p3", "Handbag", "Accessories"),
        ])
    }

    /// Scripted provider: pops the next response, optionally after a delay.
    struct ScriptedProvider {
        responses: Mutex<Vec<Result<Recommendation, AssistantError>>>,
        delay: Duration,
    }

    impl ScriptedProvider {
        fn new(responses: Vec<Result<Recommendation, AssistantError>>) -> Self {
            Self {
                responses: Mutex::new(responses),
                delay: Duration::ZERO,
            }
        }

        fn recommending(ids: &[&str], reasoning: &str) -> Self {
            Self::new(vec![Ok(Recommendation {
                recommended_product_ids: ids.iter().copied().map(ProductId::new).collect(),
                reasoning: reasoning.to_owned(),
            })])
        }
    }

    #[async_trait]
    impl RecommendationProvider for ScriptedProvider {
        async fn recommend(
            &self,
            _query: &str,
            _catalog: &[ProductSummary],
        ) -> Result<Recommendation, AssistantError> {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.responses
                .lock()
                .expect("lock")
                .pop()
                .unwrap_or_else(|| Ok(Recommendation::default()))
        }

        fn name(&self) -> &'static str {
            "scripted"
        }
    }

    /// Resolver with no provider at all.
    fn fallback_only() -> SearchResolver<ScriptedProvider> {
        SearchResolver::new(None)
    }

    #[tokio::test]
    async fn test_blank_query_is_noop() {
        let resolver = fallback_only();
        assert!(resolver.resolve("", &catalog()).await.is_none());
        assert!(resolver.resolve("   \t ", &catalog()).await.is_none());
    }

    #[tokio::test]
    async fn test_assistant_ids_resolved_in_catalog_order() {
        let provider = ScriptedProvider::recommending(&["p3", "p1"], "Great picks.");
        let resolver = SearchResolver::new(Some(provider));

        let outcome = resolver
            .resolve("something", &catalog())
            .await
            .expect("outcome");
        assert_eq!(outcome.source, SearchSource::Assistant);
        assert_eq!(outcome.reasoning.as_deref(), Some("Great picks."));

        let ids: Vec<&str> = outcome.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1", "p3"]);
    }

    #[tokio::test]
    async fn test_empty_recommendation_falls_back() {
        let provider = ScriptedProvider::new(vec![Ok(Recommendation::default())]);
        let resolver = SearchResolver::new(Some(provider));

        let outcome = resolver.resolve("shoe", &catalog()).await.expect("outcome");
        assert_eq!(outcome.source, SearchSource::Fallback);
        assert_eq!(outcome.reasoning, None);
        assert_eq!(outcome.products.len(), 1);
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let provider = ScriptedProvider::new(vec![Err(AssistantError::Unauthorized(
            "bad key".to_owned(),
        ))]);
        let resolver = SearchResolver::new(Some(provider));

        let outcome = resolver.resolve("boot", &catalog()).await.expect("outcome");
        assert_eq!(outcome.source, SearchSource::Fallback);
        let ids: Vec<&str> = outcome.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p2"]);
    }

    #[tokio::test]
    async fn test_fallback_matches_name_or_category_case_insensitive() {
        let outcome = fallback("shoe", &catalog());
        let ids: Vec<&str> = outcome.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p1"]);

        let outcome = fallback("FOOT", &catalog());
        let ids: Vec<&str> = outcome.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["p2"]);

        let outcome = fallback("telescope", &catalog());
        assert!(outcome.products.is_empty());
    }

    #[tokio::test]
    async fn test_stale_response_discarded() {
        let slow = ScriptedProvider {
            responses: Mutex::new(vec![Ok(Recommendation {
                recommended_product_ids: vec![ProductId::new("p1")],
                reasoning: "slow".to_owned(),
            })]),
            delay: Duration::from_millis(50),
        };
        let resolver = std::sync::Arc::new(SearchResolver::new(Some(slow)));
        let catalog = catalog();

        let first = {
            let resolver = std::sync::Arc::clone(&resolver);
            let catalog = catalog.clone();
            tokio::spawn(async move { resolver.resolve("first", &catalog).await })
        };

        // Let the first search issue its generation before superseding it.
        tokio::time::sleep(Duration::from_millis(10)).await;
        let second = resolver.resolve("boot", &catalog).await;

        assert!(second.is_some());
        assert!(first.await.expect("join").is_none());
    }
}
