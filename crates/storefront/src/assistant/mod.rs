//! AI shopping assistant integration.
//!
//! The search resolver talks to the assistant through the narrow
//! [`RecommendationProvider`] trait so the concrete provider is swappable
//! and mockable; [`AssistantClient`] is the production implementation over
//! the Anthropic Messages API.

mod client;
mod error;
mod types;

use async_trait::async_trait;

use crate::catalog::ProductSummary;

pub use client::AssistantClient;
pub use error::AssistantError;
pub use types::Recommendation;

/// A service that maps a free-text query and a catalog summary to
/// recommended product ids plus one sentence of reasoning.
///
/// Returning zero ids is a valid, non-error result.
#[async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Recommend products for `query` out of `catalog`.
    ///
    /// # Errors
    ///
    /// Returns an error if the provider is unreachable or its response
    /// cannot be parsed. Callers are expected to fall back locally.
    async fn recommend(
        &self,
        query: &str,
        catalog: &[ProductSummary],
    ) -> Result<Recommendation, AssistantError>;

    /// Provider identifier for logging.
    fn name(&self) -> &'static str;
}
