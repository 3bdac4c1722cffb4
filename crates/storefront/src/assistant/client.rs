//! Assistant API client.
//!
//! Non-streaming client for the Anthropic Messages API. One request per
//! search, no retry: a failed call is the resolver's cue to fall back
//! locally.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use tracing::instrument;

use crate::catalog::ProductSummary;
use crate::config::AssistantConfig;

use super::RecommendationProvider;
use super::error::AssistantError;
use super::types::{ChatRequest, ChatResponse, ContentBlock, Message, Recommendation};

const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 1024;

const SYSTEM_PROMPT: &str = "You are an intelligent shopping assistant for Ecuruza, \
an African marketplace. Given a user query and a product catalog, select the most \
relevant product IDs and explain your picks in one short, friendly sentence. \
Respond with JSON only, in the form \
{\"recommended_product_ids\": [\"...\"], \"reasoning\": \"...\"}. \
If nothing matches, return an empty id list.";

/// Messages API client implementing [`RecommendationProvider`].
#[derive(Clone)]
pub struct AssistantClient {
    inner: Arc<AssistantClientInner>,
}

struct AssistantClientInner {
    client: reqwest::Client,
    model: String,
}

impl AssistantClient {
    /// Create a new assistant client.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key contains invalid header characters
    /// or the HTTP client fails to build.
    pub fn new(config: &AssistantConfig) -> Result<Self, AssistantError> {
        let api_key = config.api_key.expose_secret();

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            "x-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| AssistantError::Parse(format!("Invalid API key format: {e}")))?,
        );
        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(AssistantClientInner {
                client,
                model: config.model.clone(),
            }),
        })
    }

    async fn send(&self, prompt: String) -> Result<Recommendation, AssistantError> {
        let request = ChatRequest {
            model: self.inner.model.clone(),
            max_tokens: DEFAULT_MAX_TOKENS,
            messages: vec![Message {
                role: "user".to_owned(),
                content: prompt,
            }],
            system: Some(SYSTEM_PROMPT.to_owned()),
        };

        let response = self
            .inner
            .client
            .post(ANTHROPIC_API_URL)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(error_for_status(status, response).await);
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Parse(format!("Failed to parse response: {e}")))?;

        let text = body
            .content
            .iter()
            .find_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Other => None,
            })
            .ok_or_else(|| AssistantError::Parse("Response contained no text".to_owned()))?;

        parse_recommendation(text)
    }
}

#[async_trait]
impl RecommendationProvider for AssistantClient {
    #[instrument(skip(self, catalog), fields(model = %self.inner.model, products = catalog.len()))]
    async fn recommend(
        &self,
        query: &str,
        catalog: &[ProductSummary],
    ) -> Result<Recommendation, AssistantError> {
        self.send(build_prompt(query, catalog)).await
    }

    fn name(&self) -> &'static str {
        "anthropic"
    }
}

/// Render the user prompt: the query plus one catalog line per product.
fn build_prompt(query: &str, catalog: &[ProductSummary]) -> String {
    use std::fmt::Write;

    let mut prompt = format!("User Query: \"{query}\"\n\nAvailable Product Catalog:\n");
    for item in catalog {
        let _ = writeln!(
            prompt,
            "ID: {}, Name: {}, Category: {}, Description: {}, Seller: {}",
            item.id, item.name, item.category, item.description, item.seller
        );
    }
    prompt
}

/// Parse the model's message text as a [`Recommendation`].
///
/// Models occasionally wrap JSON in markdown code fences; strip them
/// before parsing.
fn parse_recommendation(text: &str) -> Result<Recommendation, AssistantError> {
    let trimmed = text.trim();
    let stripped = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|s| s.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(stripped)
        .map_err(|e| AssistantError::Parse(format!("Failed to parse recommendation: {e}")))
}

async fn error_for_status(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> AssistantError {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let retry_after = response
            .headers()
            .get("Retry-After")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        return AssistantError::RateLimited(retry_after);
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return AssistantError::Unauthorized("Invalid API key".to_owned());
    }

    match response.text().await {
        Ok(body) => AssistantError::Api {
            error_type: status.as_u16().to_string(),
            message: body,
        },
        Err(e) => AssistantError::Http(e),
    }
}
