//! Types for the assistant API.
//!
//! The request/response shapes match the Anthropic Messages API; the
//! [`Recommendation`] is the structured payload the model is instructed to
//! return as its message text.

use serde::{Deserialize, Serialize};

use ecuruza_core::ProductId;

/// A message in a conversation with the assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// The role of the message sender ("user" or "assistant").
    pub role: String,
    /// The content of the message.
    pub content: String,
}

/// Request body for the Messages API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Model to use (e.g., "claude-sonnet-4-20250514").
    pub model: String,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Conversation messages.
    pub messages: Vec<Message>,
    /// System prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

/// Response from the Messages API (non-streaming).
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// Response content blocks.
    pub content: Vec<ContentBlock>,
}

/// A content block within a response.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum ContentBlock {
    /// Text content.
    #[serde(rename = "text")]
    Text {
        /// The text content.
        text: String,
    },
    /// Any other block type; ignored here.
    #[serde(other)]
    Other,
}

/// The structured recommendation the assistant returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Matching product ids from the supplied catalog; may be empty.
    #[serde(default)]
    pub recommended_product_ids: Vec<ProductId>,
    /// One-sentence explanation of the picks.
    #[serde(default)]
    pub reasoning: String,
}
