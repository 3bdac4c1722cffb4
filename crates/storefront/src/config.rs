//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ECURUZA_ASSISTANT_API_KEY` - Assistant API key; when absent, search
//!   runs in fallback-only mode
//! - `ECURUZA_ASSISTANT_MODEL` - Assistant model (default: claude-sonnet-4-20250514)
//! - `ECURUZA_ASSISTANT_TIMEOUT_SECS` - Assistant request timeout (default: 15)
//! - `ECURUZA_WISHLIST_PATH` - Wishlist storage file (default: .ecuruza/wishlist.json)
//! - `ECURUZA_CURRENCY` - Marketplace display currency (default: RWF)

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use ecuruza_core::CurrencyCode;

const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_WISHLIST_PATH: &str = ".ecuruza/wishlist.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Assistant API configuration; `None` means fallback-only search.
    pub assistant: Option<AssistantConfig>,
    /// Durable wishlist file path.
    pub wishlist_path: PathBuf,
    /// Marketplace display currency.
    pub currency: CurrencyCode,
}

/// Assistant API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct AssistantConfig {
    /// API key for the assistant service.
    pub api_key: SecretString,
    /// Model identifier.
    pub model: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for AssistantConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a present variable fails to parse. Absent
    /// variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let assistant = match get_optional_env("ECURUZA_ASSISTANT_API_KEY") {
            Some(key) => {
                let model =
                    get_optional_env("ECURUZA_ASSISTANT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_owned());
                let timeout_secs = match get_optional_env("ECURUZA_ASSISTANT_TIMEOUT_SECS") {
                    Some(raw) => raw.parse::<u64>().map_err(|e| {
                        ConfigError::InvalidEnvVar(
                            "ECURUZA_ASSISTANT_TIMEOUT_SECS".to_owned(),
                            e.to_string(),
                        )
                    })?,
                    None => DEFAULT_TIMEOUT_SECS,
                };
                Some(AssistantConfig {
                    api_key: SecretString::from(key),
                    model,
                    timeout: Duration::from_secs(timeout_secs),
                })
            }
            None => None,
        };

        let wishlist_path = get_optional_env("ECURUZA_WISHLIST_PATH")
            .map_or_else(|| PathBuf::from(DEFAULT_WISHLIST_PATH), PathBuf::from);

        let currency = parse_currency(get_optional_env("ECURUZA_CURRENCY"))?;

        Ok(Self {
            assistant,
            wishlist_path,
            currency,
        })
    }
}

/// Parse `ECURUZA_CURRENCY`; absent means the RWF default.
fn parse_currency(raw: Option<String>) -> Result<CurrencyCode, ConfigError> {
    raw.map_or(Ok(CurrencyCode::default()), |raw| {
        raw.parse()
            .map_err(|e: ecuruza_core::UnknownCurrency| {
                ConfigError::InvalidEnvVar("ECURUZA_CURRENCY".to_owned(), e.to_string())
            })
    })
}

/// Get an optional environment variable, treating empty strings as absent.
fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
