//! Application Settings
//!
//! Process-wide configuration for the dashboard. The Gemini credential is
//! read once at startup and injected into the provider; a missing key is
//! not a startup error and only surfaces when an AI call is attempted.

use hackboard_llm::ProviderConfig;
use serde::{Deserialize, Serialize};

/// Default judge model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default provider request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Gemini API key; `None` makes AI calls fail with an auth error
    pub gemini_api_key: Option<String>,
    /// Judge model identifier
    pub model: String,
    /// Override for the Gemini base URL (testing, proxies)
    pub base_url: Option<String>,
    /// Provider request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// `GEMINI_API_KEY` is preferred; `API_KEY` is accepted for
    /// compatibility with the original dashboard deployment.
    pub fn from_env() -> Self {
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .ok()
            .filter(|k| !k.is_empty());

        Self {
            gemini_api_key,
            ..Default::default()
        }
    }

    /// Derive the provider configuration for the Gemini client.
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            api_key: self.gemini_api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
