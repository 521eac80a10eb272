//! Text Generator Trait
//!
//! Defines the common interface for generative text providers.

use async_trait::async_trait;

use super::types::{GenerationRequest, LlmError, LlmResult};

/// Trait implemented by all generative text providers.
///
/// Object-safe so callers can hold `Arc<dyn TextGenerator>` and tests can
/// substitute mock providers.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the provider name for identification.
    fn name(&self) -> &'static str;

    /// Returns the current model being used.
    fn model(&self) -> &str;

    /// Issue a single generation request and return the raw response text.
    ///
    /// Each call is a fresh network round trip; providers do not cache.
    async fn generate(&self, request: GenerationRequest) -> LlmResult<String>;
}

/// Helper function to create an error for missing API key
pub fn missing_api_key_error(provider: &str) -> LlmError {
    LlmError::AuthenticationFailed {
        message: format!("API key not configured for {}", provider),
    }
}

/// Helper function to parse HTTP error status codes
pub fn parse_http_error(status: u16, body: &str, provider: &str) -> LlmError {
    match status {
        401 => LlmError::AuthenticationFailed {
            message: format!("{}: Invalid API key", provider),
        },
        403 => LlmError::AuthenticationFailed {
            message: format!("{}: Access denied", provider),
        },
        404 => LlmError::ModelNotFound {
            model: body.to_string(),
        },
        429 => LlmError::RateLimited {
            message: body.to_string(),
        },
        400 => LlmError::InvalidRequest {
            message: body.to_string(),
        },
        500..=599 => LlmError::ServerError {
            message: body.to_string(),
            status: Some(status),
        },
        _ => LlmError::Other {
            message: format!("HTTP {}: {}", status, body),
        },
    }
}
