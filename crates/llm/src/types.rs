//! Shared LLM Types
//!
//! Error taxonomy, provider configuration, generation requests, and the
//! typed response-schema representation used for structured output.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors surfaced by LLM providers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LlmError {
    /// API key missing or rejected
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    /// Provider-side rate limiting or quota exhaustion
    #[error("Rate limited: {message}")]
    RateLimited { message: String },

    /// Requested model does not exist
    #[error("Model not found: {model}")]
    ModelNotFound { model: String },

    /// The provider rejected the request as malformed
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Provider-side 5xx failure
    #[error("Server error: {message}")]
    ServerError { message: String, status: Option<u16> },

    /// Connection-level failure, including request timeouts
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// The provider's response body could not be decoded
    #[error("Parse error: {message}")]
    ParseError { message: String },

    /// Fallback for unrecognized failure shapes
    #[error("{message}")]
    Other { message: String },
}

/// Result type alias for provider operations
pub type LlmResult<T> = Result<T, LlmError>;

/// Configuration for a provider instance.
///
/// The API key is injected explicitly rather than read from the
/// environment inside the provider, so tests can construct providers with
/// fake credentials. A missing key surfaces at call time, not construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key; `None` fails at call time with `AuthenticationFailed`
    pub api_key: Option<String>,
    /// Model identifier, e.g. "gemini-2.5-flash"
    pub model: String,
    /// Override for the API base URL (testing, proxies)
    pub base_url: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            base_url: None,
            timeout_secs: 60,
        }
    }
}

/// A single text-generation request.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// Full prompt text
    pub prompt: String,
    /// Sampling temperature
    pub temperature: Option<f64>,
    /// Output length ceiling in tokens
    pub max_output_tokens: Option<u32>,
    /// When set, the provider is asked for a JSON response matching this schema
    pub response_schema: Option<Schema>,
}

impl GenerationRequest {
    /// Create a plain text request for the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the output token ceiling.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = Some(max);
        self
    }

    /// Request structured JSON output conforming to `schema`.
    pub fn with_response_schema(mut self, schema: Schema) -> Self {
        self.response_schema = Some(schema);
        self
    }
}

/// Value type of a schema node, in the OpenAPI subset Gemini accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    Object,
    String,
    Integer,
    Array,
}

/// A statically-typed response schema node.
///
/// Serializes to the exact wire format of Gemini's `responseSchema` field.
/// `BTreeMap` keeps property order deterministic for request snapshots in
/// tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<BTreeMap<String, Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    /// An object schema with the given properties; every listed property
    /// name is marked required.
    pub fn object(properties: Vec<(&str, Schema)>, required: Vec<&str>) -> Self {
        Self {
            schema_type: SchemaType::Object,
            description: None,
            properties: Some(
                properties
                    .into_iter()
                    .map(|(k, v)| (k.to_string(), v))
                    .collect(),
            ),
            items: None,
            required: Some(required.into_iter().map(String::from).collect()),
        }
    }

    /// A string schema with a description.
    pub fn string(description: impl Into<String>) -> Self {
        Self {
            schema_type: SchemaType::String,
            description: Some(description.into()),
            properties: None,
            items: None,
            required: None,
        }
    }

    /// An integer schema with a description.
    pub fn integer(description: impl Into<String>) -> Self {
        Self {
            schema_type: SchemaType::Integer,
            description: Some(description.into()),
            properties: None,
            items: None,
            required: None,
        }
    }

    /// An array schema with the given item schema and a description.
    pub fn array_of(items: Schema, description: impl Into<String>) -> Self {
        Self {
            schema_type: SchemaType::Array,
            description: Some(description.into()),
            properties: None,
            items: Some(Box::new(items)),
            required: None,
        }
    }
}
