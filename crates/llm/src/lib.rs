//! Hackboard LLM
//!
//! Provides a unified interface for calling generative text providers.
//! The only shipped implementation is Google Gemini (`generateContent`),
//! but the `TextGenerator` trait keeps the application crate testable
//! against mock providers.
//!
//! Also includes the typed response-schema representation sent with
//! structured-output requests and the HTTP client factory.

pub mod gemini;
pub mod http_client;
pub mod provider;
pub mod types;

// Re-export main types
pub use gemini::GeminiProvider;
pub use http_client::build_http_client;
pub use provider::TextGenerator;
pub use types::*;
