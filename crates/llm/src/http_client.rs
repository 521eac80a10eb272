//! HTTP Client Factory
//!
//! Provides a factory function for building reqwest clients with a
//! request timeout.

use std::time::Duration;

/// Build a `reqwest::Client` with the given request timeout.
///
/// The underlying API has no cancellation primitive, so the timeout is the
/// only bound on a hung provider call; it surfaces as a network error.
pub fn build_http_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .expect("failed to build reqwest client")
}
