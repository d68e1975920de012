//! AI provider abstraction and implementations.
//!
//! This module provides a trait-based seam in front of the upstream
//! generative-language API, allowing the HTTP handler to be tested
//! against a mock backend.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
///
/// Upstream failures are recoverable: the handler maps every variant to a
/// user-facing answer string rather than propagating it.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    /// Non-success HTTP status from the upstream API, with the raw body.
    #[error("API error {status}: {body}")]
    ApiError { status: u16, body: String },

    /// Transport failure or unparseable response body.
    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Reply from a text generation provider.
pub struct ProviderReply {
    /// Generated text, or `None` when the upstream response was well-formed
    /// HTTP but did not carry the expected candidate/part/text shape.
    pub text: Option<String>,
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a text response for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<ProviderReply, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
