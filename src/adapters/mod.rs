//! Adapter interface for the language-model endpoint.
//!
//! Adapters provide a unified interface for model invocation so stages can
//! be tested against substitute implementations.

pub mod groq;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

// Re-export the Groq adapter
pub use groq::GroqAdapter;

/// Errors from model invocation
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Trait for language-model endpoints.
///
/// Two call shapes: free-text completion, and schema-constrained
/// completion. The constrained form returns `Ok(None)` when the decode
/// produced nothing usable; transport failures are `Err`.
#[async_trait]
pub trait ModelAdapter: Send + Sync {
    /// Human-readable adapter name
    fn name(&self) -> &str;

    /// Free-text completion
    async fn invoke(&self, prompt: &str) -> Result<String, ModelError>;

    /// Schema-constrained completion.
    ///
    /// The returned value, when present, is expected to conform to
    /// `schema`; callers deserialize it into their contract type and treat
    /// a conformance failure the same as an absent value.
    async fn invoke_structured(
        &self,
        prompt: &str,
        schema: &Value,
    ) -> Result<Option<Value>, ModelError>;
}
