//! Question Generator Trait
//!
//! Seam between the question provider and the external generation
//! service. Implementations return the raw response text; parsing into
//! the question shape is the provider's concern.

use thiserror::Error;

/// Error from a generation attempt
///
/// Transport-agnostic on purpose: the provider only needs to know that
/// the call failed, never why, because every failure routes to the
/// same fallback tier.
#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    /// Request could not be completed (network error, timeout)
    #[error("Generation request failed: {0}")]
    Request(String),

    /// Service answered with a non-success status
    #[error("Generation service returned status {0}")]
    Status(u16),

    /// Service answered but produced no text
    #[error("Generation service returned an empty response")]
    EmptyResponse,
}

/// External question generation service
#[trait_variant::make(QuestionGenerator: Send)]
pub trait LocalQuestionGenerator {
    /// Single best-effort generation attempt for the given prompt
    ///
    /// No retries and no caching; the call must be bounded by a
    /// timeout so it cannot block indefinitely.
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError>;
}
