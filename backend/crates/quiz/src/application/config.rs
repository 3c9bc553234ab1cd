//! Application Configuration
//!
//! Configuration for the Quiz application layer.

use std::time::Duration;

/// Quiz application configuration
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Gemini model identifier
    pub model: String,
    /// Upper bound on a single generation request
    pub request_timeout: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}
