//! Quiz Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Question entity and generator trait
//! - `application/` - Use cases (generate, submit, progress)
//! - `infra/` - Gemini REST client
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Geography question generation via the Gemini API, with a
//!   three-tier fallback chain to fixed content
//! - Answer submission updating per-user progress counters
//! - Progress lookup
//!
//! All quiz routes require a valid bearer token (see the auth crate's
//! middleware). Generation never fails outward: provider faults are
//! absorbed and replaced with fallback content.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::QuizConfig;
pub use application::generate_question::QuestionOutcome;
pub use domain::question::Question;
pub use error::{QuizError, QuizResult};
pub use infra::gemini::GeminiClient;
pub use presentation::router::quiz_router;

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod router {
    pub use crate::presentation::router::*;
}
