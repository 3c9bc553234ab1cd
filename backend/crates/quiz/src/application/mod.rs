//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod generate_question;
pub mod progress;
pub mod submit_answer;

// Re-exports
pub use config::QuizConfig;
pub use generate_question::{GenerateQuestionUseCase, QuestionOutcome};
pub use progress::GetProgressUseCase;
pub use submit_answer::{SubmitAnswerInput, SubmitAnswerOutput, SubmitAnswerUseCase};
