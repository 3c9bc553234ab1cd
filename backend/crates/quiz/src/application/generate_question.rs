//! Generate Question Use Case
//!
//! The question provider. Never fails outward: every internal failure
//! is mapped to one of three fallback tiers, evaluated per call:
//!
//! 1. No generator configured -> fixed sample question.
//! 2. Generator responded but the text does not parse into the
//!    question shape -> fixed parse-fallback question (the parse error
//!    is logged, not surfaced).
//! 3. The call itself failed -> fixed error-fallback question, flagged
//!    as [`QuestionOutcome::Fallback`] so callers can tell it apart
//!    from a normal success.
//!
//! A successfully parsed question gets a fresh id stamped from the
//! current time before it is returned.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use crate::domain::generator::QuestionGenerator;
use crate::domain::question::Question;

/// Prompt sent to the generation service
pub const GENERATION_PROMPT: &str = r#"
Generate an interesting geography quiz question about world geography.
Provide the question and 4 options where one is correct.
Format the response as JSON with:
{
    "question": "the question text",
    "options": ["option1", "option2", "option3", "option4"],
    "correct_answer": index_of_correct_answer
}
"#;

/// Result of a generation attempt
///
/// Both variants carry a complete question; `Fallback` marks the
/// error-flagged tier so the handler can render the failure envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionOutcome {
    /// Question produced normally (including the non-flagged fallback
    /// tiers)
    Generated(Question),
    /// Question substituted after a generator fault
    Fallback(Question),
}

impl QuestionOutcome {
    /// The question carried by either variant
    pub fn question(&self) -> &Question {
        match self {
            QuestionOutcome::Generated(q) | QuestionOutcome::Fallback(q) => q,
        }
    }
}

/// Generated payload shape expected from the service
#[derive(Debug, Deserialize)]
struct GeneratedPayload {
    question: String,
    options: Vec<String>,
    correct_answer: usize,
}

/// Generate question use case
pub struct GenerateQuestionUseCase<G>
where
    G: QuestionGenerator,
{
    generator: Option<Arc<G>>,
}

impl<G> GenerateQuestionUseCase<G>
where
    G: QuestionGenerator,
{
    pub fn new(generator: Option<Arc<G>>) -> Self {
        Self { generator }
    }

    /// Produce a question; infallible by contract
    pub async fn execute(&self) -> QuestionOutcome {
        let Some(generator) = &self.generator else {
            return QuestionOutcome::Generated(Question::sample());
        };

        match generator.generate(GENERATION_PROMPT).await {
            Ok(text) => match parse_generated(&text) {
                Some(question) => QuestionOutcome::Generated(question),
                None => {
                    tracing::warn!("Generated response did not parse, using fallback question");
                    QuestionOutcome::Generated(Question::parse_fallback())
                }
            },
            Err(e) => {
                tracing::error!(error = %e, "Question generation failed");
                QuestionOutcome::Fallback(Question::error_fallback())
            }
        }
    }
}

/// Parse a generated response into a well-formed question
///
/// Returns `None` on any shape violation (not JSON, wrong option
/// count, out-of-range index). A fresh id is stamped on success.
pub(crate) fn parse_generated(text: &str) -> Option<Question> {
    let body = strip_code_fences(text);

    let payload: GeneratedPayload = serde_json::from_str(body).ok()?;

    let question = Question {
        id: fresh_question_id(),
        question: payload.question,
        options: payload.options,
        correct_answer: payload.correct_answer,
    };

    question.is_well_formed().then_some(question)
}

/// Unique question id derived from the current time
fn fresh_question_id() -> String {
    format!("question_{}", Utc::now().timestamp_millis())
}

/// Strip a surrounding Markdown code fence, if present
///
/// Generation services routinely wrap JSON in ```json fences even when
/// asked for bare JSON.
fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the first newline
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.strip_suffix("```").unwrap_or(body).trim()
}
