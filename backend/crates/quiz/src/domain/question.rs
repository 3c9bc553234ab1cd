//! Quiz Question Entity
//!
//! Questions are transient: constructed per request, never persisted,
//! and never linked back to a user record.

use serde::{Deserialize, Serialize};

/// Number of answer options every question carries
pub const OPTION_COUNT: usize = 4;

/// A multiple-choice quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question identifier (fixed for fallback content, fresh per
    /// generation otherwise)
    pub id: String,
    /// Question text
    pub question: String,
    /// Exactly four answer options, order significant
    pub options: Vec<String>,
    /// Index of the correct option
    pub correct_answer: usize,
}

impl Question {
    /// Tier-1 fallback: served when no generator is configured
    pub fn sample() -> Self {
        Self {
            id: "sample_question_1".to_string(),
            question: "What is the capital of France?".to_string(),
            options: vec![
                "Paris".to_string(),
                "London".to_string(),
                "Berlin".to_string(),
                "Madrid".to_string(),
            ],
            correct_answer: 0,
        }
    }

    /// Tier-2 fallback: served when a generator response cannot be
    /// parsed into the question shape
    pub fn parse_fallback() -> Self {
        Self {
            id: "generated_question_1".to_string(),
            question: "Which country has the largest population?".to_string(),
            options: vec![
                "China".to_string(),
                "India".to_string(),
                "United States".to_string(),
                "Indonesia".to_string(),
            ],
            correct_answer: 1,
        }
    }

    /// Tier-3 fallback: served when the generator call itself fails
    pub fn error_fallback() -> Self {
        Self {
            id: "fallback_question_1".to_string(),
            question: "Which river is the longest in the world?".to_string(),
            options: vec![
                "Nile".to_string(),
                "Amazon".to_string(),
                "Yangtze".to_string(),
                "Mississippi".to_string(),
            ],
            correct_answer: 0,
        }
    }

    /// Whether the question satisfies the expected shape
    pub fn is_well_formed(&self) -> bool {
        self.options.len() == OPTION_COUNT && self.correct_answer < OPTION_COUNT
    }
}
