//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the original wire format: snake_case, except
//! `questionId` in the submit request.

use serde::{Deserialize, Serialize};

use crate::domain::question::Question;

// ============================================================================
// Submit
// ============================================================================

/// Request for POST /api/quiz/submit
///
/// `question_id` and `answer` are optional so presence can be checked
/// in the handler and reported as 400. `is_correct` defaults to false
/// when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    #[serde(rename = "questionId")]
    pub question_id: Option<String>,
    pub answer: Option<i64>,
    #[serde(default)]
    pub is_correct: bool,
}

/// Response for POST /api/quiz/submit
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub message: String,
    pub is_correct: bool,
    pub score: u32,
    pub quizzes_completed: u32,
}

// ============================================================================
// Progress
// ============================================================================

/// Response for GET /api/quiz/progress
#[derive(Debug, Clone, Serialize)]
pub struct ProgressResponse {
    pub score: u32,
    pub quizzes_completed: u32,
}

// ============================================================================
// Generate
// ============================================================================

/// Failure envelope for GET /api/quiz/generate (tier-3 fallback)
///
/// Rendered with status 500; carries a usable default question so
/// clients can keep going.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateFailureResponse {
    pub error: String,
    pub default_question: Question,
}
