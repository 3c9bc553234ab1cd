//! HTTP Handlers

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::domain::value_object::user_name::UserName;
use auth::presentation::middleware::CurrentUser;

use crate::application::generate_question::{GenerateQuestionUseCase, QuestionOutcome};
use crate::application::progress::GetProgressUseCase;
use crate::application::submit_answer::{SubmitAnswerInput, SubmitAnswerUseCase};
use crate::domain::generator::QuestionGenerator;
use crate::error::{QuizError, QuizResult};
use crate::presentation::dto::{
    GenerateFailureResponse, ProgressResponse, SubmitRequest, SubmitResponse,
};

/// Shared state for quiz handlers
pub struct QuizAppState<R, G>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    G: QuestionGenerator + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    /// Absent when no generation credential is configured (tier-1
    /// fallback is served instead)
    pub generator: Option<Arc<G>>,
}

impl<R, G> Clone for QuizAppState<R, G>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    G: QuestionGenerator + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            generator: self.generator.clone(),
        }
    }
}

// ============================================================================
// Generate
// ============================================================================

/// GET /api/quiz/generate
///
/// Infallible as a handler: provider faults are rendered as the 500
/// failure envelope with a usable default question embedded.
pub async fn generate_question<R, G>(
    State(state): State<QuizAppState<R, G>>,
    Extension(user): Extension<CurrentUser>,
) -> Response
where
    R: UserRepository + Clone + Send + Sync + 'static,
    G: QuestionGenerator + Send + Sync + 'static,
{
    tracing::debug!(user_name = %user.user_name, "Generating question");

    let use_case = GenerateQuestionUseCase::new(state.generator.clone());

    match use_case.execute().await {
        QuestionOutcome::Generated(question) => (StatusCode::OK, Json(question)).into_response(),
        QuestionOutcome::Fallback(question) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(GenerateFailureResponse {
                error: "Failed to generate question".to_string(),
                default_question: question,
            }),
        )
            .into_response(),
    }
}

// ============================================================================
// Submit
// ============================================================================

/// POST /api/quiz/submit
pub async fn submit_answer<R, G>(
    State(state): State<QuizAppState<R, G>>,
    Extension(user): Extension<CurrentUser>,
    Json(req): Json<SubmitRequest>,
) -> QuizResult<Json<SubmitResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    G: QuestionGenerator + Send + Sync + 'static,
{
    let (question_id, answer) = match (req.question_id, req.answer) {
        (Some(q), Some(a)) => (q, a),
        _ => return Err(QuizError::MissingField("answer or question ID")),
    };

    let use_case = SubmitAnswerUseCase::new(state.repo.clone());

    let output = use_case
        .execute(
            &UserName::new(user.user_name),
            SubmitAnswerInput {
                question_id,
                answer,
                is_correct: req.is_correct,
            },
        )
        .await?;

    Ok(Json(SubmitResponse {
        message: "Answer submitted successfully".to_string(),
        is_correct: output.is_correct,
        score: output.score,
        quizzes_completed: output.quizzes_completed,
    }))
}

// ============================================================================
// Progress
// ============================================================================

/// GET /api/quiz/progress
pub async fn get_progress<R, G>(
    State(state): State<QuizAppState<R, G>>,
    Extension(user): Extension<CurrentUser>,
) -> QuizResult<Json<ProgressResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
    G: QuestionGenerator + Send + Sync + 'static,
{
    let use_case = GetProgressUseCase::new(state.repo.clone());

    let progress = use_case.execute(&UserName::new(user.user_name)).await?;

    Ok(Json(ProgressResponse {
        score: progress.score,
        quizzes_completed: progress.quizzes_completed,
    }))
}
