//! Submit Answer Use Case
//!
//! Records a submitted answer against the user's progress counters.
//!
//! The client-supplied correctness flag is trusted as-is: the answer
//! is not re-validated against a server-retained question, because
//! questions are never stored. Changing this would alter observable
//! behavior.

use std::sync::Arc;

use auth::domain::repository::UserRepository;
use auth::domain::value_object::user_name::UserName;

use crate::error::QuizResult;

/// Submit answer input
pub struct SubmitAnswerInput {
    /// Id of the question being answered (logged only)
    pub question_id: String,
    /// Selected option index (logged only)
    pub answer: i64,
    /// Client-reported correctness
    pub is_correct: bool,
}

/// Submit answer output
#[derive(Debug)]
pub struct SubmitAnswerOutput {
    pub is_correct: bool,
    pub score: u32,
    pub quizzes_completed: u32,
}

/// Submit answer use case
pub struct SubmitAnswerUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> SubmitAnswerUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_name: &UserName,
        input: SubmitAnswerInput,
    ) -> QuizResult<SubmitAnswerOutput> {
        let progress = self.repo.record_answer(user_name, input.is_correct).await?;

        tracing::info!(
            user_name = %user_name,
            question_id = %input.question_id,
            answer = input.answer,
            is_correct = input.is_correct,
            "Answer submitted"
        );

        Ok(SubmitAnswerOutput {
            is_correct: input.is_correct,
            score: progress.score,
            quizzes_completed: progress.quizzes_completed,
        })
    }
}
