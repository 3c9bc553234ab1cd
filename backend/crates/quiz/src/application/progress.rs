//! Get Progress Use Case

use std::sync::Arc;

use auth::domain::entity::user::QuizProgress;
use auth::domain::repository::UserRepository;
use auth::domain::value_object::user_name::UserName;

use crate::error::QuizResult;

/// Get progress use case
pub struct GetProgressUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> GetProgressUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_name: &UserName) -> QuizResult<QuizProgress> {
        let progress = self.repo.progress(user_name).await?;
        Ok(progress)
    }
}
