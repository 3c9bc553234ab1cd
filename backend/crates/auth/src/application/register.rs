//! Register Use Case
//!
//! Creates a new user account with zeroed quiz progress.

use std::sync::Arc;

use crate::domain::entity::user::UserRecord;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// Register input
pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: RegisterInput) -> AuthResult<()> {
        let user_name = UserName::new(input.user_name);
        let user = UserRecord::new(user_name, input.password);

        self.repo.create(&user).await?;

        tracing::info!(user_name = %user.user_name, "User registered");

        Ok(())
    }
}
