//! Login Use Case
//!
//! Authenticates a user and issues a session token.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// Login input
pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

/// Login output
pub struct LoginOutput {
    /// Signed session token
    pub token: String,
    /// User name as registered
    pub user_name: String,
    /// Current score
    pub score: u32,
    /// Number of completed quizzes
    pub quizzes_completed: u32,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    tokens: TokenService,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            tokens: TokenService::new(config),
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user_name = UserName::new(input.user_name);

        let user = self.repo.authenticate(&user_name, &input.password).await?;

        let token = self.tokens.issue(&user.user_name);

        tracing::info!(user_name = %user.user_name, "User signed in");

        Ok(LoginOutput {
            token,
            user_name: user.user_name.as_str().to_string(),
            score: user.score,
            quizzes_completed: user.quizzes_completed,
        })
    }
}
