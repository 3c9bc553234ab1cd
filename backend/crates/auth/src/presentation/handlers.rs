//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserSummary,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/auth/register
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let (username, password) = require_credentials(req.username, req.password)?;

    let use_case = RegisterUseCase::new(state.repo.clone());

    use_case
        .execute(RegisterInput {
            user_name: username,
            password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful".to_string(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/auth/login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let (username, password) = require_credentials(req.username, req.password)?;

    let use_case = LoginUseCase::new(state.repo.clone(), state.config.clone());

    let output = use_case
        .execute(LoginInput {
            user_name: username,
            password,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: output.token,
        user: UserSummary {
            username: output.user_name,
            score: output.score,
            quizzes_completed: output.quizzes_completed,
        },
    }))
}

// ============================================================================
// Helper Functions
// ============================================================================

fn require_credentials(
    username: Option<String>,
    password: Option<String>,
) -> AuthResult<(String, String)> {
    match (username, password) {
        (Some(u), Some(p)) => Ok((u, p)),
        _ => Err(AuthError::MissingField("username or password")),
    }
}
