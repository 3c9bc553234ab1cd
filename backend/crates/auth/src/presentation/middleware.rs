//! Auth Middleware
//!
//! An explicit middleware stage for requiring a valid bearer token on
//! protected routes. The verified user name is made available to
//! downstream handlers via a request extension.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::bearer::extract_bearer_token;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub config: Arc<AuthConfig>,
}

/// Verified user identity stored in request extensions
///
/// The embedded user name passed signature and expiry checks, but is
/// not guaranteed to exist in the credential store; handlers must
/// still treat "authenticated but unknown user" as its own condition.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_name: String,
}

/// Middleware that requires a valid session token
///
/// Rejects with 401 when the Authorization header is absent or
/// malformed (`MissingToken`), the signature fails (`InvalidToken`),
/// or the expiry has passed (`ExpiredToken`).
pub async fn require_session(
    State(state): State<AuthMiddlewareState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = match extract_bearer_token(req.headers()) {
        Ok(token) => token,
        Err(e) => return Err(AuthError::from(e).into_response()),
    };

    let tokens = TokenService::new(state.config.clone());

    let user_name = match tokens.verify(&token) {
        Ok(user_name) => user_name,
        Err(e) => return Err(e.into_response()),
    };

    req.extensions_mut().insert(CurrentUser { user_name });

    Ok(next.run(req).await)
}
