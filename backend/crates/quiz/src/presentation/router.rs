//! Quiz Router
//!
//! Every quiz route sits behind the auth crate's `require_session`
//! middleware; handlers can rely on the `CurrentUser` extension.

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::application::config::AuthConfig;
use auth::domain::repository::UserRepository;
use auth::presentation::middleware::{AuthMiddlewareState, require_session};

use crate::domain::generator::QuestionGenerator;
use crate::presentation::handlers::{self, QuizAppState};

/// Create the Quiz router
///
/// `generator` is `None` when no generation credential is configured;
/// the provider then serves the tier-1 sample question.
pub fn quiz_router<R, G>(repo: R, generator: Option<G>, config: Arc<AuthConfig>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
    G: QuestionGenerator + Send + Sync + 'static,
{
    let state = QuizAppState {
        repo: Arc::new(repo),
        generator: generator.map(Arc::new),
    };

    let auth_state = AuthMiddlewareState { config };

    Router::new()
        .route("/generate", get(handlers::generate_question::<R, G>))
        .route("/submit", post(handlers::submit_answer::<R, G>))
        .route("/progress", get(handlers::get_progress::<R, G>))
        .layer(middleware::from_fn_with_state(auth_state, require_session))
        .with_state(state)
}
