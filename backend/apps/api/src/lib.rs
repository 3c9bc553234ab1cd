//! API Router Assembly
//!
//! Builds the full application router from its parts. Lives in the
//! library target so integration tests can drive the whole HTTP
//! surface in memory without binding a socket.

use axum::response::Html;
use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use auth::application::config::AuthConfig;
use auth::infra::memory::InMemoryUserRepository;
use auth::presentation::router::auth_router;
use kernel::error::app_error::{AppError, AppResult};
use quiz::infra::gemini::GeminiClient;
use quiz::presentation::router::quiz_router;

/// Directory served at /static (relative to the working directory)
const STATIC_DIR: &str = "static";

/// Build the application router
///
/// `generator` is `None` when no generation credential is configured;
/// question generation then serves its built-in sample question.
pub fn build_router(
    repo: InMemoryUserRepository,
    generator: Option<GeminiClient>,
    config: Arc<AuthConfig>,
) -> Router {
    Router::new()
        .route("/", get(index))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .nest("/api/auth", auth_router(repo.clone(), config.clone()))
        .nest("/api/quiz", quiz_router(repo, generator, config))
        .layer(TraceLayer::new_for_http())
}

/// GET / - serve the frontend entry page
async fn index() -> AppResult<Html<String>> {
    let page = tokio::fs::read_to_string(format!("{STATIC_DIR}/index.html"))
        .await
        .map_err(|e| AppError::internal("Failed to load index page").with_source(e))?;

    Ok(Html(page))
}
