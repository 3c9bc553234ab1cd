//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::http::{self, Method, header};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auth::application::config::AuthConfig;
use auth::infra::memory::InMemoryUserRepository;
use quiz::application::config::QuizConfig;
use quiz::infra::gemini::GeminiClient;

const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,quiz=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Token signing secret
    let config = match env::var("JWT_SECRET_KEY") {
        Ok(secret) if !secret.is_empty() => Arc::new(AuthConfig::from_secret(secret)),
        _ => {
            tracing::warn!(
                "JWT_SECRET_KEY not set, using the insecure development secret; \
                 set it before exposing this server"
            );
            Arc::new(AuthConfig::default())
        }
    };

    // Question generation credential (optional)
    let generator = match env::var("GEMINI_API_KEY") {
        Ok(key) if !key.is_empty() => {
            let client = GeminiClient::new(key, &QuizConfig::default())?;
            tracing::info!("Question generation enabled");
            Some(client)
        }
        _ => {
            tracing::warn!("GEMINI_API_KEY not set, serving the built-in sample question");
            None
        }
    };

    // Reserved for the places feature; read so a misplaced value is visible in logs
    if env::var("FOURSQUARE_API_KEY").is_ok() {
        tracing::info!("FOURSQUARE_API_KEY is configured but not used yet");
    }

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:8000,http://127.0.0.1:8000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let repo = InMemoryUserRepository::new();
    let app = api::build_router(repo, generator, config).layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
