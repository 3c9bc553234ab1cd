//! End-to-end API tests
//!
//! Drives the assembled router in memory through `tower::ServiceExt`,
//! covering the register/login/quiz flow and the auth failure paths.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use auth::application::config::AuthConfig;
use auth::infra::memory::InMemoryUserRepository;

/// Build an app with no generation credential (sample question tier)
fn app() -> Router {
    api::build_router(
        InMemoryUserRepository::new(),
        None,
        Arc::new(AuthConfig::default()),
    )
}

/// Send one request and decode the JSON body
///
/// Router clones share the underlying user store, so sequential calls
/// against clones of one `app()` observe the same state.
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, value)
}

async fn register(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await
}

async fn login(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
    send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "username": username, "password": password })),
    )
    .await
}

#[tokio::test]
async fn test_register_login_submit_progress_flow() {
    let app = app();

    // Register
    let (status, body) = register(&app, "alice", "s3cret").await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Registration successful");

    // Login
    let (status, body) = login(&app, "alice", "s3cret").await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();
    assert!(!token.is_empty());
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["score"], 0);
    assert_eq!(body["user"]["quizzes_completed"], 0);

    // Fresh progress
    let (status, body) = send(&app, Method::GET, "/api/quiz/progress", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 0);
    assert_eq!(body["quizzes_completed"], 0);

    // Submit a correct answer
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quiz/submit",
        Some(&token),
        Some(json!({ "questionId": "sample_question_1", "answer": 0, "is_correct": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Answer submitted successfully");
    assert_eq!(body["is_correct"], true);
    assert_eq!(body["score"], 1);
    assert_eq!(body["quizzes_completed"], 1);

    // Progress reflects the submission
    let (status, body) = send(&app, Method::GET, "/api/quiz/progress", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 1);
    assert_eq!(body["quizzes_completed"], 1);
}

#[tokio::test]
async fn test_generate_serves_sample_question_without_credential() {
    let app = app();

    register(&app, "alice", "s3cret").await;
    let (_, body) = login(&app, "alice", "s3cret").await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(&app, Method::GET, "/api/quiz/generate", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "sample_question_1");
    assert_eq!(body["options"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_submit_with_omitted_correctness_counts_as_incorrect() {
    let app = app();

    register(&app, "alice", "s3cret").await;
    let (_, body) = login(&app, "alice", "s3cret").await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quiz/submit",
        Some(&token),
        Some(json!({ "questionId": "sample_question_1", "answer": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_correct"], false);
    assert_eq!(body["score"], 0);
    assert_eq!(body["quizzes_completed"], 1);
}

#[tokio::test]
async fn test_quiz_routes_require_a_token() {
    let app = app();

    for (method, uri) in [
        (Method::GET, "/api/quiz/generate"),
        (Method::POST, "/api/quiz/submit"),
        (Method::GET, "/api/quiz/progress"),
    ] {
        let (status, body) = send(&app, method, uri, None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body["error"], "Token is missing", "{uri}");
    }
}

#[tokio::test]
async fn test_malformed_authorization_header_is_rejected() {
    let app = app();

    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/quiz/progress")
        .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_garbage_token_is_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/quiz/progress",
        Some("not.a-real-token"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Token is invalid");
}

#[tokio::test]
async fn test_duplicate_registration_is_rejected() {
    let app = app();

    register(&app, "alice", "s3cret").await;
    let (status, body) = register(&app, "alice", "other").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username already exists");
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let app = app();

    register(&app, "alice", "s3cret").await;
    let (status, body) = login(&app, "alice", "wrong").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_missing_credentials_are_rejected() {
    let app = app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "username": "alice" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing username or password");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "password": "s3cret" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing username or password");
}

#[tokio::test]
async fn test_submit_with_missing_fields_is_rejected() {
    let app = app();

    register(&app, "alice", "s3cret").await;
    let (_, body) = login(&app, "alice", "s3cret").await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/quiz/submit",
        Some(&token),
        Some(json!({ "questionId": "sample_question_1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing answer or question ID");
}
