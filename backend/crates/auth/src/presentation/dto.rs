//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the original wire format (snake_case).

use serde::{Deserialize, Serialize};

// ============================================================================
// Register
// ============================================================================

/// Request for POST /api/auth/register
///
/// Fields are optional so that presence can be checked in the handler
/// and reported as 400 rather than a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Response for POST /api/auth/register
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

// ============================================================================
// Login
// ============================================================================

/// Request for POST /api/auth/login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Response for POST /api/auth/login
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// User block embedded in the login response
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub username: String,
    pub score: u32,
    pub quizzes_completed: u32,
}
