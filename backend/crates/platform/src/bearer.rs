//! Bearer Token Extraction
//!
//! Common handling for the `Authorization: Bearer <token>` header.

use axum::http::{HeaderMap, header};
use thiserror::Error;

/// Error when extracting a bearer token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BearerError {
    /// No Authorization header was supplied
    #[error("Authorization header is missing")]
    MissingHeader,

    /// Header present but not a well-formed `Bearer <token>` value
    #[error("Authorization header is malformed")]
    MalformedHeader,
}

/// Extract the token from an `Authorization: Bearer <token>` header
///
/// The header value is split on whitespace; anything other than exactly
/// a `Bearer` scheme followed by a single token is rejected.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<String, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::MissingHeader)?;

    let value = value.to_str().map_err(|_| BearerError::MalformedHeader)?;

    let mut parts = value.split_whitespace();
    let scheme = parts.next().ok_or(BearerError::MalformedHeader)?;
    let token = parts.next().ok_or(BearerError::MalformedHeader)?;

    if !scheme.eq_ignore_ascii_case("Bearer") || parts.next().is_some() {
        return Err(BearerError::MalformedHeader);
    }

    Ok(token.to_string())
}
