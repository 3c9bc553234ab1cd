//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Signing secret used when `JWT_SECRET_KEY` is unset.
///
/// Insecure by definition; startup logs a warning when this is in use.
pub const DEFAULT_TOKEN_SECRET: &str = "default-secret-key-for-development";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Secret key for HMAC token signing
    pub token_secret: Vec<u8>,
    /// Token lifetime (30 minutes)
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: DEFAULT_TOKEN_SECRET.as_bytes().to_vec(),
            token_ttl: Duration::from_secs(30 * 60),
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn from_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Whether the insecure development secret is in use
    pub fn uses_default_secret(&self) -> bool {
        self.token_secret == DEFAULT_TOKEN_SECRET.as_bytes()
    }

    /// Token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}
