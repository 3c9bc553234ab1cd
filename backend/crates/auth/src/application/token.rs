//! Token Service
//!
//! Issues and verifies stateless, HMAC-signed session tokens. A token
//! embeds the user name and an absolute expiry; validity is determined
//! purely by signature and expiry at verification time, so no session
//! state is kept server-side. The trade-off is that tokens cannot be
//! revoked before they expire.
//!
//! Wire format: `<claims_b64>.<sig_b64>` where `claims_b64` is the
//! unpadded URL-safe base64 of the JSON claims and `sig_b64` the
//! HMAC-SHA256 of `claims_b64` under the configured secret.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};
use platform::crypto::{from_b64url, hmac_sha256, hmac_sha256_verify, to_b64url};

/// Signed token claims
#[derive(Debug, Serialize, Deserialize)]
struct TokenClaims {
    /// User name the token is bound to
    user: String,
    /// Absolute expiry as unix seconds
    exp: i64,
}

/// Stateless session token service
#[derive(Debug, Clone)]
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// Issue a signed token for the given user, expiring `token_ttl`
    /// from now
    pub fn issue(&self, user_name: &UserName) -> String {
        self.issue_at(user_name, Utc::now())
    }

    /// Issue a token relative to an explicit instant (deterministic
    /// variant for tests)
    pub fn issue_at(&self, user_name: &UserName, now: DateTime<Utc>) -> String {
        let exp = now + Duration::seconds(self.config.token_ttl_secs());

        let claims = TokenClaims {
            user: user_name.as_str().to_string(),
            exp: exp.timestamp(),
        };

        // Serializing a plain struct of string + integer cannot fail
        let claims_json = serde_json::to_vec(&claims).expect("token claims serialize to JSON");

        let claims_b64 = to_b64url(&claims_json);
        let signature = hmac_sha256(&self.config.token_secret, claims_b64.as_bytes());

        format!("{}.{}", claims_b64, to_b64url(&signature))
    }

    /// Verify a token and return the embedded user name
    ///
    /// The embedded user need not exist in the credential store; that
    /// condition is the caller's to handle.
    pub fn verify(&self, token: &str) -> AuthResult<String> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against an explicit instant
    ///
    /// A token is accepted strictly before its expiry and rejected at
    /// or after it.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<String> {
        let (claims_b64, sig_b64) = token.split_once('.').ok_or(AuthError::InvalidToken)?;
        if claims_b64.is_empty() || sig_b64.contains('.') {
            return Err(AuthError::InvalidToken);
        }

        let signature = from_b64url(sig_b64).map_err(|_| AuthError::InvalidToken)?;

        if !hmac_sha256_verify(&self.config.token_secret, claims_b64.as_bytes(), &signature) {
            return Err(AuthError::InvalidToken);
        }

        let claims_json = from_b64url(claims_b64).map_err(|_| AuthError::InvalidToken)?;
        let claims: TokenClaims =
            serde_json::from_slice(&claims_json).map_err(|_| AuthError::InvalidToken)?;

        if now.timestamp() >= claims.exp {
            return Err(AuthError::ExpiredToken);
        }

        Ok(claims.user)
    }
}
