//! User Name Value Object

use std::fmt;

/// User name (unique key into the credential store)
///
/// No normalization or sanitization is applied: lookups are exact and
/// case-sensitive, matching the registration input byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Get as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserName {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}
