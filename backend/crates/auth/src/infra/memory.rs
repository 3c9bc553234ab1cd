//! In-Memory Credential Store
//!
//! Process-memory implementation of [`UserRepository`]. State lives for
//! the lifetime of the process and is lost on restart; there is no
//! persistence layer by design.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::user::{QuizProgress, UserRecord};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

/// In-memory user repository
///
/// A single coarse `RwLock` guards the whole map: answer submission is
/// a read-modify-write on one record, and a global lock is the
/// simplest correct choice at this scale. Cloning shares the map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, UserRecord>>>,
}

impl InMemoryUserRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users (test/diagnostics helper)
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &UserRecord) -> AuthResult<()> {
        // Check and insert under one write guard so concurrent
        // registrations of the same name cannot both succeed.
        let mut users = self.users.write().await;
        if users.contains_key(user.user_name.as_str()) {
            return Err(AuthError::UserNameTaken);
        }
        users.insert(user.user_name.as_str().to_string(), user.clone());
        Ok(())
    }

    async fn authenticate(&self, user_name: &UserName, password: &str) -> AuthResult<UserRecord> {
        let users = self.users.read().await;
        let user = users
            .get(user_name.as_str())
            .ok_or(AuthError::InvalidCredentials)?;

        if user.password != password {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user.clone())
    }

    async fn record_answer(
        &self,
        user_name: &UserName,
        is_correct: bool,
    ) -> AuthResult<QuizProgress> {
        let mut users = self.users.write().await;
        let user = users
            .get_mut(user_name.as_str())
            .ok_or(AuthError::UserNotFound)?;

        user.record_answer(is_correct);
        Ok(user.progress())
    }

    async fn progress(&self, user_name: &UserName) -> AuthResult<QuizProgress> {
        let users = self.users.read().await;
        let user = users
            .get(user_name.as_str())
            .ok_or(AuthError::UserNotFound)?;

        Ok(user.progress())
    }
}
