//! Repository Traits
//!
//! Interface for the credential store. Implementation is in the
//! infrastructure layer.

use crate::domain::entity::user::{QuizProgress, UserRecord};
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// Credential store trait
///
/// All progress mutations are read-modify-write on a single record, so
/// implementations must provide mutual exclusion per record (a single
/// coarse lock is acceptable).
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user record
    ///
    /// Fails with `UserNameTaken` if the user name is already present;
    /// the existing record is left untouched. Not idempotent.
    async fn create(&self, user: &UserRecord) -> AuthResult<()>;

    /// Verify a credential pair
    ///
    /// Exact, case-sensitive comparison. An unknown user and a wrong
    /// password are indistinguishable to the caller
    /// (`InvalidCredentials` either way).
    async fn authenticate(&self, user_name: &UserName, password: &str) -> AuthResult<UserRecord>;

    /// Record a submitted answer and return the updated progress
    ///
    /// Fails with `UserNotFound` (rather than silently no-opping) when
    /// the user name is absent, so that "authenticated but unknown
    /// user" surfaces to handlers.
    async fn record_answer(&self, user_name: &UserName, is_correct: bool)
    -> AuthResult<QuizProgress>;

    /// Get a user's current progress
    async fn progress(&self, user_name: &UserName) -> AuthResult<QuizProgress>;
}
