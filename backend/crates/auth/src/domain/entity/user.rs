//! User Entity
//!
//! A user record owns both the login credential and the quiz progress
//! counters. Records are created at registration, mutated in place by
//! answer submission, and never deleted.

use chrono::{DateTime, Utc};

use crate::domain::value_object::user_name::UserName;

/// User record
///
/// The password is stored as-is (demo scope, no hashing).
#[derive(Debug, Clone)]
pub struct UserRecord {
    /// User name (unique, for login and display)
    pub user_name: UserName,
    /// Plaintext password
    pub password: String,
    /// Number of correctly answered questions
    pub score: u32,
    /// Number of submitted answers (correct or not)
    pub quizzes_completed: u32,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Create a new user record with zeroed progress
    pub fn new(user_name: UserName, password: String) -> Self {
        Self {
            user_name,
            password,
            score: 0,
            quizzes_completed: 0,
            created_at: Utc::now(),
        }
    }

    /// Record a submitted answer
    ///
    /// Always counts the quiz as completed; the score only moves when
    /// the answer was correct.
    pub fn record_answer(&mut self, is_correct: bool) {
        if is_correct {
            self.score += 1;
        }
        self.quizzes_completed += 1;
    }

    /// Current quiz progress
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            score: self.score,
            quizzes_completed: self.quizzes_completed,
        }
    }
}

/// Snapshot of a user's quiz progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub score: u32,
    pub quizzes_completed: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_zeroed_progress() {
        let user = UserRecord::new(UserName::new("alice"), "s3cret".to_string());
        assert_eq!(user.score, 0);
        assert_eq!(user.quizzes_completed, 0);
    }

    #[test]
    fn test_record_answer_correct() {
        let mut user = UserRecord::new(UserName::new("alice"), "s3cret".to_string());
        user.record_answer(true);
        assert_eq!(
            user.progress(),
            QuizProgress {
                score: 1,
                quizzes_completed: 1
            }
        );
    }

    #[test]
    fn test_record_answer_incorrect() {
        let mut user = UserRecord::new(UserName::new("alice"), "s3cret".to_string());
        user.record_answer(false);
        assert_eq!(
            user.progress(),
            QuizProgress {
                score: 0,
                quizzes_completed: 1
            }
        );
    }
}
