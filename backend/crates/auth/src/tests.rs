//! Unit tests for the auth crate

mod token_tests {
    use std::sync::Arc;

    use chrono::{Duration, Utc};

    use crate::application::config::AuthConfig;
    use crate::application::token::TokenService;
    use crate::domain::value_object::user_name::UserName;
    use crate::error::AuthError;

    fn service() -> TokenService {
        TokenService::new(Arc::new(AuthConfig::from_secret("test-secret")))
    }

    #[test]
    fn test_issue_verify_roundtrip() {
        let tokens = service();
        let token = tokens.issue(&UserName::new("alice"));
        assert_eq!(tokens.verify(&token).unwrap(), "alice");
    }

    #[test]
    fn test_token_valid_strictly_before_expiry() {
        let tokens = service();
        let now = Utc::now();
        let token = tokens.issue_at(&UserName::new("alice"), now);

        // One second before expiry: accepted
        let just_before = now + Duration::seconds(30 * 60 - 1);
        assert_eq!(tokens.verify_at(&token, just_before).unwrap(), "alice");
    }

    #[test]
    fn test_token_rejected_at_and_after_expiry() {
        let tokens = service();
        let now = Utc::now();
        let token = tokens.issue_at(&UserName::new("alice"), now);

        let at_expiry = now + Duration::seconds(30 * 60);
        assert!(matches!(
            tokens.verify_at(&token, at_expiry),
            Err(AuthError::ExpiredToken)
        ));

        let after_expiry = now + Duration::hours(2);
        assert!(matches!(
            tokens.verify_at(&token, after_expiry),
            Err(AuthError::ExpiredToken)
        ));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let tokens = service();
        let token = tokens.issue(&UserName::new("alice"));

        let (claims, _sig) = token.split_once('.').unwrap();
        let forged = format!("{claims}.AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA");

        assert!(matches!(
            tokens.verify(&forged),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let tokens = service();
        let other = TokenService::new(Arc::new(AuthConfig::from_secret("other-secret")));

        let token = other.issue(&UserName::new("alice"));
        assert!(matches!(tokens.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_malformed_tokens_rejected() {
        let tokens = service();
        for token in ["", "no-dot", "a.b.c", ".sig", "!!!.???"] {
            assert!(
                matches!(tokens.verify(token), Err(AuthError::InvalidToken)),
                "token: {token:?}"
            );
        }
    }
}

mod store_tests {
    use crate::domain::entity::user::{QuizProgress, UserRecord};
    use crate::domain::repository::UserRepository;
    use crate::domain::value_object::user_name::UserName;
    use crate::error::AuthError;
    use crate::infra::memory::InMemoryUserRepository;

    fn record(name: &str, password: &str) -> UserRecord {
        UserRecord::new(UserName::new(name), password.to_string())
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let repo = InMemoryUserRepository::new();
        repo.create(&record("alice", "s3cret")).await.unwrap();

        let user = repo
            .authenticate(&UserName::new("alice"), "s3cret")
            .await
            .unwrap();
        assert_eq!(user.user_name.as_str(), "alice");
        assert_eq!(user.score, 0);
    }

    #[tokio::test]
    async fn test_wrong_password_rejected() {
        let repo = InMemoryUserRepository::new();
        repo.create(&record("alice", "s3cret")).await.unwrap();

        let err = repo
            .authenticate(&UserName::new("alice"), "wrong")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_unknown_user_indistinguishable_from_wrong_password() {
        let repo = InMemoryUserRepository::new();

        let err = repo
            .authenticate(&UserName::new("nobody"), "s3cret")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_password_comparison_is_case_sensitive() {
        let repo = InMemoryUserRepository::new();
        repo.create(&record("alice", "S3cret")).await.unwrap();

        let err = repo
            .authenticate(&UserName::new("alice"), "s3cret")
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn test_duplicate_registration_keeps_first_record() {
        let repo = InMemoryUserRepository::new();
        repo.create(&record("alice", "first")).await.unwrap();

        let err = repo.create(&record("alice", "second")).await.unwrap_err();
        assert!(matches!(err, AuthError::UserNameTaken));

        // First record is unchanged
        assert!(repo.authenticate(&UserName::new("alice"), "first").await.is_ok());
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn test_record_answer_correct_increments_both() {
        let repo = InMemoryUserRepository::new();
        repo.create(&record("alice", "s3cret")).await.unwrap();

        let progress = repo
            .record_answer(&UserName::new("alice"), true)
            .await
            .unwrap();
        assert_eq!(
            progress,
            QuizProgress {
                score: 1,
                quizzes_completed: 1
            }
        );
    }

    #[tokio::test]
    async fn test_record_answer_incorrect_increments_completed_only() {
        let repo = InMemoryUserRepository::new();
        repo.create(&record("alice", "s3cret")).await.unwrap();

        let progress = repo
            .record_answer(&UserName::new("alice"), false)
            .await
            .unwrap();
        assert_eq!(
            progress,
            QuizProgress {
                score: 0,
                quizzes_completed: 1
            }
        );
    }

    #[tokio::test]
    async fn test_record_answer_unknown_user_fails_loudly() {
        let repo = InMemoryUserRepository::new();
        repo.create(&record("alice", "s3cret")).await.unwrap();

        let err = repo
            .record_answer(&UserName::new("ghost"), true)
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));

        // Store is unmodified
        assert_eq!(repo.len().await, 1);
        let progress = repo.progress(&UserName::new("alice")).await.unwrap();
        assert_eq!(progress.quizzes_completed, 0);
    }

    #[tokio::test]
    async fn test_progress_unknown_user() {
        let repo = InMemoryUserRepository::new();
        let err = repo.progress(&UserName::new("ghost")).await.unwrap_err();
        assert!(matches!(err, AuthError::UserNotFound));
    }
}

mod login_flow_tests {
    use std::sync::Arc;

    use crate::application::config::AuthConfig;
    use crate::application::token::TokenService;
    use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
    use crate::infra::memory::InMemoryUserRepository;

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let config = Arc::new(AuthConfig::from_secret("test-secret"));

        RegisterUseCase::new(repo.clone())
            .execute(RegisterInput {
                user_name: "alice".to_string(),
                password: "s3cret".to_string(),
            })
            .await
            .unwrap();

        let output = LoginUseCase::new(repo, config.clone())
            .execute(LoginInput {
                user_name: "alice".to_string(),
                password: "s3cret".to_string(),
            })
            .await
            .unwrap();

        assert!(!output.token.is_empty());
        assert_eq!(output.score, 0);
        assert_eq!(output.quizzes_completed, 0);

        let tokens = TokenService::new(config);
        assert_eq!(tokens.verify(&output.token).unwrap(), "alice");
    }
}
