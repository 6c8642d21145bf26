//! Tests for the authentication/user service.

mod register {
    use sea_orm::{EntityTrait, PaginatorTrait};
    use varsity::{
        model::auth::RegisterUser,
        server::{
            error::{auth::AuthError, Error},
            service::auth::AuthService,
        },
    };
    use varsity_test_utils::prelude::*;

    fn input(username: &str, email: &str) -> RegisterUser {
        RegisterUser {
            username: username.to_string(),
            email: email.to_string(),
            password: "a sturdy passphrase".to_string(),
            display_name: username.to_string(),
        }
    }

    #[tokio::test]
    /// Expect registration to store a hash, never the raw password
    async fn stores_hashed_password() -> Result<(), TestError> {
        let test = test_setup!()?;
        let auth_service = AuthService::new(&test.db);

        let user = auth_service
            .register(input("piper", "piper@example.com"))
            .await
            .unwrap();

        assert_ne!(user.password_hash, "a sturdy passphrase");
        assert!(bcrypt::verify("a sturdy passphrase", &user.password_hash).unwrap());

        Ok(())
    }

    #[tokio::test]
    /// Expect a taken username to be rejected with no row persisted
    async fn rejects_taken_username() -> Result<(), TestError> {
        let test = test_setup!()?;
        test.user().insert_user("piper").await?;
        let auth_service = AuthService::new(&test.db);

        let result = auth_service.register(input("piper", "new@example.com")).await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::UsernameTaken))
        ));
        let count = entity::prelude::User::find().count(&test.db).await?;
        assert_eq!(count, 1);

        Ok(())
    }

    #[tokio::test]
    /// Expect a taken email to be rejected with no row persisted
    async fn rejects_taken_email() -> Result<(), TestError> {
        let test = test_setup!()?;
        test.user().insert_user("piper").await?;
        let auth_service = AuthService::new(&test.db);

        let result = auth_service
            .register(input("otherpiper", "piper@example.com"))
            .await;

        assert!(matches!(result, Err(Error::AuthError(AuthError::EmailTaken))));
        let count = entity::prelude::User::find().count(&test.db).await?;
        assert_eq!(count, 1);

        Ok(())
    }
}

mod exists {
    use varsity::server::service::auth::AuthService;
    use varsity_test_utils::prelude::*;

    #[tokio::test]
    /// Expect the existence checks to reflect stored rows
    async fn reports_username_and_email_existence() -> Result<(), TestError> {
        let test = test_setup!()?;
        test.user().insert_user("piper").await?;
        let auth_service = AuthService::new(&test.db);

        assert!(auth_service.username_exists("piper").await.unwrap());
        assert!(!auth_service.username_exists("rook").await.unwrap());
        assert!(auth_service.email_exists("piper@example.com").await.unwrap());
        assert!(!auth_service.email_exists("rook@example.com").await.unwrap());

        Ok(())
    }
}

mod authenticate {
    use varsity::server::{
        error::{auth::AuthError, Error},
        service::auth::AuthService,
    };
    use varsity_test_utils::prelude::*;

    #[tokio::test]
    /// Expect valid credentials to resolve the user
    async fn accepts_valid_credentials() -> Result<(), TestError> {
        let test = test_setup!()?;
        let user = test
            .user()
            .insert_user_with_password("piper", "correct horse")
            .await?;
        let auth_service = AuthService::new(&test.db);

        let result = auth_service.authenticate("piper", "correct horse").await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().id, user.id);

        Ok(())
    }

    #[tokio::test]
    /// Expect a wrong password to fail with InvalidCredentials
    async fn rejects_wrong_password() -> Result<(), TestError> {
        let test = test_setup!()?;
        test.user()
            .insert_user_with_password("piper", "correct horse")
            .await?;
        let auth_service = AuthService::new(&test.db);

        let result = auth_service.authenticate("piper", "wrong").await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::InvalidCredentials))
        ));

        Ok(())
    }
}

mod get_profile {
    use varsity::server::{
        error::{auth::AuthError, Error},
        service::auth::AuthService,
    };
    use varsity_test_utils::prelude::*;

    #[tokio::test]
    /// Expect UserNotFound for an unknown user ID
    async fn fails_for_unknown_user() -> Result<(), TestError> {
        let test = test_setup!()?;
        let auth_service = AuthService::new(&test.db);

        let result = auth_service.get_profile(99).await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::UserNotFound(99)))
        ));

        Ok(())
    }
}

mod change_password {
    use varsity::server::{
        error::{auth::AuthError, Error},
        service::auth::AuthService,
    };
    use varsity_test_utils::prelude::*;

    #[tokio::test]
    /// Expect a wrong current password to be rejected and the hash unchanged
    async fn rejects_wrong_current_password() -> Result<(), TestError> {
        let test = test_setup!()?;
        let user = test
            .user()
            .insert_user_with_password("piper", "old password")
            .await?;
        let auth_service = AuthService::new(&test.db);

        let result = auth_service
            .change_password(user.id, "not the old password", "new password")
            .await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::InvalidCredentials))
        ));
        // The old password still authenticates.
        assert!(auth_service.authenticate("piper", "old password").await.is_ok());

        Ok(())
    }

    #[tokio::test]
    /// Expect the new password to authenticate after a successful change
    async fn replaces_hash_on_success() -> Result<(), TestError> {
        let test = test_setup!()?;
        let user = test
            .user()
            .insert_user_with_password("piper", "old password")
            .await?;
        let auth_service = AuthService::new(&test.db);

        let result = auth_service
            .change_password(user.id, "old password", "new password")
            .await;

        assert!(result.is_ok());
        assert!(auth_service.authenticate("piper", "new password").await.is_ok());
        assert!(matches!(
            auth_service.authenticate("piper", "old password").await,
            Err(Error::AuthError(AuthError::InvalidCredentials))
        ));

        Ok(())
    }
}

mod update_profile {
    use varsity::{
        model::auth::ProfileUpdate,
        server::{
            error::{auth::AuthError, Error},
            service::auth::AuthService,
        },
    };
    use varsity_test_utils::prelude::*;

    #[tokio::test]
    /// Expect NotFound for an unknown user ID
    async fn fails_for_unknown_user() -> Result<(), TestError> {
        let test = test_setup!()?;
        let auth_service = AuthService::new(&test.db);

        let result = auth_service
            .update_profile(
                99,
                ProfileUpdate {
                    display_name: Some("Ghost".to_string()),
                    email: None,
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(Error::AuthError(AuthError::UserNotFound(99)))
        ));

        Ok(())
    }

    #[tokio::test]
    /// Expect present fields to overwrite and absent fields to persist
    async fn applies_partial_update() -> Result<(), TestError> {
        let test = test_setup!()?;
        let user = test.user().insert_user("piper").await?;
        let auth_service = AuthService::new(&test.db);

        let updated = auth_service
            .update_profile(
                user.id,
                ProfileUpdate {
                    display_name: Some("Piper H.".to_string()),
                    email: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.display_name, "Piper H.");
        assert_eq!(updated.email, user.email);

        Ok(())
    }
}
