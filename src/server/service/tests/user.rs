use argon2::{password_hash::PasswordHash, Argon2, PasswordVerifier};
use sea_orm::EntityTrait;

use crate::model::user::{CreateUserDto, UpdateUserDto};

use super::*;

fn new_user(email: &str, username: &str) -> CreateUserDto {
    CreateUserDto {
        email: email.to_string(),
        username: username.to_string(),
        password: "use-the-force".to_string(),
        is_active: None,
    }
}

/// Expect the password to be stored as an argon2 hash and active to default to true
#[tokio::test]
async fn create_hashes_password() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let created = UserService::new(&test.db)
        .create(new_user("luke@rebellion.org", "luke"))
        .await
        .unwrap();
    assert!(created.is_active);

    let stored = entity::prelude::User::find_by_id(created.id)
        .one(&test.db)
        .await?
        .expect("user was stored");

    assert_ne!(stored.password, "use-the-force");
    let hash = PasswordHash::new(&stored.password).unwrap();
    assert!(Argon2::default()
        .verify_password(b"use-the-force", &hash)
        .is_ok());

    Ok(())
}

/// Expect an email without `@` to be rejected
#[tokio::test]
async fn create_rejects_invalid_email() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let result = UserService::new(&test.db)
        .create(new_user("not-an-email", "luke"))
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::InvalidEmail(_)))
    ));

    Ok(())
}

/// Expect a conflict for a taken email or username
#[tokio::test]
async fn create_conflicts_on_taken_email_or_username() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let user_service = UserService::new(&test.db);

    user_service
        .create(new_user("luke@rebellion.org", "luke"))
        .await
        .unwrap();

    let result = user_service
        .create(new_user("luke@rebellion.org", "skywalker"))
        .await;
    assert!(matches!(
        result,
        Err(Error::EntityError(EntityError::Conflict(EntityKind::User)))
    ));

    let result = user_service
        .create(new_user("skywalker@rebellion.org", "luke"))
        .await;
    assert!(matches!(
        result,
        Err(Error::EntityError(EntityError::Conflict(EntityKind::User)))
    ));

    Ok(())
}

/// Expect a new password to be hashed and other fields kept
#[tokio::test]
async fn update_rehashes_password() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_mock_user("han").await?;

    let changes = UpdateUserDto {
        password: Some("i-know".to_string()),
        ..Default::default()
    };
    let updated = UserService::new(&test.db)
        .update(user.id, changes)
        .await
        .unwrap();

    assert_eq!(updated.username, "han");
    assert_eq!(updated.email, user.email);

    let stored = entity::prelude::User::find_by_id(user.id)
        .one(&test.db)
        .await?
        .expect("user was stored");
    let hash = PasswordHash::new(&stored.password).unwrap();
    assert!(Argon2::default().verify_password(b"i-know", &hash).is_ok());

    Ok(())
}

/// Expect a deleted user to no longer be found
#[tokio::test]
async fn delete_then_get_is_not_found() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_mock_user("jabba").await?;
    let user_service = UserService::new(&test.db);

    user_service.delete(user.id).await.unwrap();

    let result = user_service.get_by_id(user.id).await;
    assert!(matches!(
        result,
        Err(Error::EntityError(EntityError::NotFound {
            kind: EntityKind::User,
            ..
        }))
    ));

    Ok(())
}

/// Expect a validation error for a username or email longer than its column
#[tokio::test]
async fn rejects_overlong_fields() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_mock_user("wedge").await?;
    let user_service = UserService::new(&test.db);

    let result = user_service
        .create(new_user("luke@rebellion.org", &"l".repeat(200)))
        .await;
    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::TooLong {
            field: "username",
            max: 50
        }))
    ));

    let changes = UpdateUserDto {
        email: Some(format!("{}@rebellion.org", "w".repeat(120))),
        ..Default::default()
    };
    let result = user_service.update(user.id, changes).await;
    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::TooLong {
            field: "email",
            max: 120
        }))
    ));

    Ok(())
}
