//! User account business logic.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        data::user::UserRepository,
        error::{
            entity::{EntityError, EntityKind},
            validation::{require_max_len, require_non_blank, ValidationError},
            Error,
        },
        util::password::hash_password,
    },
};

const EMAIL_MAX_LEN: usize = 120;
const USERNAME_MAX_LEN: usize = 50;

/// Service for managing user accounts.
///
/// Passwords are hashed here before they reach the repository, and responses are always
/// built as [`UserDto`], which has no password field.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all users
    pub async fn list(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.get_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    /// Retrieves a user, or a not found error
    pub async fn get_by_id(&self, user_id: i32) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get_by_id(user_id)
            .await?
            .ok_or(EntityError::not_found(EntityKind::User, user_id))?;

        Ok(user.into())
    }

    /// Creates a user account.
    ///
    /// # Arguments
    /// - `user` - Email, username, plaintext password and optional active flag (defaults to
    ///   `true`)
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(Error::ValidationError)` - Blank or overlong field, or malformed email
    /// - `Err(Error::EntityError)` - Email or username already in use
    pub async fn create(&self, user: CreateUserDto) -> Result<UserDto, Error> {
        validate_email(&user.email)?;
        require_non_blank("username", &user.username)?;
        require_max_len("username", &user.username, USERNAME_MAX_LEN)?;
        require_non_blank("password", &user.password)?;

        let password_hash = hash_password(&user.password)?;

        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .create(
                user.email,
                user.username,
                password_hash,
                user.is_active.unwrap_or(true),
            )
            .await
            .map_err(|e| EntityError::from_write(EntityKind::User, e))?;

        Ok(user.into())
    }

    /// Updates only the supplied fields of a user account.
    ///
    /// A supplied password replaces the stored hash.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated user
    /// - `Err(Error::ValidationError)` - Blank field or malformed email
    /// - `Err(Error::EntityError)` - User not found, or email/username already in use
    pub async fn update(&self, user_id: i32, mut changes: UpdateUserDto) -> Result<UserDto, Error> {
        if let Some(email) = &changes.email {
            validate_email(email)?;
        }
        if let Some(username) = &changes.username {
            require_non_blank("username", username)?;
            require_max_len("username", username, USERNAME_MAX_LEN)?;
        }
        if let Some(password) = &changes.password {
            require_non_blank("password", password)?;
            changes.password = Some(hash_password(password)?);
        }

        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .update(user_id, changes)
            .await
            .map_err(|e| EntityError::from_write(EntityKind::User, e))?
            .ok_or(EntityError::not_found(EntityKind::User, user_id))?;

        Ok(user.into())
    }

    /// Deletes a user and, through the foreign key, all of their favorites.
    pub async fn delete(&self, user_id: i32) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        let result = user_repo.delete(user_id).await?;

        if result.rows_affected == 0 {
            return Err(EntityError::not_found(EntityKind::User, user_id).into());
        }

        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    require_non_blank("email", email)?;
    require_max_len("email", email, EMAIL_MAX_LEN)?;

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail(email.to_string())),
    }
}
