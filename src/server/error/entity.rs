//! Missing rows and uniqueness conflicts on catalog entities, users and favorites.

use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, SqlErr};

use crate::{
    model::favorite::{FavoriteKind, FavoriteTarget},
    server::error::{error_response, Error},
};

/// The tables exposed through the API, used to build error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    /// A user account
    User,
    /// A catalog character
    Character,
    /// A catalog planet
    Planet,
    /// A catalog vehicle
    Vehicle,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "User"),
            Self::Character => write!(f, "Character"),
            Self::Planet => write!(f, "Planet"),
            Self::Vehicle => write!(f, "Vehicle"),
        }
    }
}

impl From<FavoriteTarget> for EntityKind {
    fn from(target: FavoriteTarget) -> Self {
        match target {
            FavoriteTarget::Character(_) => Self::Character,
            FavoriteTarget::Planet(_) => Self::Planet,
            FavoriteTarget::Vehicle(_) => Self::Vehicle,
        }
    }
}

/// Failures tied to a specific row, returned as 404 or 409.
#[derive(thiserror::Error, Debug)]
pub enum EntityError {
    /// No row of `kind` has the ID `id`.
    #[error("{kind} with ID {id} not found")]
    NotFound {
        /// Table that was searched
        kind: EntityKind,
        /// ID that was looked up
        id: i32,
    },
    /// The user exists but the target isn't one of their favorites.
    #[error("Favorite {kind} {target_id} not found for user ID {user_id}")]
    FavoriteNotFound {
        /// Owner of the favorites
        user_id: i32,
        /// Kind of the favorite target
        kind: FavoriteKind,
        /// ID of the favorite target
        target_id: i32,
    },
    /// A unique name, email or username is already taken.
    #[error("{}", conflict_message(.0))]
    Conflict(EntityKind),
}

fn conflict_message(kind: &EntityKind) -> String {
    match kind {
        EntityKind::User => "A user with that email or username already exists".to_string(),
        kind => format!("A {} with that name already exists", kind.to_string().to_lowercase()),
    }
}

impl EntityError {
    /// Shorthand for [`EntityError::NotFound`]
    pub fn not_found(kind: EntityKind, id: i32) -> Self {
        Self::NotFound { kind, id }
    }

    /// Translates a database error raised by a write to `kind`.
    ///
    /// Unique constraint violations become [`EntityError::Conflict`], anything else is
    /// passed through unchanged as [`Error::DbErr`].
    pub fn from_write(kind: EntityKind, err: DbErr) -> Error {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(kind).into(),
            _ => Error::DbErr(err),
        }
    }
}

impl IntoResponse for EntityError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match self {
            Self::NotFound { .. } | Self::FavoriteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
        };

        error_response(status, self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use super::{EntityError, EntityKind};
    use crate::{model::favorite::FavoriteKind, server::error::Error};

    #[test]
    fn formats_not_found_messages() {
        assert_eq!(
            EntityError::not_found(EntityKind::Vehicle, 4).to_string(),
            "Vehicle with ID 4 not found"
        );
        assert_eq!(
            EntityError::FavoriteNotFound {
                user_id: 1,
                kind: FavoriteKind::Planet,
                target_id: 2,
            }
            .to_string(),
            "Favorite planet 2 not found for user ID 1"
        );
    }

    #[test]
    fn formats_conflict_messages() {
        assert_eq!(
            EntityError::Conflict(EntityKind::User).to_string(),
            "A user with that email or username already exists"
        );
        assert_eq!(
            EntityError::Conflict(EntityKind::Character).to_string(),
            "A character with that name already exists"
        );
    }

    /// Expect write errors other than unique violations to pass through as database errors
    #[test]
    fn from_write_passes_through_other_errors() {
        let err = EntityError::from_write(
            EntityKind::Planet,
            DbErr::Custom("disk full".to_string()),
        );

        assert!(matches!(err, Error::DbErr(_)));
    }
}
