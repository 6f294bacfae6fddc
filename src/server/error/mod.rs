//! Error types for the holocron server.
//!
//! Domain failures are split by concern (configuration, catalog entities, request validation)
//! and aggregated into [`Error`]. Every error implements `IntoResponse`, which makes the
//! controller layer the single place where failures become HTTP status codes and
//! `{ "error": <message> }` bodies.

pub mod config;
pub mod entity;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, entity::EntityError, validation::ValidationError},
};

/// Main error type for the holocron server.
///
/// Uses `thiserror`'s `#[from]` attribute so repository, service and controller code can
/// propagate any failure with the `?` operator.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A catalog entity was missing or a uniqueness constraint was violated.
    #[error(transparent)]
    EntityError(#[from] EntityError),
    /// The request body or path was malformed or held a disallowed value.
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    /// Internal error indicating a bug in holocron's code.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures
/// - 404 Not Found - Missing users, catalog entries or favorites
/// - 409 Conflict - Unique name, email or username already taken
/// - 500 Internal Server Error - Everything else, logged and sanitized
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::EntityError(err) => err.into_response(),
            Self::ValidationError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the provided status and message.
pub(crate) fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// so that database error text never leaks.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
