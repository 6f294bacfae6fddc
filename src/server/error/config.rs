//! Configuration errors raised at startup.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Raised while reading the environment at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `DATABASE_URL` is neither a SQLite nor a PostgreSQL URL.
    #[error("Unsupported database URL {0:?}, expected a sqlite: or postgres:// URL")]
    UnsupportedDatabaseUrl(String),
    /// An environment variable held a value that couldn't be parsed.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the variable
        var: String,
        /// Parse failure
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}
