//! Request validation errors and the field checks that raise them.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

/// Malformed client input, returned as 400.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// JSON body could not be parsed, was missing a required field, or held a value outside
    /// an enumeration.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// Path segment could not be parsed, such as a non-numeric ID or unknown favorite kind.
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
    /// Required text field was empty or whitespace only.
    #[error("Field '{0}' must not be blank")]
    BlankField(&'static str),
    /// Email without a local part and domain around an `@`.
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    /// Text longer than the column it is stored in.
    #[error("Field '{field}' must be at most {max} characters")]
    TooLong {
        /// Name of the offending field
        field: &'static str,
        /// Maximum length in characters
        max: usize,
    },
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        error_response(StatusCode::BAD_REQUEST, self.to_string())
    }
}

/// Rejects empty or whitespace-only values for a required text field.
pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }

    Ok(())
}

/// Rejects values longer than the column they are stored in, counted in characters.
pub fn require_max_len(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_non_blank_value() {
        assert!(require_non_blank("name", "Tatooine").is_ok());
    }

    #[test]
    fn rejects_whitespace_only_value() {
        assert!(matches!(
            require_non_blank("name", "   "),
            Err(ValidationError::BlankField("name"))
        ));
    }

    #[test]
    fn accepts_value_at_max_len() {
        assert!(require_max_len("name", &"x".repeat(50), 50).is_ok());
    }

    /// Expect the limit to count characters rather than bytes
    #[test]
    fn counts_characters_not_bytes() {
        assert!(require_max_len("name", &"é".repeat(50), 50).is_ok());
    }

    #[test]
    fn rejects_value_over_max_len() {
        assert!(matches!(
            require_max_len("name", &"x".repeat(51), 50),
            Err(ValidationError::TooLong {
                field: "name",
                max: 50
            })
        ));
    }
}
