//! Request extractors which reject with the application's JSON error format.
//!
//! Axum's own `Json` and `Path` extractors reject with plain text bodies and, for JSON
//! data errors, a 422 status. These wrappers run the same extraction but convert the
//! rejection into a [`ValidationError`], so a malformed body or path is always a 400 with an
//! `{ "error": ... }` body and never reaches the database.

use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    FromRequest, FromRequestParts,
};

use crate::server::error::{validation::ValidationError, Error};

/// JSON request body extractor
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct ApiJson<T>(pub T);

/// Path parameter extractor
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct ApiPath<T>(pub T);

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::InvalidBody(rejection.body_text()).into()
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::InvalidPath(rejection.body_text()).into()
    }
}
