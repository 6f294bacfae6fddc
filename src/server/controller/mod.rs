//! HTTP controller endpoints for the holocron API.
//!
//! Controllers extract the path and body, call into the matching service and serialize the
//! returned DTO. Any failure is returned as [`Error`](crate::server::error::Error), whose
//! `IntoResponse` implementation picks the status code. Every endpoint is annotated with
//! utoipa for the OpenAPI document.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod root;
pub mod user;
pub mod util;
pub mod vehicle;
