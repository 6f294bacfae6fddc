//! Request and response types shared by the HTTP API.
//!
//! Every response body is built from one of these DTOs rather than from a database model, so
//! only whitelisted columns ever reach a client.

pub mod api;
pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;
