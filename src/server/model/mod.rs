//! Server application models and type definitions.
//!
//! Application state shared by the HTTP handlers and short aliases for the database models.

pub mod app;
pub mod db;
