//! Utilities for controller request handling.

pub mod extract;
