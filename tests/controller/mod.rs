//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly where the test is about a single endpoint, and through a
//! test server where extraction, routing or JSON rejection is under test.

mod character;
mod favorite;
mod planet;
mod root;
mod user;
mod vehicle;

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holocron_test_utils::prelude::*;
use serde_json::{json, Value};

use crate::util::{decode, TestContextExt};
