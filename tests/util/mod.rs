//! Shared helpers for the HTTP tests.

use axum::{body::to_bytes, http::StatusCode, response::Response};
use axum_test::TestServer;
use holocron::server::{model::app::AppState, router};
use holocron_test_utils::TestContext;
use serde_json::Value;

/// Extension trait for TestContext to build the application around its database
pub trait TestContextExt {
    fn into_app_state(&self) -> AppState;

    /// A test server running the full router, including Swagger UI, over the test database
    fn server(&self) -> TestServer;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        self.to_app_state()
    }

    fn server(&self) -> TestServer {
        TestServer::new(router::routes().with_state(self.into_app_state())).unwrap()
    }
}

/// Splits a handler response into its status and decoded JSON body
pub async fn decode(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
