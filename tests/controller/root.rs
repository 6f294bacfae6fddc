use super::*;

/// Expect the root route to list every API route with its method
#[tokio::test]
async fn lists_registered_routes() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let routes: Vec<Value> = response.json();

    for (method, path) in [
        ("GET", "/"),
        ("GET", "/planets"),
        ("POST", "/planets"),
        ("PUT", "/planets/{id}"),
        ("DELETE", "/users/{user_id}"),
        ("GET", "/users/{user_id}/favorites"),
        ("POST", "/users/{user_id}/favorite/{kind}/{id}"),
    ] {
        assert!(
            routes.contains(&json!({ "method": method, "path": path })),
            "missing {} {}",
            method,
            path
        );
    }

    Ok(())
}

/// Expect the OpenAPI document to be served for Swagger UI
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server.get("/api/docs/openapi.json").await;

    response.assert_status_ok();
    let document: Value = response.json();
    assert_eq!(document["info"]["title"], "Holocron");
    assert!(document["paths"]["/characters/{id}"].is_object());

    Ok(())
}
