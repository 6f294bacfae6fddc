use holocron::{
    model::user::UpdateUserDto,
    server::controller::{
        user::update_user,
        util::extract::{ApiJson, ApiPath},
    },
};

use super::*;

fn luke() -> Value {
    json!({
        "email": "luke@rebellion.org",
        "username": "luke",
        "password": "use-the-force"
    })
}

/// Expect the created user to be active and never expose a password
#[tokio::test]
async fn create_omits_password() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server.post("/users").json(&luke()).await;

    response.assert_status_ok();
    let created: Value = response.json();
    assert_eq!(created["email"], "luke@rebellion.org");
    assert_eq!(created["username"], "luke");
    assert_eq!(created["is_active"], true);
    assert!(created.get("password").is_none());

    let response = server.get("/users").await;
    response.assert_status_ok();
    let users: Vec<Value> = response.json();
    assert!(users.iter().all(|user| user.get("password").is_none()));

    Ok(())
}

/// Expect 409 for a repeated registration
#[tokio::test]
async fn duplicate_user_conflicts() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    server.post("/users").json(&luke()).await.assert_status_ok();
    let response = server.post("/users").json(&luke()).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"],
        "A user with that email or username already exists"
    );

    Ok(())
}

/// Expect 400 for a blank username or malformed email
#[tokio::test]
async fn rejects_invalid_fields() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server
        .post("/users")
        .json(&json!({ "email": "luke@rebellion.org", "username": " ", "password": "x" }))
        .await;
    response.assert_status_bad_request();

    let response = server
        .post("/users")
        .json(&json!({ "email": "luke", "username": "luke", "password": "x" }))
        .await;
    response.assert_status_bad_request();

    Ok(())
}

/// Expect the handler to deactivate a user and keep the other fields
#[tokio::test]
async fn update_deactivates_user() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_mock_user("leia").await?;

    let changes = UpdateUserDto {
        is_active: Some(false),
        ..Default::default()
    };
    let result = update_user(
        State(test.into_app_state()),
        ApiPath(user.id),
        ApiJson(changes),
    )
    .await;

    assert!(result.is_ok());
    let (status, body) = decode(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_active"], false);
    assert_eq!(body["username"], "leia");

    Ok(())
}

/// Expect 404 for a user that doesn't exist
#[tokio::test]
async fn missing_user_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server.get("/users/3").await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["error"], "User with ID 3 not found");

    server.delete("/users/3").await.assert_status_not_found();

    Ok(())
}
