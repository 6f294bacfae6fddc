use holocron::{
    model::favorite::FavoriteKind,
    server::controller::{favorite::add_favorite, util::extract::ApiPath},
};

use super::*;

/// Expect the first POST to create the favorite and the second to report it already exists
#[tokio::test]
async fn add_twice_reports_existing() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_mock_user("luke").await?;
    let planet = test.catalog().insert_mock_planet("Tatooine").await?;
    let server = test.server();
    let uri = format!("/users/{}/favorite/planet/{}", user.id, planet.id);

    let response = server.post(&uri).await;
    response.assert_status_ok();
    let first: Value = response.json();
    assert_eq!(first["created"], true);
    assert_eq!(first["message"], "Favorite added successfully");
    assert_eq!(first["favorite"]["kind"], "planet");
    assert_eq!(first["favorite"]["target_id"], planet.id);
    assert_eq!(first["favorite"]["user_id"], user.id);

    let response = server.post(&uri).await;
    response.assert_status_ok();
    let second: Value = response.json();
    assert_eq!(second["created"], false);
    assert_eq!(second["message"], "Favorite already exists");
    assert_eq!(second["favorite"], first["favorite"]);

    let response = server.get(&format!("/users/{}/favorites", user.id)).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Vec<Value>>().len(), 1);

    Ok(())
}

/// Expect the handler to return 404 for a user that doesn't exist
#[tokio::test]
async fn add_for_missing_user_is_not_found() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let character = test.catalog().insert_mock_character("Yoda", None).await?;

    let result = add_favorite(
        State(test.into_app_state()),
        ApiPath((9, FavoriteKind::Character, character.id)),
    )
    .await;

    assert!(result.is_err());
    let (status, body) = decode(result.err().unwrap().into_response()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User with ID 9 not found");

    Ok(())
}

/// Expect 404 for a target that doesn't exist
#[tokio::test]
async fn add_for_missing_target_is_not_found() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_mock_user("luke").await?;
    let server = test.server();

    let response = server
        .post(&format!("/users/{}/favorite/vehicle/4", user.id))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"],
        "Vehicle with ID 4 not found"
    );

    Ok(())
}

/// Expect 400 for a kind other than character, planet or vehicle
#[tokio::test]
async fn rejects_unknown_kind() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_mock_user("luke").await?;
    let server = test.server();

    let response = server
        .post(&format!("/users/{}/favorite/starship/1", user.id))
        .await;

    response.assert_status_bad_request();

    Ok(())
}

/// Expect GET and DELETE to find the favorite, then 404 once it is removed
#[tokio::test]
async fn get_and_remove_favorite() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_mock_user("luke").await?;
    let vehicle = test.catalog().insert_mock_vehicle("X-wing", None).await?;
    test.user()
        .insert_mock_favorite(user.id, None, None, Some(vehicle.id))
        .await?;
    let server = test.server();
    let uri = format!("/users/{}/favorite/vehicle/{}", user.id, vehicle.id);

    let response = server.get(&uri).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["kind"], "vehicle");

    let response = server.delete(&uri).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "Favorite removed successfully"
    );

    server.get(&uri).await.assert_status_not_found();
    server.delete(&uri).await.assert_status_not_found();

    Ok(())
}

/// Expect deleting a target to remove it from every user's favorites
#[tokio::test]
async fn target_delete_removes_favorite() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let user = test.user().insert_mock_user("luke").await?;
    let character = test.catalog().insert_mock_character("Ben Kenobi", None).await?;
    let server = test.server();

    server
        .post(&format!(
            "/users/{}/favorite/character/{}",
            user.id, character.id
        ))
        .await
        .assert_status_ok();
    server
        .delete(&format!("/characters/{}", character.id))
        .await
        .assert_status_ok();

    let response = server.get(&format!("/users/{}/favorites", user.id)).await;
    response.assert_status_ok();
    assert!(response.json::<Vec<Value>>().is_empty());

    Ok(())
}
