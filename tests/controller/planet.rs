use axum::body::Bytes;
use holocron::{
    model::planet::CreatePlanetDto,
    server::controller::{planet::create_planet, util::extract::ApiJson},
};

use super::*;

fn tatooine() -> Value {
    json!({
        "name": "Tatooine",
        "diameter": 10465,
        "climate": "arid",
        "terrain": "desert",
        "surface_water": 1,
        "population": 200000,
        "orbital_period": 304,
        "rotation_period": 23,
        "gravity": "1 standard"
    })
}

/// Expect 200 with the created planet, the same object on GET, and 409 on a repeat POST
#[tokio::test]
async fn create_get_and_conflict() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server.post("/planets").json(&tatooine()).await;
    response.assert_status_ok();
    let created: Value = response.json();
    assert_eq!(created["name"], "Tatooine");
    assert_eq!(created["climate"], "arid");
    assert_eq!(created["terrain"], "desert");
    assert_eq!(created["population"], 200000);

    let response = server.get(&format!("/planets/{}", created["id"])).await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), created);

    let response = server.post("/planets").json(&tatooine()).await;
    response.assert_status(StatusCode::CONFLICT);
    assert!(response.json::<Value>()["error"].is_string());

    Ok(())
}

/// Expect a client-supplied ID to be ignored
#[tokio::test]
async fn ignores_client_id() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server
        .post("/planets")
        .json(&json!({ "id": 500, "name": "Hoth" }))
        .await;

    response.assert_status_ok();
    assert_ne!(response.json::<Value>()["id"], 500);

    Ok(())
}

/// Expect 400 for a climate outside the allowed set
#[tokio::test]
async fn rejects_unknown_enum_value() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server
        .post("/planets")
        .json(&json!({ "name": "Mustafar", "climate": "volcanic" }))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["error"].is_string());

    Ok(())
}

/// Expect 400 for malformed JSON and for a missing required field
#[tokio::test]
async fn rejects_malformed_body() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server
        .post("/planets")
        .bytes(Bytes::from_static(b"{\"name\":"))
        .content_type("application/json")
        .await;
    response.assert_status_bad_request();

    let response = server.post("/planets").json(&json!({})).await;
    response.assert_status_bad_request();

    Ok(())
}

/// Expect 400 for a non-numeric ID
#[tokio::test]
async fn rejects_invalid_path_id() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server.get("/planets/tatooine").await;

    response.assert_status_bad_request();
    assert!(response.json::<Value>()["error"].is_string());

    Ok(())
}

/// Expect a PUT to change only the supplied fields
#[tokio::test]
async fn update_changes_only_supplied_fields() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let created: Value = server.post("/planets").json(&tatooine()).await.json();

    let response = server
        .put(&format!("/planets/{}", created["id"]))
        .json(&json!({ "population": 250000, "gravity": null }))
        .await;

    response.assert_status_ok();
    let updated: Value = response.json();
    assert_eq!(updated["population"], 250000);
    assert!(updated["gravity"].is_null());
    assert_eq!(updated["name"], "Tatooine");
    assert_eq!(updated["diameter"], 10465);

    Ok(())
}

/// Expect 200 with a confirmation message, then 404 for the deleted planet
#[tokio::test]
async fn delete_then_get_is_not_found() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let planet = test.catalog().insert_mock_planet("Alderaan").await?;
    let server = test.server();
    let uri = format!("/planets/{}", planet.id);

    let response = server.delete(&uri).await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "message": "Planet deleted successfully" })
    );

    let response = server.get(&uri).await;
    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"],
        format!("Planet with ID {} not found", planet.id)
    );

    server.delete(&uri).await.assert_status_not_found();

    Ok(())
}

/// Expect the handler to return 500 when the planet table is missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let planet = CreatePlanetDto {
        name: "Kamino".to_string(),
        diameter: None,
        climate: None,
        terrain: None,
        surface_water: None,
        population: None,
        orbital_period: None,
        rotation_period: None,
        gravity: None,
    };
    let result = create_planet(State(test.into_app_state()), ApiJson(planet)).await;

    assert!(result.is_err());
    let (status, body) = decode(result.err().unwrap().into_response()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");

    Ok(())
}

/// Expect 400 for a name longer than the name column
#[tokio::test]
async fn rejects_overlong_name() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server
        .post("/planets")
        .json(&json!({ "name": "x".repeat(300) }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<Value>()["error"],
        "Field 'name' must be at most 50 characters"
    );

    let planets: Vec<Value> = server.get("/planets").await.json();
    assert!(planets.is_empty());

    Ok(())
}
