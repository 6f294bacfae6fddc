use holocron::server::controller::{character::get_character, util::extract::ApiPath};

use super::*;

fn luke(planet_id: Option<i32>) -> Value {
    json!({
        "name": "Luke Skywalker",
        "birth_year": "19BBY",
        "gender": "male",
        "height": 172,
        "weight": 77,
        "eye_color": "blue",
        "hair_color": "blond",
        "planet_id": planet_id,
    })
}

/// Expect the created character to equal the input on every field
#[tokio::test]
async fn create_returns_all_fields() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let planet = test.catalog().insert_mock_planet("Tatooine").await?;
    let server = test.server();

    let response = server.post("/characters").json(&luke(Some(planet.id))).await;

    response.assert_status_ok();
    let created: Value = response.json();
    assert_eq!(created["name"], "Luke Skywalker");
    assert_eq!(created["birth_year"], "19BBY");
    assert_eq!(created["gender"], "male");
    assert_eq!(created["height"], 172);
    assert_eq!(created["weight"], 77);
    assert_eq!(created["eye_color"], "blue");
    assert_eq!(created["hair_color"], "blond");
    assert_eq!(created["planet_id"], planet.id);

    Ok(())
}

/// Expect 404 when the home planet doesn't exist
#[tokio::test]
async fn create_with_missing_planet_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server.post("/characters").json(&luke(Some(8))).await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"],
        "Planet with ID 8 not found"
    );

    Ok(())
}

/// Expect 400 for a gender outside the allowed set, or a missing required enum
#[tokio::test]
async fn rejects_invalid_enum_values() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server
        .post("/characters")
        .json(&json!({
            "name": "R2-D2",
            "gender": "droid",
            "eye_color": "other",
            "hair_color": "other"
        }))
        .await;
    response.assert_status_bad_request();

    let response = server
        .post("/characters")
        .json(&json!({ "name": "R2-D2", "gender": "other", "hair_color": "other" }))
        .await;
    response.assert_status_bad_request();

    Ok(())
}

/// Expect a character's planet to be cleared after the planet is deleted
#[tokio::test]
async fn planet_delete_clears_reference() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let planet = test.catalog().insert_mock_planet("Alderaan").await?;
    let character = test
        .catalog()
        .insert_mock_character("Bail Organa", Some(planet.id))
        .await?;
    let server = test.server();

    server
        .delete(&format!("/planets/{}", planet.id))
        .await
        .assert_status_ok();

    let result = get_character(State(test.into_app_state()), ApiPath(character.id)).await;

    assert!(result.is_ok());
    let (status, body) = decode(result.unwrap().into_response()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["planet_id"].is_null());

    Ok(())
}

/// Expect the character list to hold every character
#[tokio::test]
async fn lists_characters() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_mock_character("Han Solo", None).await?;
    test.catalog().insert_mock_character("Chewbacca", None).await?;
    let server = test.server();

    let response = server.get("/characters").await;

    response.assert_status_ok();
    let characters: Vec<Value> = response.json();
    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0]["name"], "Han Solo");

    Ok(())
}
