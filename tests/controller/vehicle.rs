use super::*;

/// Expect 200 with the created vehicle and its manufacturer as stored
#[tokio::test]
async fn creates_vehicle() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let pilot = test.catalog().insert_mock_character("Han Solo", None).await?;
    let server = test.server();

    let response = server
        .post("/vehicles")
        .json(&json!({
            "name": "Millennium Falcon",
            "model": "YT-1300 light freighter",
            "length": 34,
            "cargo": 100000,
            "speed": 1050,
            "crew": 4,
            "passengers": 6,
            "manufacturer": "Corellia Mining Corporation",
            "character_id": pilot.id,
        }))
        .await;

    response.assert_status_ok();
    let created: Value = response.json();
    assert_eq!(created["name"], "Millennium Falcon");
    assert_eq!(created["manufacturer"], "Corellia Mining Corporation");
    assert_eq!(created["character_id"], pilot.id);

    Ok(())
}

/// Expect 400 for a manufacturer outside the allowed set
#[tokio::test]
async fn rejects_unknown_manufacturer() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;
    let server = test.server();

    let response = server
        .post("/vehicles")
        .json(&json!({ "name": "Slave I", "manufacturer": "Kuat Systems Engineering" }))
        .await;

    response.assert_status_bad_request();

    Ok(())
}

/// Expect 404 when assigning a character that doesn't exist
#[tokio::test]
async fn update_with_missing_character_is_not_found() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let vehicle = test.catalog().insert_mock_vehicle("Snowspeeder", None).await?;
    let server = test.server();

    let response = server
        .put(&format!("/vehicles/{}", vehicle.id))
        .json(&json!({ "character_id": 77 }))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"],
        "Character with ID 77 not found"
    );

    Ok(())
}

/// Expect 409 when renaming onto a taken name
#[tokio::test]
async fn update_to_taken_name_conflicts() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    test.catalog().insert_mock_vehicle("AT-AT", None).await?;
    let vehicle = test.catalog().insert_mock_vehicle("AT-ST", None).await?;
    let server = test.server();

    let response = server
        .put(&format!("/vehicles/{}", vehicle.id))
        .json(&json!({ "name": "AT-AT" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"],
        "A vehicle with that name already exists"
    );

    Ok(())
}
