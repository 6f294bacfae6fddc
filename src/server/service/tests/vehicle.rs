use entity::sea_orm_active_enums::Manufacturer;

use crate::model::vehicle::{CreateVehicleDto, UpdateVehicleDto};

use super::*;

fn tie_fighter(character_id: Option<i32>) -> CreateVehicleDto {
    CreateVehicleDto {
        name: "TIE Advanced x1".to_string(),
        model: Some("Twin Ion Engine Advanced x1".to_string()),
        length: Some(9),
        cargo: Some(150),
        speed: Some(1200),
        crew: Some(1),
        passengers: Some(0),
        manufacturer: Some(Manufacturer::SienarFleetSystems),
        character_id,
    }
}

/// Expect the created vehicle to be returned by a later lookup
#[tokio::test]
async fn create_then_get_returns_same_vehicle() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let pilot = test
        .catalog()
        .insert_mock_character("Darth Vader", None)
        .await?;
    let vehicle_service = VehicleService::new(&test.db);

    let created = vehicle_service
        .create(tie_fighter(Some(pilot.id)))
        .await
        .unwrap();
    let fetched = vehicle_service.get_by_id(created.id).await.unwrap();

    assert_eq!(created, fetched);
    assert_eq!(fetched.character_id, Some(pilot.id));

    Ok(())
}

/// Expect not found for a character that doesn't exist
#[tokio::test]
async fn create_rejects_missing_character() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let result = VehicleService::new(&test.db)
        .create(tie_fighter(Some(3)))
        .await;

    assert!(matches!(
        result,
        Err(Error::EntityError(EntityError::NotFound {
            kind: EntityKind::Character,
            id: 3
        }))
    ));

    Ok(())
}

/// Expect an explicit null to unassign the vehicle's character
#[tokio::test]
async fn update_unassigns_character_with_null() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let pilot = test
        .catalog()
        .insert_mock_character("Darth Vader", None)
        .await?;
    let vehicle_service = VehicleService::new(&test.db);
    let created = vehicle_service
        .create(tie_fighter(Some(pilot.id)))
        .await
        .unwrap();

    let changes = UpdateVehicleDto {
        character_id: Some(None),
        ..Default::default()
    };
    let updated = vehicle_service.update(created.id, changes).await.unwrap();

    assert_eq!(updated.character_id, None);
    assert_eq!(updated.manufacturer, created.manufacturer);
    assert_eq!(updated.speed, created.speed);

    Ok(())
}

/// Expect deletion of a missing vehicle to be not found
#[tokio::test]
async fn delete_missing_vehicle_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_catalog_tables!()?;

    let result = VehicleService::new(&test.db).delete(1).await;

    assert!(matches!(
        result,
        Err(Error::EntityError(EntityError::NotFound {
            kind: EntityKind::Vehicle,
            id: 1
        }))
    ));

    Ok(())
}

/// Expect a validation error for a name or model longer than its column
#[tokio::test]
async fn rejects_overlong_fields() -> Result<(), TestError> {
    let mut test = test_setup_with_catalog_tables!()?;
    let existing = test.catalog().insert_mock_vehicle("Sandcrawler", None).await?;
    let vehicle_service = VehicleService::new(&test.db);

    let mut vehicle = tie_fighter(None);
    vehicle.model = Some("m".repeat(101));
    let result = vehicle_service.create(vehicle).await;
    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::TooLong {
            field: "model",
            max: 100
        }))
    ));

    let changes = UpdateVehicleDto {
        name: Some("x".repeat(101)),
        ..Default::default()
    };
    let result = vehicle_service.update(existing.id, changes).await;
    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::TooLong {
            field: "name",
            max: 100
        }))
    ));

    let unchanged = vehicle_service.get_by_id(existing.id).await.unwrap();
    assert_eq!(unchanged.name, "Sandcrawler");

    Ok(())
}
