//! Vehicle business logic.

use sea_orm::DatabaseConnection;

use crate::{
    model::vehicle::{CreateVehicleDto, UpdateVehicleDto, VehicleDto},
    server::{
        data::{character::CharacterRepository, vehicle::VehicleRepository},
        error::{
            entity::{EntityError, EntityKind},
            validation::{require_max_len, require_non_blank},
            Error,
        },
    },
};

const NAME_MAX_LEN: usize = 100;
const MODEL_MAX_LEN: usize = 100;

/// Service for the vehicle catalog.
pub struct VehicleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VehicleService<'a> {
    /// Creates a new instance of [`VehicleService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all vehicles
    pub async fn list(&self) -> Result<Vec<VehicleDto>, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        let vehicles = vehicle_repo.get_all().await?;

        Ok(vehicles.into_iter().map(VehicleDto::from).collect())
    }

    /// Retrieves a vehicle, or a not found error
    pub async fn get_by_id(&self, vehicle_id: i32) -> Result<VehicleDto, Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        let vehicle = vehicle_repo
            .get_by_id(vehicle_id)
            .await?
            .ok_or(EntityError::not_found(EntityKind::Vehicle, vehicle_id))?;

        Ok(vehicle.into())
    }

    /// Creates a vehicle. Checks that an assigned character exists.
    pub async fn create(&self, vehicle: CreateVehicleDto) -> Result<VehicleDto, Error> {
        require_non_blank("name", &vehicle.name)?;
        require_max_len("name", &vehicle.name, NAME_MAX_LEN)?;
        if let Some(model) = &vehicle.model {
            require_max_len("model", model, MODEL_MAX_LEN)?;
        }
        self.ensure_character_exists(vehicle.character_id).await?;

        let vehicle_repo = VehicleRepository::new(self.db);

        let vehicle = vehicle_repo
            .create(vehicle)
            .await
            .map_err(|e| EntityError::from_write(EntityKind::Vehicle, e))?;

        Ok(vehicle.into())
    }

    /// Updates only the supplied fields of a vehicle. Checks that an assigned character exists.
    ///
    /// # Returns
    /// - `Ok(VehicleDto)` - The updated vehicle
    /// - `Err(Error::ValidationError)` - Blank or overlong field
    /// - `Err(Error::EntityError)` - Vehicle or reference not found, or the name is taken
    pub async fn update(
        &self,
        vehicle_id: i32,
        changes: UpdateVehicleDto,
    ) -> Result<VehicleDto, Error> {
        if let Some(name) = &changes.name {
            require_non_blank("name", name)?;
            require_max_len("name", name, NAME_MAX_LEN)?;
        }
        if let Some(Some(model)) = &changes.model {
            require_max_len("model", model, MODEL_MAX_LEN)?;
        }
        if let Some(character_id) = changes.character_id {
            self.ensure_character_exists(character_id).await?;
        }

        let vehicle_repo = VehicleRepository::new(self.db);

        let vehicle = vehicle_repo
            .update(vehicle_id, changes)
            .await
            .map_err(|e| EntityError::from_write(EntityKind::Vehicle, e))?
            .ok_or(EntityError::not_found(EntityKind::Vehicle, vehicle_id))?;

        Ok(vehicle.into())
    }

    /// Deletes a vehicle along with any favorites of it
    pub async fn delete(&self, vehicle_id: i32) -> Result<(), Error> {
        let vehicle_repo = VehicleRepository::new(self.db);

        let result = vehicle_repo.delete(vehicle_id).await?;

        if result.rows_affected == 0 {
            return Err(EntityError::not_found(EntityKind::Vehicle, vehicle_id).into());
        }

        Ok(())
    }

    async fn ensure_character_exists(&self, character_id: Option<i32>) -> Result<(), Error> {
        let Some(character_id) = character_id else {
            return Ok(());
        };

        let character_repo = CharacterRepository::new(self.db);

        if character_repo.get_by_id(character_id).await?.is_none() {
            return Err(EntityError::not_found(EntityKind::Character, character_id).into());
        }

        Ok(())
    }
}
