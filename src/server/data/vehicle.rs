//! Vehicle table repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{
    model::vehicle::{CreateVehicleDto, UpdateVehicleDto},
    server::{data::set_if_present, model::db::VehicleModel},
};

/// Repository for the `vehicle` table.
pub struct VehicleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> VehicleRepository<'a, C> {
    /// Creates a new instance of [`VehicleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all vehicles ordered by ID
    pub async fn get_all(&self) -> Result<Vec<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find()
            .order_by_asc(entity::vehicle::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a vehicle by ID
    pub async fn get_by_id(
        &self,
        vehicle_id: i32,
    ) -> Result<Option<VehicleModel>, DbErr> {
        entity::prelude::Vehicle::find_by_id(vehicle_id)
            .one(self.db)
            .await
    }

    /// Creates a new vehicle, the ID is assigned by the database
    pub async fn create(&self, vehicle: CreateVehicleDto) -> Result<VehicleModel, DbErr> {
        let vehicle = entity::vehicle::ActiveModel {
            name: ActiveValue::Set(vehicle.name),
            model: ActiveValue::Set(vehicle.model),
            length: ActiveValue::Set(vehicle.length),
            cargo: ActiveValue::Set(vehicle.cargo),
            speed: ActiveValue::Set(vehicle.speed),
            crew: ActiveValue::Set(vehicle.crew),
            passengers: ActiveValue::Set(vehicle.passengers),
            manufacturer: ActiveValue::Set(vehicle.manufacturer),
            character_id: ActiveValue::Set(vehicle.character_id),
            ..Default::default()
        };

        vehicle.insert(self.db).await
    }

    /// Applies the supplied fields to an existing vehicle
    ///
    /// Returns `Ok(None)` if no vehicle with the provided ID exists.
    pub async fn update(
        &self,
        vehicle_id: i32,
        changes: UpdateVehicleDto,
    ) -> Result<Option<VehicleModel>, DbErr> {
        let vehicle = match self.get_by_id(vehicle_id).await? {
            Some(vehicle) => vehicle,
            None => return Ok(None),
        };

        let mut vehicle_am = vehicle.clone().into_active_model();
        set_if_present(&mut vehicle_am.name, changes.name);
        set_if_present(&mut vehicle_am.model, changes.model);
        set_if_present(&mut vehicle_am.length, changes.length);
        set_if_present(&mut vehicle_am.cargo, changes.cargo);
        set_if_present(&mut vehicle_am.speed, changes.speed);
        set_if_present(&mut vehicle_am.crew, changes.crew);
        set_if_present(&mut vehicle_am.passengers, changes.passengers);
        set_if_present(&mut vehicle_am.manufacturer, changes.manufacturer);
        set_if_present(&mut vehicle_am.character_id, changes.character_id);

        if !vehicle_am.is_changed() {
            return Ok(Some(vehicle));
        }

        let vehicle = vehicle_am.update(self.db).await?;

        Ok(Some(vehicle))
    }

    /// Deletes a vehicle
    ///
    /// Check [`DeleteResult::rows_affected`] to learn whether the vehicle existed.
    pub async fn delete(&self, vehicle_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Vehicle::delete_by_id(vehicle_id)
            .exec(self.db)
            .await
    }
}
