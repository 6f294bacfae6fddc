//! Planet table repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{
    model::planet::{CreatePlanetDto, UpdatePlanetDto},
    server::{data::set_if_present, model::db::PlanetModel},
};

/// Repository for the `planet` table.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all planets ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a planet by ID
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Creates a new planet, the ID is assigned by the database
    pub async fn create(&self, planet: CreatePlanetDto) -> Result<PlanetModel, DbErr> {
        let planet = entity::planet::ActiveModel {
            name: ActiveValue::Set(planet.name),
            diameter: ActiveValue::Set(planet.diameter),
            climate: ActiveValue::Set(planet.climate),
            terrain: ActiveValue::Set(planet.terrain),
            surface_water: ActiveValue::Set(planet.surface_water),
            population: ActiveValue::Set(planet.population),
            orbital_period: ActiveValue::Set(planet.orbital_period),
            rotation_period: ActiveValue::Set(planet.rotation_period),
            gravity: ActiveValue::Set(planet.gravity),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    /// Applies the supplied fields to an existing planet
    ///
    /// Returns `Ok(None)` if no planet with the provided ID exists.
    pub async fn update(
        &self,
        planet_id: i32,
        changes: UpdatePlanetDto,
    ) -> Result<Option<PlanetModel>, DbErr> {
        let planet = match self.get_by_id(planet_id).await? {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.clone().into_active_model();
        set_if_present(&mut planet_am.name, changes.name);
        set_if_present(&mut planet_am.diameter, changes.diameter);
        set_if_present(&mut planet_am.climate, changes.climate);
        set_if_present(&mut planet_am.terrain, changes.terrain);
        set_if_present(&mut planet_am.surface_water, changes.surface_water);
        set_if_present(&mut planet_am.population, changes.population);
        set_if_present(&mut planet_am.orbital_period, changes.orbital_period);
        set_if_present(&mut planet_am.rotation_period, changes.rotation_period);
        set_if_present(&mut planet_am.gravity, changes.gravity);

        if !planet_am.is_changed() {
            return Ok(Some(planet));
        }

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Returns OK regardless of planet existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planet::delete_by_id(planet_id)
            .exec(self.db)
            .await
    }
}
