//! Planet business logic.

use sea_orm::DatabaseConnection;

use crate::{
    model::planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    server::{
        data::planet::PlanetRepository,
        error::{
            entity::{EntityError, EntityKind},
            validation::{require_max_len, require_non_blank},
            Error,
        },
    },
};

const NAME_MAX_LEN: usize = 50;
const GRAVITY_MAX_LEN: usize = 50;

/// Service for the planet catalog.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all planets
    pub async fn list(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo.get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Retrieves a planet, or a not found error
    pub async fn get_by_id(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo
            .get_by_id(planet_id)
            .await?
            .ok_or(EntityError::not_found(EntityKind::Planet, planet_id))?;

        Ok(planet.into())
    }

    /// Creates a planet
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The stored planet with its assigned ID
    /// - `Err(Error::ValidationError)` - Blank name, or a name or gravity that is too long
    /// - `Err(Error::EntityError)` - A planet with the same name already exists
    pub async fn create(&self, planet: CreatePlanetDto) -> Result<PlanetDto, Error> {
        require_non_blank("name", &planet.name)?;
        require_max_len("name", &planet.name, NAME_MAX_LEN)?;
        if let Some(gravity) = &planet.gravity {
            require_max_len("gravity", gravity, GRAVITY_MAX_LEN)?;
        }

        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo
            .create(planet)
            .await
            .map_err(|e| EntityError::from_write(EntityKind::Planet, e))?;

        Ok(planet.into())
    }

    /// Updates only the supplied fields of a planet.
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - The updated planet
    /// - `Err(Error::ValidationError)` - Blank or overlong field
    /// - `Err(Error::EntityError)` - Planet not found, or the name is taken
    pub async fn update(&self, planet_id: i32, changes: UpdatePlanetDto) -> Result<PlanetDto, Error> {
        if let Some(name) = &changes.name {
            require_non_blank("name", name)?;
            require_max_len("name", name, NAME_MAX_LEN)?;
        }
        if let Some(Some(gravity)) = &changes.gravity {
            require_max_len("gravity", gravity, GRAVITY_MAX_LEN)?;
        }

        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo
            .update(planet_id, changes)
            .await
            .map_err(|e| EntityError::from_write(EntityKind::Planet, e))?
            .ok_or(EntityError::not_found(EntityKind::Planet, planet_id))?;

        Ok(planet.into())
    }

    /// Deletes a planet
    ///
    /// Characters native to the planet are kept with their `planet_id` cleared, favorites of
    /// the planet are removed.
    pub async fn delete(&self, planet_id: i32) -> Result<(), Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let result = planet_repo.delete(planet_id).await?;

        if result.rows_affected == 0 {
            return Err(EntityError::not_found(EntityKind::Planet, planet_id).into());
        }

        Ok(())
    }
}
