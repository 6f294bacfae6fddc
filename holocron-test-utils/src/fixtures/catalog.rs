use entity::sea_orm_active_enums::{EyeColor, Gender, HairColor};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{CharacterModel, PlanetModel, VehicleModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a mut self) -> CatalogFixtures<'a> {
        CatalogFixtures { test: self }
    }
}

pub struct CatalogFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Inserts a planet with only its name set
    pub async fn insert_mock_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planet::insert(entity::planet::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Inserts a character with fixed appearance, optionally from a home planet
    pub async fn insert_mock_character(
        &self,
        name: &str,
        planet_id: Option<i32>,
    ) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                gender: ActiveValue::Set(Gender::Male),
                eye_color: ActiveValue::Set(EyeColor::Blue),
                hair_color: ActiveValue::Set(HairColor::Blond),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Inserts a vehicle, optionally assigned to a character
    pub async fn insert_mock_vehicle(
        &self,
        name: &str,
        character_id: Option<i32>,
    ) -> Result<VehicleModel, TestError> {
        Ok(
            entity::prelude::Vehicle::insert(entity::vehicle::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                character_id: ActiveValue::Set(character_id),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
