use entity::sea_orm_active_enums::{Climate, Terrain};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub diameter: Option<i32>,
    #[schema(value_type = Option<String>, example = "arid")]
    pub climate: Option<Climate>,
    #[schema(value_type = Option<String>, example = "desert")]
    pub terrain: Option<Terrain>,
    pub surface_water: Option<i32>,
    pub population: Option<i64>,
    pub orbital_period: Option<i32>,
    pub rotation_period: Option<i32>,
    pub gravity: Option<String>,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            diameter: planet.diameter,
            climate: planet.climate,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
            population: planet.population,
            orbital_period: planet.orbital_period,
            rotation_period: planet.rotation_period,
            gravity: planet.gravity,
        }
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreatePlanetDto {
    pub name: String,
    pub diameter: Option<i32>,
    #[schema(value_type = Option<String>, example = "arid")]
    pub climate: Option<Climate>,
    #[schema(value_type = Option<String>, example = "desert")]
    pub terrain: Option<Terrain>,
    pub surface_water: Option<i32>,
    pub population: Option<i64>,
    pub orbital_period: Option<i32>,
    pub rotation_period: Option<i32>,
    pub gravity: Option<String>,
}

/// Partial planet update.
///
/// Omitted fields keep their stored value, an explicit `null` clears a nullable field.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdatePlanetDto {
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub diameter: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub climate: Option<Option<Climate>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub terrain: Option<Option<Terrain>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub surface_water: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i64>)]
    pub population: Option<Option<i64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub orbital_period: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub rotation_period: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub gravity: Option<Option<String>>,
}
