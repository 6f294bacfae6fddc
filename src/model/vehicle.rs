use entity::sea_orm_active_enums::Manufacturer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VehicleDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub length: Option<i32>,
    pub cargo: Option<i64>,
    pub speed: Option<i32>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    #[schema(value_type = Option<String>, example = "Incom Corporation")]
    pub manufacturer: Option<Manufacturer>,
    pub character_id: Option<i32>,
}

impl From<entity::vehicle::Model> for VehicleDto {
    fn from(vehicle: entity::vehicle::Model) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            model: vehicle.model,
            length: vehicle.length,
            cargo: vehicle.cargo,
            speed: vehicle.speed,
            crew: vehicle.crew,
            passengers: vehicle.passengers,
            manufacturer: vehicle.manufacturer,
            character_id: vehicle.character_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateVehicleDto {
    pub name: String,
    pub model: Option<String>,
    pub length: Option<i32>,
    pub cargo: Option<i64>,
    pub speed: Option<i32>,
    pub crew: Option<i32>,
    pub passengers: Option<i32>,
    #[schema(value_type = Option<String>, example = "Incom Corporation")]
    pub manufacturer: Option<Manufacturer>,
    pub character_id: Option<i32>,
}

/// Partial vehicle update.
///
/// Omitted fields keep their stored value, an explicit `null` clears a nullable field.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateVehicleDto {
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub model: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub length: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i64>)]
    pub cargo: Option<Option<i64>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub speed: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub crew: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub passengers: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub manufacturer: Option<Option<Manufacturer>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub character_id: Option<Option<i32>>,
}
