//! Closed value sets stored as string columns.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Gender {
    #[sea_orm(string_value = "male")]
    #[serde(rename = "male")]
    Male,
    #[sea_orm(string_value = "female")]
    #[serde(rename = "female")]
    Female,
    #[sea_orm(string_value = "other")]
    #[serde(rename = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum EyeColor {
    #[sea_orm(string_value = "blue")]
    #[serde(rename = "blue")]
    Blue,
    #[sea_orm(string_value = "brown")]
    #[serde(rename = "brown")]
    Brown,
    #[sea_orm(string_value = "green")]
    #[serde(rename = "green")]
    Green,
    #[sea_orm(string_value = "black")]
    #[serde(rename = "black")]
    Black,
    #[sea_orm(string_value = "other")]
    #[serde(rename = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum HairColor {
    #[sea_orm(string_value = "blond")]
    #[serde(rename = "blond")]
    Blond,
    #[sea_orm(string_value = "brown")]
    #[serde(rename = "brown")]
    Brown,
    #[sea_orm(string_value = "ginger")]
    #[serde(rename = "ginger")]
    Ginger,
    #[sea_orm(string_value = "black")]
    #[serde(rename = "black")]
    Black,
    #[sea_orm(string_value = "other")]
    #[serde(rename = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Climate {
    #[sea_orm(string_value = "temperate")]
    #[serde(rename = "temperate")]
    Temperate,
    #[sea_orm(string_value = "tropical")]
    #[serde(rename = "tropical")]
    Tropical,
    #[sea_orm(string_value = "arid")]
    #[serde(rename = "arid")]
    Arid,
    #[sea_orm(string_value = "frozen")]
    #[serde(rename = "frozen")]
    Frozen,
    #[sea_orm(string_value = "murky")]
    #[serde(rename = "murky")]
    Murky,
}

/// Terrain values are compound labels, matched verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Terrain {
    #[sea_orm(string_value = "jungle, rainforests")]
    #[serde(rename = "jungle, rainforests")]
    JungleRainforests,
    #[sea_orm(string_value = "grasslands, mountains")]
    #[serde(rename = "grasslands, mountains")]
    GrasslandsMountains,
    #[sea_orm(string_value = "ocean")]
    #[serde(rename = "ocean")]
    Ocean,
    #[sea_orm(string_value = "desert")]
    #[serde(rename = "desert")]
    Desert,
    #[sea_orm(string_value = "tundra")]
    #[serde(rename = "tundra")]
    Tundra,
    #[sea_orm(string_value = "ice caves, mountain ranges")]
    #[serde(rename = "ice caves, mountain ranges")]
    IceCavesMountainRanges,
    #[sea_orm(string_value = "forests, mountains, lakes")]
    #[serde(rename = "forests, mountains, lakes")]
    ForestsMountainsLakes,
    #[sea_orm(string_value = "swamp, jungles")]
    #[serde(rename = "swamp, jungles")]
    SwampJungles,
    #[sea_orm(string_value = "other")]
    #[serde(rename = "other")]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
pub enum Manufacturer {
    #[sea_orm(string_value = "Corellia Mining Corporation")]
    #[serde(rename = "Corellia Mining Corporation")]
    CorelliaMiningCorporation,
    #[sea_orm(string_value = "SoroSuub Corporation")]
    #[serde(rename = "SoroSuub Corporation")]
    SoroSuubCorporation,
    #[sea_orm(string_value = "Incom Corporation")]
    #[serde(rename = "Incom Corporation")]
    IncomCorporation,
    #[sea_orm(string_value = "Sienar Fleet Systems")]
    #[serde(rename = "Sienar Fleet Systems")]
    SienarFleetSystems,
    #[sea_orm(string_value = "Ubrikkian Industries")]
    #[serde(rename = "Ubrikkian Industries")]
    UbrikkianIndustries,
}
