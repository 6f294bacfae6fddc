use entity::sea_orm_active_enums::{EyeColor, Gender, HairColor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CharacterDto {
    pub id: i32,
    pub name: String,
    pub birth_year: Option<String>,
    #[schema(value_type = String, example = "male")]
    pub gender: Gender,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    #[schema(value_type = String, example = "blue")]
    pub eye_color: EyeColor,
    #[schema(value_type = String, example = "blond")]
    pub hair_color: HairColor,
    pub planet_id: Option<i32>,
}

impl From<entity::character::Model> for CharacterDto {
    fn from(character: entity::character::Model) -> Self {
        Self {
            id: character.id,
            name: character.name,
            birth_year: character.birth_year,
            gender: character.gender,
            height: character.height,
            weight: character.weight,
            eye_color: character.eye_color,
            hair_color: character.hair_color,
            planet_id: character.planet_id,
        }
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateCharacterDto {
    pub name: String,
    pub birth_year: Option<String>,
    #[schema(value_type = String, example = "male")]
    pub gender: Gender,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    #[schema(value_type = String, example = "blue")]
    pub eye_color: EyeColor,
    #[schema(value_type = String, example = "blond")]
    pub hair_color: HairColor,
    pub planet_id: Option<i32>,
}

/// Partial character update.
///
/// Omitted fields keep their stored value, an explicit `null` clears a nullable field.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCharacterDto {
    pub name: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub birth_year: Option<Option<String>>,
    #[schema(value_type = Option<String>)]
    pub gender: Option<Gender>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub height: Option<Option<i32>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub weight: Option<Option<i32>>,
    #[schema(value_type = Option<String>)]
    pub eye_color: Option<EyeColor>,
    #[schema(value_type = Option<String>)]
    pub hair_color: Option<HairColor>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub planet_id: Option<Option<i32>>,
}
