//! Character table repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{
    model::character::{CreateCharacterDto, UpdateCharacterDto},
    server::{data::set_if_present, model::db::CharacterModel},
};

/// Repository for the `character` table.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all characters ordered by ID
    pub async fn get_all(&self) -> Result<Vec<CharacterModel>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a character by ID
    pub async fn get_by_id(
        &self,
        character_id: i32,
    ) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Creates a new character, the ID is assigned by the database
    pub async fn create(
        &self,
        character: CreateCharacterDto,
    ) -> Result<CharacterModel, DbErr> {
        let character = entity::character::ActiveModel {
            name: ActiveValue::Set(character.name),
            birth_year: ActiveValue::Set(character.birth_year),
            gender: ActiveValue::Set(character.gender),
            height: ActiveValue::Set(character.height),
            weight: ActiveValue::Set(character.weight),
            eye_color: ActiveValue::Set(character.eye_color),
            hair_color: ActiveValue::Set(character.hair_color),
            planet_id: ActiveValue::Set(character.planet_id),
            ..Default::default()
        };

        character.insert(self.db).await
    }

    /// Applies the supplied fields to an existing character
    ///
    /// Returns `Ok(None)` if no character with the provided ID exists.
    pub async fn update(
        &self,
        character_id: i32,
        changes: UpdateCharacterDto,
    ) -> Result<Option<CharacterModel>, DbErr> {
        let character = match self.get_by_id(character_id).await? {
            Some(character) => character,
            None => return Ok(None),
        };

        let mut character_am = character.clone().into_active_model();
        set_if_present(&mut character_am.name, changes.name);
        set_if_present(&mut character_am.birth_year, changes.birth_year);
        set_if_present(&mut character_am.gender, changes.gender);
        set_if_present(&mut character_am.height, changes.height);
        set_if_present(&mut character_am.weight, changes.weight);
        set_if_present(&mut character_am.eye_color, changes.eye_color);
        set_if_present(&mut character_am.hair_color, changes.hair_color);
        set_if_present(&mut character_am.planet_id, changes.planet_id);

        if !character_am.is_changed() {
            return Ok(Some(character));
        }

        let character = character_am.update(self.db).await?;

        Ok(Some(character))
    }

    /// Deletes a character
    ///
    /// Vehicles piloted by the character keep their row with `character_id` cleared.
    /// Check [`DeleteResult::rows_affected`] to learn whether the character existed.
    pub async fn delete(&self, character_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Character::delete_by_id(character_id)
            .exec(self.db)
            .await
    }
}
