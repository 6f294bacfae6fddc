//! Character business logic.

use sea_orm::DatabaseConnection;

use crate::{
    model::character::{CharacterDto, CreateCharacterDto, UpdateCharacterDto},
    server::{
        data::{character::CharacterRepository, planet::PlanetRepository},
        error::{
            entity::{EntityError, EntityKind},
            validation::{require_max_len, require_non_blank},
            Error,
        },
    },
};

const NAME_MAX_LEN: usize = 150;
const BIRTH_YEAR_MAX_LEN: usize = 50;

/// Service for the character catalog.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all characters
    pub async fn list(&self) -> Result<Vec<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let characters = character_repo.get_all().await?;

        Ok(characters.into_iter().map(CharacterDto::from).collect())
    }

    /// Retrieves a character, or a not found error
    pub async fn get_by_id(&self, character_id: i32) -> Result<CharacterDto, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo
            .get_by_id(character_id)
            .await?
            .ok_or(EntityError::not_found(EntityKind::Character, character_id))?;

        Ok(character.into())
    }

    /// Creates a character
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The stored character with its assigned ID
    /// - `Err(Error::ValidationError)` - Blank name, or a name or birth year that is too long
    /// - `Err(Error::EntityError)` - Home planet doesn't exist, or the name is taken
    pub async fn create(&self, character: CreateCharacterDto) -> Result<CharacterDto, Error> {
        require_non_blank("name", &character.name)?;
        require_max_len("name", &character.name, NAME_MAX_LEN)?;
        if let Some(birth_year) = &character.birth_year {
            require_max_len("birth_year", birth_year, BIRTH_YEAR_MAX_LEN)?;
        }
        self.ensure_planet_exists(character.planet_id).await?;

        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo
            .create(character)
            .await
            .map_err(|e| EntityError::from_write(EntityKind::Character, e))?;

        Ok(character.into())
    }

    /// Updates only the supplied fields of a character. Checks that a supplied home planet exists.
    ///
    /// # Returns
    /// - `Ok(CharacterDto)` - The updated character
    /// - `Err(Error::ValidationError)` - Blank or overlong field
    /// - `Err(Error::EntityError)` - Character or reference not found, or the name is taken
    pub async fn update(
        &self,
        character_id: i32,
        changes: UpdateCharacterDto,
    ) -> Result<CharacterDto, Error> {
        if let Some(name) = &changes.name {
            require_non_blank("name", name)?;
            require_max_len("name", name, NAME_MAX_LEN)?;
        }
        if let Some(Some(birth_year)) = &changes.birth_year {
            require_max_len("birth_year", birth_year, BIRTH_YEAR_MAX_LEN)?;
        }
        if let Some(planet_id) = changes.planet_id {
            self.ensure_planet_exists(planet_id).await?;
        }

        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo
            .update(character_id, changes)
            .await
            .map_err(|e| EntityError::from_write(EntityKind::Character, e))?
            .ok_or(EntityError::not_found(EntityKind::Character, character_id))?;

        Ok(character.into())
    }

    /// Deletes a character
    ///
    /// Vehicles assigned to the character are kept with their `character_id` cleared,
    /// favorites of the character are removed.
    pub async fn delete(&self, character_id: i32) -> Result<(), Error> {
        let character_repo = CharacterRepository::new(self.db);

        let result = character_repo.delete(character_id).await?;

        if result.rows_affected == 0 {
            return Err(EntityError::not_found(EntityKind::Character, character_id).into());
        }

        Ok(())
    }

    async fn ensure_planet_exists(&self, planet_id: Option<i32>) -> Result<(), Error> {
        let Some(planet_id) = planet_id else {
            return Ok(());
        };

        let planet_repo = PlanetRepository::new(self.db);

        if planet_repo.get_by_id(planet_id).await?.is_none() {
            return Err(EntityError::not_found(EntityKind::Planet, planet_id).into());
        }

        Ok(())
    }
}
