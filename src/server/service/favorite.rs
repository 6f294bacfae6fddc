//! Per-user favorites of characters, planets and vehicles.

use sea_orm::DatabaseConnection;

use crate::{
    model::favorite::{FavoriteDto, FavoriteTarget},
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, user::UserRepository, vehicle::VehicleRepository,
        },
        error::{
            entity::{EntityError, EntityKind},
            Error,
        },
        model::db::FavoriteModel,
    },
};

/// Service for a user's favorite characters, planets and vehicles.
///
/// Every operation takes the user ID explicitly and fails with a not found error before
/// touching the favorites table if that user doesn't exist.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all favorites of a user, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - The user's favorites, possibly empty
    /// - `Err(Error::EntityError)` - User not found
    /// - `Err(Error::InternalError)` - A stored favorite has no target reference
    pub async fn list(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        self.ensure_user_exists(user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);

        favorite_repo
            .get_by_user_id(user_id)
            .await?
            .iter()
            .map(to_dto)
            .collect()
    }

    /// Retrieves a single favorite.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The favorite linking the user to the target
    /// - `Err(Error::EntityError)` - User not found, or the target isn't a favorite
    pub async fn get(&self, user_id: i32, target: FavoriteTarget) -> Result<FavoriteDto, Error> {
        self.ensure_user_exists(user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);

        let favorite = favorite_repo
            .get(user_id, target)
            .await?
            .ok_or(favorite_not_found(user_id, target))?;

        Ok(FavoriteDto::new(&favorite, target))
    }

    /// Adds a target to a user's favorites.
    ///
    /// Idempotent: if the favorite already exists it is returned unchanged and no new row is
    /// written.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `target` - Kind and ID of the catalog entry to favorite
    ///
    /// # Returns
    /// - `Ok((FavoriteDto, true))` - A new favorite was created
    /// - `Ok((FavoriteDto, false))` - The favorite already existed
    /// - `Err(Error::EntityError)` - User or target not found
    pub async fn add(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<(FavoriteDto, bool), Error> {
        self.ensure_user_exists(user_id).await?;
        self.ensure_target_exists(target).await?;

        let favorite_repo = FavoriteRepository::new(self.db);

        if let Some(existing) = favorite_repo.get(user_id, target).await? {
            tracing::debug!(
                user_id = %user_id,
                favorite_id = %existing.id,
                "Favorite {} {} already exists",
                target.kind(),
                target.id()
            );

            return Ok((FavoriteDto::new(&existing, target), false));
        }

        let favorite = favorite_repo.create(user_id, target).await?;

        Ok((FavoriteDto::new(&favorite, target), true))
    }

    /// Removes a target from a user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was removed
    /// - `Err(Error::EntityError)` - User not found, or the target isn't a favorite
    pub async fn remove(&self, user_id: i32, target: FavoriteTarget) -> Result<(), Error> {
        self.ensure_user_exists(user_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);

        let result = favorite_repo.delete(user_id, target).await?;

        if result.rows_affected == 0 {
            return Err(favorite_not_found(user_id, target));
        }

        Ok(())
    }

    async fn ensure_user_exists(&self, user_id: i32) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Err(EntityError::not_found(EntityKind::User, user_id).into());
        }

        Ok(())
    }

    async fn ensure_target_exists(&self, target: FavoriteTarget) -> Result<(), Error> {
        let exists = match target {
            FavoriteTarget::Character(id) => CharacterRepository::new(self.db)
                .get_by_id(id)
                .await?
                .is_some(),
            FavoriteTarget::Planet(id) => {
                PlanetRepository::new(self.db).get_by_id(id).await?.is_some()
            }
            FavoriteTarget::Vehicle(id) => {
                VehicleRepository::new(self.db).get_by_id(id).await?.is_some()
            }
        };

        if !exists {
            return Err(EntityError::not_found(target.into(), target.id()).into());
        }

        Ok(())
    }
}

fn favorite_not_found(user_id: i32, target: FavoriteTarget) -> Error {
    EntityError::FavoriteNotFound {
        user_id,
        kind: target.kind(),
        target_id: target.id(),
    }
    .into()
}

fn to_dto(favorite: &FavoriteModel) -> Result<FavoriteDto, Error> {
    let target = FavoriteTarget::from_model(favorite).ok_or_else(|| {
        Error::InternalError(format!(
            "Favorite ID {} does not reference exactly one character, planet or vehicle",
            favorite.id
        ))
    })?;

    Ok(FavoriteDto::new(favorite, target))
}
