//! Favorites table repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::{model::favorite::FavoriteTarget, server::model::db::FavoriteModel};

/// Column holding the reference for the target's kind
fn target_column(target: FavoriteTarget) -> entity::favorite::Column {
    match target {
        FavoriteTarget::Character(_) => entity::favorite::Column::CharacterId,
        FavoriteTarget::Planet(_) => entity::favorite::Column::PlanetId,
        FavoriteTarget::Vehicle(_) => entity::favorite::Column::VehicleId,
    }
}

/// Repository for the `favorite` table.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all favorites of a user, oldest first
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorite::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the user's favorite pointing at the target
    pub async fn get(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorite::find()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target_column(target).eq(target.id()))
            .one(self.db)
            .await
    }

    /// Inserts a favorite row with only the target's reference column set
    ///
    /// Does not check for an existing favorite, see
    /// [`FavoriteService::add`](crate::server::service::favorite::FavoriteService::add).
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteModel, DbErr> {
        let (character_id, planet_id, vehicle_id) = match target {
            FavoriteTarget::Character(id) => (Some(id), None, None),
            FavoriteTarget::Planet(id) => (None, Some(id), None),
            FavoriteTarget::Vehicle(id) => (None, None, Some(id)),
        };

        let favorite = entity::favorite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
            planet_id: ActiveValue::Set(planet_id),
            vehicle_id: ActiveValue::Set(vehicle_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    /// Deletes every favorite of the user pointing at the target
    pub async fn delete(&self, user_id: i32, target: FavoriteTarget) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorite::delete_many()
            .filter(entity::favorite::Column::UserId.eq(user_id))
            .filter(target_column(target).eq(target.id()))
            .exec(self.db)
            .await
    }
}
