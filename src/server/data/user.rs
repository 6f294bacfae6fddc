//! User table repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::{
    model::user::UpdateUserDto,
    server::{data::set_if_present, model::db::UserModel},
};

/// Repository for the `user` table.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all users ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a user by ID
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Creates a new user
    ///
    /// `password_hash` is stored as provided, hashing is the caller's responsibility.
    pub async fn create(
        &self,
        email: String,
        username: String,
        password_hash: String,
        is_active: bool,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            username: ActiveValue::Set(username),
            password: ActiveValue::Set(password_hash),
            is_active: ActiveValue::Set(is_active),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Applies the supplied fields to an existing user
    ///
    /// `changes.password` must already be hashed. Returns `Ok(None)` if the user doesn't exist.
    pub async fn update(
        &self,
        user_id: i32,
        changes: UpdateUserDto,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match self.get_by_id(user_id).await? {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.clone().into_active_model();
        set_if_present(&mut user_am.email, changes.email);
        set_if_present(&mut user_am.username, changes.username);
        set_if_present(&mut user_am.password, changes.password);
        set_if_present(&mut user_am.is_active, changes.is_active);

        if !user_am.is_changed() {
            return Ok(Some(user));
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user along with their favorites
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
