use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FavoriteModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { test: self }
    }
}

pub struct UserFixtures<'a> {
    test: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Inserts an active user with the email `{username}@holocron.test`
    ///
    /// The stored password is a placeholder rather than a real hash.
    pub async fn insert_mock_user(&self, username: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::User::insert(entity::user::ActiveModel {
                email: ActiveValue::Set(format!("{}@holocron.test", username)),
                username: ActiveValue::Set(username.to_string()),
                password: ActiveValue::Set("not-a-hash".to_string()),
                is_active: ActiveValue::Set(true),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    /// Inserts a favorite row with the provided references as-is
    pub async fn insert_mock_favorite(
        &self,
        user_id: i32,
        character_id: Option<i32>,
        planet_id: Option<i32>,
        vehicle_id: Option<i32>,
    ) -> Result<FavoriteModel, TestError> {
        Ok(
            entity::prelude::Favorite::insert(entity::favorite::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
                planet_id: ActiveValue::Set(planet_id),
                vehicle_id: ActiveValue::Set(vehicle_id),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
