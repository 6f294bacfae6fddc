use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user.
///
/// There is deliberately no password field on this type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub username: String,
    pub is_active: bool,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            is_active: user.is_active,
        }
    }
}

#[derive(Clone, Debug, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub username: String,
    pub password: String,
    /// Defaults to `true` when omitted
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
}
