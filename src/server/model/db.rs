//! Database model type aliases.
//!
//! Short names for the SeaORM models of the `entity` crate, used by repositories and tests.

/// A registered user. Holds the argon2 password hash, so it is never serialized directly.
pub type UserModel = entity::user::Model;

/// A character, with an optional home planet.
pub type CharacterModel = entity::character::Model;

/// A planet.
pub type PlanetModel = entity::planet::Model;

/// A vehicle, with an optional assigned character.
pub type VehicleModel = entity::vehicle::Model;

/// A row linking a user to exactly one character, planet or vehicle.
///
/// # Fields (from `entity::favorite::Model`)
/// - `id` - Primary key
/// - `user_id` - Owning user
/// - `character_id` - Favorite character (nullable)
/// - `planet_id` - Favorite planet (nullable)
/// - `vehicle_id` - Favorite vehicle (nullable)
pub type FavoriteModel = entity::favorite::Model;
