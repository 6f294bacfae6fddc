//! SeaORM entities for the holocron catalog schema.

pub mod prelude;

pub mod character;
pub mod favorite;
pub mod planet;
pub mod sea_orm_active_enums;
pub mod user;
pub mod vehicle;
