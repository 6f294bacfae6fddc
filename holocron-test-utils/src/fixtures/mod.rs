//! Test fixture modules for database record creation.
//!
//! - `catalog` - Planets, characters and vehicles
//! - `user` - Users and their favorites

pub mod catalog;
pub mod user;
