//! Service layer for catalog business logic.
//!
//! Services sit between the controllers and the repositories. They validate input that the
//! JSON schema alone can't express (blank names, dangling references), turn `Option` results
//! into not-found errors, and map unique constraint violations to conflicts. Every mutating
//! method commits a single write.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;
pub mod vehicle;

#[cfg(test)]
mod tests;
