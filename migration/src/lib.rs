pub use sea_orm_migration::prelude::*;

mod m20250301_000001_planet;
mod m20250301_000002_character;
mod m20250301_000003_vehicle;
mod m20250301_000004_user;
mod m20250301_000005_favorites;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_planet::Migration),
            Box::new(m20250301_000002_character::Migration),
            Box::new(m20250301_000003_vehicle::Migration),
            Box::new(m20250301_000004_user::Migration),
            Box::new(m20250301_000005_favorites::Migration),
        ]
    }
}
