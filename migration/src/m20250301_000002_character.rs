use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_planet::Planet;

static IDX_CHARACTER_PLANET_ID: &str = "idx-character-planet_id";
static FK_CHARACTER_PLANET_ID: &str = "fk-character-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the table can be created on SQLite, which
        // has no ALTER TABLE ADD CONSTRAINT.
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len_uniq(Character::Name, 150))
                    .col(string_len_null(Character::BirthYear, 50))
                    .col(string_len(Character::Gender, 32))
                    .col(integer_null(Character::Height))
                    .col(integer_null(Character::Weight))
                    .col(string_len(Character::EyeColor, 32))
                    .col(string_len(Character::HairColor, 32))
                    .col(integer_null(Character::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTER_PLANET_ID)
                            .from(Character::Table, Character::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_PLANET_ID)
                    .table(Character::Table)
                    .col(Character::PlanetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_PLANET_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    BirthYear,
    Gender,
    Height,
    Weight,
    EyeColor,
    HairColor,
    PlanetId,
}
