use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000002_character::Character;

static IDX_VEHICLE_CHARACTER_ID: &str = "idx-vehicle-character_id";
static FK_VEHICLE_CHARACTER_ID: &str = "fk-vehicle-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicle::Table)
                    .if_not_exists()
                    .col(pk_auto(Vehicle::Id))
                    .col(string_len_uniq(Vehicle::Name, 100))
                    .col(string_len_null(Vehicle::Model, 100))
                    .col(integer_null(Vehicle::Length))
                    .col(big_integer_null(Vehicle::Cargo))
                    .col(integer_null(Vehicle::Speed))
                    .col(integer_null(Vehicle::Crew))
                    .col(integer_null(Vehicle::Passengers))
                    .col(string_len_null(Vehicle::Manufacturer, 32))
                    .col(integer_null(Vehicle::CharacterId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_VEHICLE_CHARACTER_ID)
                            .from(Vehicle::Table, Vehicle::CharacterId)
                            .to(Character::Table, Character::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_VEHICLE_CHARACTER_ID)
                    .table(Vehicle::Table)
                    .col(Vehicle::CharacterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_VEHICLE_CHARACTER_ID)
                    .table(Vehicle::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Vehicle::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Vehicle {
    Table,
    Id,
    Name,
    Model,
    Length,
    Cargo,
    Speed,
    Crew,
    Passengers,
    Manufacturer,
    CharacterId,
}
