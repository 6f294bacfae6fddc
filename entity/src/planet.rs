use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::{Climate, Terrain};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique, column_type = "String(StringLen::N(50))")]
    pub name: String,
    pub diameter: Option<i32>,
    pub climate: Option<Climate>,
    pub terrain: Option<Terrain>,
    pub surface_water: Option<i32>,
    pub population: Option<i64>,
    pub orbital_period: Option<i32>,
    pub rotation_period: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(50))", nullable)]
    pub gravity: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
    #[sea_orm(has_many = "super::favorite::Entity")]
    Favorite,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorite.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
