use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The kind of catalog entry a favorite points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Character,
    Planet,
    Vehicle,
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Character => write!(f, "character"),
            Self::Planet => write!(f, "planet"),
            Self::Vehicle => write!(f, "vehicle"),
        }
    }
}

/// A favorite target: one kind paired with the ID of the catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FavoriteTarget {
    Character(i32),
    Planet(i32),
    Vehicle(i32),
}

impl FavoriteTarget {
    pub fn new(kind: FavoriteKind, id: i32) -> Self {
        match kind {
            FavoriteKind::Character => Self::Character(id),
            FavoriteKind::Planet => Self::Planet(id),
            FavoriteKind::Vehicle => Self::Vehicle(id),
        }
    }

    pub fn kind(&self) -> FavoriteKind {
        match self {
            Self::Character(_) => FavoriteKind::Character,
            Self::Planet(_) => FavoriteKind::Planet,
            Self::Vehicle(_) => FavoriteKind::Vehicle,
        }
    }

    pub fn id(&self) -> i32 {
        match self {
            Self::Character(id) | Self::Planet(id) | Self::Vehicle(id) => *id,
        }
    }

    /// Reads the target back out of a stored favorite row.
    ///
    /// Returns `None` for a row with no reference set.
    pub fn from_model(favorite: &entity::favorite::Model) -> Option<Self> {
        match (
            favorite.character_id,
            favorite.planet_id,
            favorite.vehicle_id,
        ) {
            (Some(id), None, None) => Some(Self::Character(id)),
            (None, Some(id), None) => Some(Self::Planet(id)),
            (None, None, Some(id)) => Some(Self::Vehicle(id)),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub kind: FavoriteKind,
    pub target_id: i32,
}

impl FavoriteDto {
    pub fn new(favorite: &entity::favorite::Model, target: FavoriteTarget) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            kind: target.kind(),
            target_id: target.id(),
        }
    }
}

/// Result of adding a favorite.
///
/// `created` is `false` when the favorite already existed and was returned unchanged.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct FavoriteAddedDto {
    pub message: String,
    pub created: bool,
    pub favorite: FavoriteDto,
}
