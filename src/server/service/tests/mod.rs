mod user;
mod vehicle;

use holocron_test_utils::prelude::*;

use crate::server::{
    error::{
        entity::{EntityError, EntityKind},
        validation::ValidationError,
        Error,
    },
    service::{
        character::CharacterService, favorite::FavoriteService, planet::PlanetService,
        user::UserService, vehicle::VehicleService,
    },
};
