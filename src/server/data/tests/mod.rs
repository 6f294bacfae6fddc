
use holocron_test_utils::prelude::*;

use crate::server::data::{
    character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository,
    user::UserRepository, vehicle::VehicleRepository,
};
