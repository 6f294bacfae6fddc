//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications. Swagger UI is
//! served at `/api/docs` and the route listing at `/` is derived from the same document.

use std::sync::Arc;

use axum::{Extension, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - Route listing
/// - `GET, POST /users`, `GET, PUT, DELETE /users/{user_id}`
/// - `GET, POST /characters`, `GET, PUT, DELETE /characters/{id}`
/// - `GET, POST /planets`, `GET, PUT, DELETE /planets/{id}`
/// - `GET, POST /vehicles`, `GET, PUT, DELETE /vehicles/{id}`
/// - `GET /users/{user_id}/favorites`
/// - `GET, POST, DELETE /users/{user_id}/favorite/{kind}/{id}`
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Holocron",
            description = "Catalog of characters, planets and vehicles with per-user favorites"
        ),
        tags(
            (name = controller::root::ROOT_TAG, description = "Route listing"),
            (name = controller::user::USER_TAG, description = "User API routes"),
            (name = controller::character::CHARACTER_TAG, description = "Character API routes"),
            (name = controller::planet::PLANET_TAG, description = "Planet API routes"),
            (name = controller::vehicle::VEHICLE_TAG, description = "Vehicle API routes"),
            (name = controller::favorite::FAVORITE_TAG, description = "Favorites API routes"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::root::get_routes))
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(
            controller::user::get_user,
            controller::user::update_user,
            controller::user::delete_user
        ))
        .routes(routes!(
            controller::character::get_characters,
            controller::character::create_character
        ))
        .routes(routes!(
            controller::character::get_character,
            controller::character::update_character,
            controller::character::delete_character
        ))
        .routes(routes!(
            controller::planet::get_planets,
            controller::planet::create_planet
        ))
        .routes(routes!(
            controller::planet::get_planet,
            controller::planet::update_planet,
            controller::planet::delete_planet
        ))
        .routes(routes!(
            controller::vehicle::get_vehicles,
            controller::vehicle::create_vehicle
        ))
        .routes(routes!(
            controller::vehicle::get_vehicle,
            controller::vehicle::update_vehicle,
            controller::vehicle::delete_vehicle
        ))
        .routes(routes!(controller::favorite::get_user_favorites))
        .routes(routes!(
            controller::favorite::get_favorite,
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .split_for_parts();

    let route_list = Arc::new(controller::root::route_list(&api));

    routes
        .layer(Extension(route_list))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
