//! Planet endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        planet::{CreatePlanetDto, PlanetDto, UpdatePlanetDto},
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath},
        error::Error,
        model::app::AppState,
        service::planet::PlanetService,
    },
};

/// OpenAPI tag for the planet routes
pub static PLANET_TAG: &str = "planet";

/// List all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "All planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = PlanetService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "The planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    ApiPath(planet_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).get_by_id(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Create a planet
#[utoipa::path(
    post,
    path = "/planets",
    tag = PLANET_TAG,
    request_body = CreatePlanetDto,
    responses(
        (status = 200, description = "The created planet", body = PlanetDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 409, description = "A planet with that name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_planet(
    State(state): State<AppState>,
    ApiJson(planet): ApiJson<CreatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db).create(planet).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Update the supplied fields of a planet
#[utoipa::path(
    put,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    request_body = UpdatePlanetDto,
    responses(
        (status = 200, description = "The updated planet", body = PlanetDto),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 409, description = "A planet with that name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_planet(
    State(state): State<AppState>,
    ApiPath(planet_id): ApiPath<i32>,
    ApiJson(changes): ApiJson<UpdatePlanetDto>,
) -> Result<impl IntoResponse, Error> {
    let planet = PlanetService::new(&state.db)
        .update(planet_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// Delete a planet
///
/// Characters from the planet are kept with no home planet.
#[utoipa::path(
    delete,
    path = "/planets/{id}",
    tag = PLANET_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Planet deleted", body = MessageDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet(
    State(state): State<AppState>,
    ApiPath(planet_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    PlanetService::new(&state.db).delete(planet_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Planet deleted successfully")),
    ))
}
