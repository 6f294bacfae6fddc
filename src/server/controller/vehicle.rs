//! Vehicle endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        vehicle::{CreateVehicleDto, VehicleDto, UpdateVehicleDto},
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath},
        error::Error,
        model::app::AppState,
        service::vehicle::VehicleService,
    },
};

/// OpenAPI tag for the vehicle routes
pub static VEHICLE_TAG: &str = "vehicle";

/// List all vehicles
#[utoipa::path(
    get,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    responses(
        (status = 200, description = "All vehicles", body = Vec<VehicleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicles(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let vehicles = VehicleService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(vehicles)))
}

/// Get a vehicle by ID
#[utoipa::path(
    get,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "The vehicle", body = VehicleDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vehicle(
    State(state): State<AppState>,
    ApiPath(vehicle_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = VehicleService::new(&state.db).get_by_id(vehicle_id).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

/// Create a vehicle
#[utoipa::path(
    post,
    path = "/vehicles",
    tag = VEHICLE_TAG,
    request_body = CreateVehicleDto,
    responses(
        (status = 200, description = "The created vehicle", body = VehicleDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 404, description = "Assigned character not found", body = ErrorDto),
        (status = 409, description = "A vehicle with that name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_vehicle(
    State(state): State<AppState>,
    ApiJson(vehicle): ApiJson<CreateVehicleDto>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = VehicleService::new(&state.db).create(vehicle).await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

/// Update the supplied fields of a vehicle
#[utoipa::path(
    put,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    request_body = UpdateVehicleDto,
    responses(
        (status = 200, description = "The updated vehicle", body = VehicleDto),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 404, description = "Vehicle or assigned character not found", body = ErrorDto),
        (status = 409, description = "A vehicle with that name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_vehicle(
    State(state): State<AppState>,
    ApiPath(vehicle_id): ApiPath<i32>,
    ApiJson(changes): ApiJson<UpdateVehicleDto>,
) -> Result<impl IntoResponse, Error> {
    let vehicle = VehicleService::new(&state.db)
        .update(vehicle_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(vehicle)))
}

/// Delete a vehicle
#[utoipa::path(
    delete,
    path = "/vehicles/{id}",
    tag = VEHICLE_TAG,
    params(("id" = i32, Path, description = "Vehicle ID")),
    responses(
        (status = 200, description = "Vehicle deleted", body = MessageDto),
        (status = 404, description = "Vehicle not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_vehicle(
    State(state): State<AppState>,
    ApiPath(vehicle_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    VehicleService::new(&state.db).delete(vehicle_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Vehicle deleted successfully")),
    ))
}
