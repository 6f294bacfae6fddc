//! Character endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        character::{CreateCharacterDto, CharacterDto, UpdateCharacterDto},
    },
    server::{
        controller::util::extract::{ApiJson, ApiPath},
        error::Error,
        model::app::AppState,
        service::character::CharacterService,
    },
};

/// OpenAPI tag for the character routes
pub static CHARACTER_TAG: &str = "character";

/// List all characters
#[utoipa::path(
    get,
    path = "/characters",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "All characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let characters = CharacterService::new(&state.db).list().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a character by ID
#[utoipa::path(
    get,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "The character", body = CharacterDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    ApiPath(character_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db).get_by_id(character_id).await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Create a character
#[utoipa::path(
    post,
    path = "/characters",
    tag = CHARACTER_TAG,
    request_body = CreateCharacterDto,
    responses(
        (status = 200, description = "The created character", body = CharacterDto),
        (status = 400, description = "Missing or invalid field", body = ErrorDto),
        (status = 404, description = "Home planet not found", body = ErrorDto),
        (status = 409, description = "A character with that name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_character(
    State(state): State<AppState>,
    ApiJson(character): ApiJson<CreateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db).create(character).await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Update the supplied fields of a character
#[utoipa::path(
    put,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    request_body = UpdateCharacterDto,
    responses(
        (status = 200, description = "The updated character", body = CharacterDto),
        (status = 400, description = "Invalid field", body = ErrorDto),
        (status = 404, description = "Character or home planet not found", body = ErrorDto),
        (status = 409, description = "A character with that name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_character(
    State(state): State<AppState>,
    ApiPath(character_id): ApiPath<i32>,
    ApiJson(changes): ApiJson<UpdateCharacterDto>,
) -> Result<impl IntoResponse, Error> {
    let character = CharacterService::new(&state.db)
        .update(character_id, changes)
        .await?;

    Ok((StatusCode::OK, Json(character)))
}

/// Delete a character
///
/// Vehicles assigned to the character are kept with no character.
#[utoipa::path(
    delete,
    path = "/characters/{id}",
    tag = CHARACTER_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Character deleted", body = MessageDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_character(
    State(state): State<AppState>,
    ApiPath(character_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    CharacterService::new(&state.db).delete(character_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Character deleted successfully")),
    ))
}
