//! Favorites endpoints nested under a user.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{FavoriteAddedDto, FavoriteDto, FavoriteKind, FavoriteTarget},
    },
    server::{
        controller::util::extract::ApiPath,
        error::Error,
        model::app::AppState,
        service::favorite::FavoriteService,
    },
};

/// OpenAPI tag for the favorite routes
pub static FAVORITE_TAG: &str = "favorite";

/// List a user's favorites
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = FAVORITE_TAG,
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user's favorites", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db).list(user_id).await?;

    Ok((StatusCode::OK, Json(favorites)))
}

/// Get a single favorite of a user
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorite/{kind}/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("kind" = FavoriteKind, Path, description = "Kind of catalog entry"),
        ("id" = i32, Path, description = "ID of the character, planet or vehicle"),
    ),
    responses(
        (status = 200, description = "The favorite", body = FavoriteDto),
        (status = 400, description = "Unknown favorite kind", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    ApiPath((user_id, kind, id)): ApiPath<(i32, FavoriteKind, i32)>,
) -> Result<impl IntoResponse, Error> {
    let target = FavoriteTarget::new(kind, id);

    let favorite = FavoriteService::new(&state.db).get(user_id, target).await?;

    Ok((StatusCode::OK, Json(favorite)))
}

/// Add a character, planet or vehicle to a user's favorites
///
/// Adding a favorite which already exists returns it with `created` set to `false`.
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/{kind}/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("kind" = FavoriteKind, Path, description = "Kind of catalog entry"),
        ("id" = i32, Path, description = "ID of the character, planet or vehicle"),
    ),
    responses(
        (status = 200, description = "The favorite and whether it was newly created", body = FavoriteAddedDto),
        (status = 400, description = "Unknown favorite kind", body = ErrorDto),
        (status = 404, description = "User or target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    ApiPath((user_id, kind, id)): ApiPath<(i32, FavoriteKind, i32)>,
) -> Result<impl IntoResponse, Error> {
    let target = FavoriteTarget::new(kind, id);

    let (favorite, created) = FavoriteService::new(&state.db).add(user_id, target).await?;

    let message = if created {
        "Favorite added successfully"
    } else {
        "Favorite already exists"
    };

    Ok((
        StatusCode::OK,
        Json(FavoriteAddedDto {
            message: message.to_string(),
            created,
            favorite,
        }),
    ))
}

/// Remove a character, planet or vehicle from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite/{kind}/{id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "User ID"),
        ("kind" = FavoriteKind, Path, description = "Kind of catalog entry"),
        ("id" = i32, Path, description = "ID of the character, planet or vehicle"),
    ),
    responses(
        (status = 200, description = "Favorite removed", body = MessageDto),
        (status = 400, description = "Unknown favorite kind", body = ErrorDto),
        (status = 404, description = "User or favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    ApiPath((user_id, kind, id)): ApiPath<(i32, FavoriteKind, i32)>,
) -> Result<impl IntoResponse, Error> {
    let target = FavoriteTarget::new(kind, id);

    FavoriteService::new(&state.db).remove(user_id, target).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Favorite removed successfully")),
    ))
}
