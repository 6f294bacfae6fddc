//! Route listing served at `/`.

use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};
use utoipa::openapi::OpenApi;

use crate::model::api::RouteDto;

/// OpenAPI tag for the root routes
pub static ROOT_TAG: &str = "root";

/// List every route served by the API
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Method and path of every registered route", body = Vec<RouteDto>)
    ),
)]
pub async fn get_routes(Extension(routes): Extension<Arc<Vec<RouteDto>>>) -> impl IntoResponse {
    (StatusCode::OK, Json(routes.as_ref().clone()))
}

/// Collects the method and path of every operation in the OpenAPI document.
///
/// Paths are sorted, methods within a path follow GET, POST, PUT, DELETE.
pub fn route_list(api: &OpenApi) -> Vec<RouteDto> {
    let mut routes = Vec::new();

    for (path, item) in api.paths.paths.iter() {
        let operations = [
            ("GET", item.get.is_some()),
            ("POST", item.post.is_some()),
            ("PUT", item.put.is_some()),
            ("DELETE", item.delete.is_some()),
        ];

        for (method, present) in operations {
            if present {
                routes.push(RouteDto {
                    method: method.to_string(),
                    path: path.clone(),
                });
            }
        }
    }

    routes
}
