use aadhar_homes_core::domain::listing::entities::ListingCategory;
use aadhar_homes_core::domain::listing::ports::ListingService;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::http::listing::ListingItemResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "newlaunch",
    summary = "Get new launch",
    params(
        ("id" = String, Path, description = "New launch id"),
    ),
    responses(
        (status = 200, body = ListingItemResponse),
        (status = 404, description = "New launch project not found")
    ),
)]
pub async fn get_new_launch(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<ListingItemResponse>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::BadRequest("Invalid project ID".to_string()))?;

    let listing = state
        .service
        .get_listing(ListingCategory::NewLaunch, id)
        .await
        .map_err(ApiError::or_internal(
            "Server error while fetching new launch project",
        ))?
        .ok_or_else(|| ApiError::NotFound("New launch project not found".to_string()))?;

    Ok(Response::OK(ListingItemResponse::new(listing)))
}
