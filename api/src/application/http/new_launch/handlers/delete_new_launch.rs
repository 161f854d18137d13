use aadhar_homes_core::domain::listing::entities::ListingCategory;
use aadhar_homes_core::domain::listing::ports::ListingService;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::listing::ListingDeleteResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "newlaunch",
    summary = "Delete new launch",
    params(
        ("id" = String, Path, description = "New launch id"),
    ),
    responses(
        (status = 200, body = ListingDeleteResponse),
        (status = 404, description = "New launch project not found")
    ),
)]
pub async fn delete_new_launch(
    Path(id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ListingDeleteResponse>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::BadRequest("Invalid project ID".to_string()))?;

    state
        .service
        .delete_listing(identity, ListingCategory::NewLaunch, id)
        .await
        .map_err(ApiError::or_internal(
            "Server error while deleting new launch project",
        ))?;

    Ok(Response::OK(ListingDeleteResponse::new(
        "New launch project deleted successfully",
    )))
}
