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
    tag = "project",
    summary = "Delete project",
    params(
        ("id" = String, Path, description = "Project id"),
    ),
    responses(
        (status = 200, body = ListingDeleteResponse),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn delete_project(
    Path(id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ListingDeleteResponse>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::BadRequest("Invalid project ID".to_string()))?;

    state
        .service
        .delete_listing(identity, ListingCategory::Project, id)
        .await
        .map_err(ApiError::or_internal("Server error while deleting project"))?;

    Ok(Response::OK(ListingDeleteResponse::new(
        "Project deleted successfully",
    )))
}
