use aadhar_homes_core::domain::listing::ports::ListingService;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::listing::ListingMutationResponse;
use crate::application::http::project::validators::UpdateProjectValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "project",
    summary = "Update project",
    params(
        ("id" = String, Path, description = "Project id"),
    ),
    request_body = UpdateProjectValidator,
    responses(
        (status = 200, body = ListingMutationResponse),
        (status = 404, description = "Project not found")
    ),
)]
pub async fn update_project(
    Path(id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateProjectValidator>,
) -> Result<Response<ListingMutationResponse>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::BadRequest("Invalid project ID".to_string()))?;

    let listing = state
        .service
        .update_listing(identity, payload.into_input(id))
        .await
        .map_err(ApiError::or_internal("Server error while updating project"))?;

    Ok(Response::OK(ListingMutationResponse::new(
        "Project updated successfully",
        listing,
    )))
}
