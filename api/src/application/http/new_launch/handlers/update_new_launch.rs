use aadhar_homes_core::domain::listing::ports::ListingService;
use axum::extract::{Path, State};
use uuid::Uuid;

use crate::application::auth::RequiredIdentity;
use crate::application::http::listing::ListingMutationResponse;
use crate::application::http::new_launch::validators::UpdateNewLaunchValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "newlaunch",
    summary = "Update new launch",
    params(
        ("id" = String, Path, description = "New launch id"),
    ),
    request_body = UpdateNewLaunchValidator,
    responses(
        (status = 200, body = ListingMutationResponse),
        (status = 404, description = "New launch project not found")
    ),
)]
pub async fn update_new_launch(
    Path(id): Path<String>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<UpdateNewLaunchValidator>,
) -> Result<Response<ListingMutationResponse>, ApiError> {
    let id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::BadRequest("Invalid project ID".to_string()))?;

    let listing = state
        .service
        .update_listing(identity, payload.into_input(id))
        .await
        .map_err(ApiError::or_internal(
            "Server error while updating new launch project",
        ))?;

    Ok(Response::OK(ListingMutationResponse::new(
        "New launch project updated successfully",
        listing,
    )))
}
