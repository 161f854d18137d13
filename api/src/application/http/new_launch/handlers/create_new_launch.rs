use aadhar_homes_core::domain::listing::ports::ListingService;
use axum::extract::State;

use crate::application::auth::RequiredIdentity;
use crate::application::http::listing::ListingMutationResponse;
use crate::application::http::new_launch::validators::CreateNewLaunchValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "",
    tag = "newlaunch",
    summary = "Create new launch",
    request_body = CreateNewLaunchValidator,
    responses(
        (status = 201, body = ListingMutationResponse),
        (status = 400, description = "Validation failure or duplicate slug")
    ),
)]
pub async fn create_new_launch(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateNewLaunchValidator>,
) -> Result<Response<ListingMutationResponse>, ApiError> {
    let listing = state
        .service
        .create_listing(identity, payload.into_input())
        .await
        .map_err(ApiError::or_internal(
            "Server error while creating new launch project",
        ))?;

    Ok(Response::Created(ListingMutationResponse::new(
        "New launch project created successfully",
        listing,
    )))
}
