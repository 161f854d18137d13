use aadhar_homes_core::domain::listing::ports::ListingService;
use aadhar_homes_core::domain::listing::value_objects::NewLaunchStats;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct NewLaunchStatsResponse {
    pub success: bool,
    pub data: NewLaunchStats,
}

#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = "newlaunch",
    summary = "New launch statistics",
    description = "Aggregate counts, price averages, status breakdown, and the upcoming launch count.",
    responses(
        (status = 200, body = NewLaunchStatsResponse),
        (status = 403, description = "Admin role required")
    ),
)]
pub async fn get_new_launch_stats(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<NewLaunchStatsResponse>, ApiError> {
    let data = state
        .service
        .new_launch_stats(identity)
        .await
        .map_err(ApiError::or_internal(
            "Server error while fetching new launch statistics",
        ))?;

    Ok(Response::OK(NewLaunchStatsResponse {
        success: true,
        data,
    }))
}
