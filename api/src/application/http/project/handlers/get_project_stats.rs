use aadhar_homes_core::domain::listing::ports::ListingService;
use aadhar_homes_core::domain::listing::value_objects::ProjectStats;
use axum::extract::State;
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::auth::RequiredIdentity;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectStatsResponse {
    pub success: bool,
    pub data: ProjectStats,
}

#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = "project",
    summary = "Project statistics",
    description = "Aggregate counts, price averages, and breakdowns by status and city.",
    responses(
        (status = 200, body = ProjectStatsResponse),
        (status = 403, description = "Admin role required")
    ),
)]
pub async fn get_project_stats(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ProjectStatsResponse>, ApiError> {
    let data = state
        .service
        .project_stats(identity)
        .await
        .map_err(ApiError::or_internal(
            "Server error while fetching project statistics",
        ))?;

    Ok(Response::OK(ProjectStatsResponse {
        success: true,
        data,
    }))
}
