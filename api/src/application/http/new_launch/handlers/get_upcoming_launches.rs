use aadhar_homes_core::domain::listing::ports::ListingService;
use axum::extract::State;

use crate::application::http::listing::UpcomingLaunchesResponse;
use crate::application::http::query_extractor::QueryMapExtractor;
use crate::application::http::query_params::parse_limit;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/upcoming",
    tag = "newlaunch",
    summary = "Upcoming launches",
    description = "Active new launches with a launch date inside the next 30 days, soonest first.",
    responses(
        (status = 200, body = UpcomingLaunchesResponse)
    ),
)]
pub async fn get_upcoming_launches(
    State(state): State<AppState>,
    QueryMapExtractor(query_map): QueryMapExtractor,
) -> Result<Response<UpcomingLaunchesResponse>, ApiError> {
    let limit = parse_limit(&query_map);

    let listings = state
        .service
        .upcoming_launches(limit)
        .await
        .map_err(ApiError::or_internal(
            "Server error while fetching upcoming launches",
        ))?;

    Ok(Response::OK(UpcomingLaunchesResponse::new(listings)))
}
