use aadhar_homes_core::domain::listing::entities::ListingCategory;
use aadhar_homes_core::domain::listing::ports::ListingService;
use axum::extract::State;

use crate::application::http::listing::ListingListResponse;
use crate::application::http::query_extractor::QueryMapExtractor;
use crate::application::http::query_params::parse_listing_query;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "",
    tag = "project",
    summary = "List projects",
    description = "Filters, sorts, and paginates the project catalogue. All query parameters are optional.",
    responses(
        (status = 200, body = ListingListResponse)
    ),
)]
pub async fn get_projects(
    State(state): State<AppState>,
    QueryMapExtractor(query_map): QueryMapExtractor,
) -> Result<Response<ListingListResponse>, ApiError> {
    let query = parse_listing_query(&query_map, ListingCategory::Project);

    let page = state
        .service
        .list_listings(query)
        .await
        .map_err(ApiError::or_internal("Server error while fetching projects"))?;

    Ok(Response::OK(ListingListResponse::from_page(page, None)))
}
