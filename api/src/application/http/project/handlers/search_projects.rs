use aadhar_homes_core::domain::listing::entities::ListingCategory;
use aadhar_homes_core::domain::listing::ports::ListingService;
use axum::extract::State;

use crate::application::http::listing::ListingListResponse;
use crate::application::http::query_extractor::QueryMapExtractor;
use crate::application::http::query_params::parse_search_query;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    get,
    path = "/search",
    tag = "project",
    summary = "Search projects",
    description = "Relevance-ranked text search over the project catalogue; requires a non-empty `q`.",
    responses(
        (status = 200, body = ListingListResponse),
        (status = 400, description = "Missing search query")
    ),
)]
pub async fn search_projects(
    State(state): State<AppState>,
    QueryMapExtractor(query_map): QueryMapExtractor,
) -> Result<Response<ListingListResponse>, ApiError> {
    let input = parse_search_query(&query_map, ListingCategory::Project)
        .ok_or_else(|| ApiError::BadRequest("Search query is required".to_string()))?;
    let query = input.query.clone();

    let page = state
        .service
        .search_listings(input)
        .await
        .map_err(ApiError::or_internal("Server error while searching projects"))?;

    Ok(Response::OK(ListingListResponse::from_page(page, Some(query))))
}
