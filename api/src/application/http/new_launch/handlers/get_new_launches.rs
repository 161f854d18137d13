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
    tag = "newlaunch",
    summary = "List new launches",
    description = "Filters, sorts, and paginates active new launch listings. All query parameters are optional.",
    responses(
        (status = 200, body = ListingListResponse)
    ),
)]
pub async fn get_new_launches(
    State(state): State<AppState>,
    QueryMapExtractor(query_map): QueryMapExtractor,
) -> Result<Response<ListingListResponse>, ApiError> {
    let query = parse_listing_query(&query_map, ListingCategory::NewLaunch);

    let page = state
        .service
        .list_listings(query)
        .await
        .map_err(ApiError::or_internal(
            "Server error while fetching new launches",
        ))?;

    Ok(Response::OK(ListingListResponse::from_page(page, None)))
}
