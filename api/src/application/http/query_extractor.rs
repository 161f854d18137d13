use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use std::collections::HashMap;

/// Raw query-string map for the listing endpoints.
///
/// Listing queries tolerate junk values (a malformed `page` falls back to
/// its default instead of rejecting the request), so translation into a
/// typed query happens in `query_params` rather than through `Query<T>`.
#[derive(Debug, Clone)]
pub struct QueryMapExtractor(pub HashMap<String, String>);

impl<S> FromRequestParts<S> for QueryMapExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(QueryMapExtractor(query_map))
    }
}
