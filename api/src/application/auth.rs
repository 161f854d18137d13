use aadhar_homes_core::domain::{
    account::ports::AuthService, authentication::value_objects::Identity,
};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::Response,
};

use super::http::server::{api_entities::api_error::ApiError, app_state::AppState};

/// Resolves an optional bearer token into an [`Identity`] request
/// extension. A missing or invalid token is not an error here; handlers
/// that need a caller extract [`RequiredIdentity`] and fail with 401.
pub async fn auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(header) = req.headers().get("authorization")
        && let Ok(value) = header.to_str()
        && let Some(token) = value.strip_prefix("Bearer ")
        && !token.is_empty()
        && let Ok(identity) = state.service.authorize(token.to_string()).await
    {
        req.extensions_mut().insert(identity);
    }

    Ok(next.run(req).await)
}

pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Identity>()
            .cloned()
            .map(RequiredIdentity)
            .ok_or_else(|| {
                ApiError::Unauthorized("Not authorized to access this route".to_string())
            })
    }
}

/// Registration is public only while the account store is empty, so the
/// register handler takes whatever identity happens to be present.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}
