use crate::application::auth::RequiredIdentity;
use crate::application::http::authentication::responses::{AccountResponse, MeResponse};
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;

#[utoipa::path(
    get,
    path = "/me",
    tag = "auth",
    summary = "Current account",
    responses(
        (status = 200, body = MeResponse),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn get_me(
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<MeResponse>, ApiError> {
    Ok(Response::OK(MeResponse {
        success: true,
        user: AccountResponse::from(identity.account),
    }))
}
