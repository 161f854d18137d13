use crate::application::auth::RequiredIdentity;
use crate::application::http::authentication::responses::LogoutResponse;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;

#[utoipa::path(
    post,
    path = "/logout",
    tag = "auth",
    summary = "Logout",
    description = "Stateless: the bearer token is discarded client-side; no server-side session is invalidated.",
    responses(
        (status = 200, body = LogoutResponse),
        (status = 401, description = "Not authenticated")
    ),
)]
pub async fn logout(
    RequiredIdentity(_identity): RequiredIdentity,
) -> Result<Response<LogoutResponse>, ApiError> {
    Ok(Response::OK(LogoutResponse {
        success: true,
        message: "Logged out successfully".to_string(),
    }))
}
