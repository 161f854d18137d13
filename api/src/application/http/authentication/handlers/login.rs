use aadhar_homes_core::domain::account::ports::AuthService;
use aadhar_homes_core::domain::account::value_objects::LoginInput;
use axum::extract::State;

use crate::application::http::authentication::responses::{AccountResponse, AuthSessionResponse};
use crate::application::http::authentication::validators::LoginValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    summary = "Login",
    request_body = LoginValidator,
    responses(
        (status = 200, body = AuthSessionResponse),
        (status = 401, description = "Invalid email or password")
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<LoginValidator>,
) -> Result<Response<AuthSessionResponse>, ApiError> {
    let (Some(email), Some(password)) = (
        payload.email.filter(|email| !email.is_empty()),
        payload.password.filter(|password| !password.is_empty()),
    ) else {
        return Err(ApiError::BadRequest(
            "Please provide email and password".to_string(),
        ));
    };

    let output = state
        .service
        .login(LoginInput { email, password })
        .await
        .map_err(ApiError::or_internal("Server error during login"))?;

    Ok(Response::OK(AuthSessionResponse {
        success: true,
        message: "Login successful".to_string(),
        token: output.token,
        user: AccountResponse::from(output.account),
    }))
}
