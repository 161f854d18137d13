use aadhar_homes_core::domain::account::ports::AuthService;
use aadhar_homes_core::domain::account::value_objects::RegisterAccountInput;
use axum::extract::State;

use crate::application::auth::OptionalIdentity;
use crate::application::http::authentication::responses::{AccountResponse, AuthSessionResponse};
use crate::application::http::authentication::validators::RegisterValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    summary = "Register account",
    description = "Unauthenticated while the account store is empty (the first account becomes admin); afterwards restricted to admin callers.",
    request_body = RegisterValidator,
    responses(
        (status = 201, body = AuthSessionResponse),
        (status = 401, description = "Registration restricted"),
        (status = 403, description = "Admin role required")
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    OptionalIdentity(identity): OptionalIdentity,
    ValidateJson(payload): ValidateJson<RegisterValidator>,
) -> Result<Response<AuthSessionResponse>, ApiError> {
    let output = state
        .service
        .register(
            identity,
            RegisterAccountInput {
                name: payload.name.unwrap_or_default(),
                email: payload.email.unwrap_or_default(),
                password: payload.password.unwrap_or_default(),
                role: payload.role,
            },
        )
        .await
        .map_err(ApiError::or_internal("Server error during registration"))?;

    Ok(Response::Created(AuthSessionResponse {
        success: true,
        message: "User registered successfully".to_string(),
        token: output.token,
        user: AccountResponse::from(output.account),
    }))
}
