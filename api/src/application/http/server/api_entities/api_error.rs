use aadhar_homes_core::domain::common::CoreError;
use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// The uniform error envelope: a boolean discriminator and a
/// human-readable message, nothing machine-readable beyond the status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            success: false,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound(message) => ApiError::NotFound(message),
            CoreError::Validation(message) => ApiError::BadRequest(message),
            CoreError::Duplicate { field } => ApiError::BadRequest(format!("{field} already exists")),
            CoreError::Unauthorized(message) => ApiError::Unauthorized(message),
            CoreError::Forbidden(message) => ApiError::Forbidden(message),
            CoreError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid email or password".to_string())
            }
            CoreError::TokenExpired | CoreError::InvalidToken => {
                ApiError::Unauthorized("Not authorized to access this route".to_string())
            }
            CoreError::InternalServerError => {
                ApiError::InternalServerError("Server error".to_string())
            }
        }
    }
}

impl ApiError {
    /// Maps a core error, substituting the endpoint's own 500 message for
    /// unclassified failures.
    pub fn or_internal(message: &'static str) -> impl Fn(CoreError) -> ApiError {
        move |err| match err {
            CoreError::InternalServerError => ApiError::InternalServerError(message.to_string()),
            other => ApiError::from(other),
        }
    }
}

/// JSON extractor that runs the payload's validation rules and joins every
/// field message into a single 400 response.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        payload
            .validate()
            .map_err(|errors| ApiError::BadRequest(flatten_validation_errors(&errors)))?;

        Ok(ValidateJson(payload))
    }
}

fn flatten_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    messages.sort();
    messages.dedup();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_the_right_status() {
        let err = ApiError::from(CoreError::NotFound("Project not found".to_string()));
        assert_eq!(err, ApiError::NotFound("Project not found".to_string()));

        let err = ApiError::from(CoreError::Duplicate {
            field: "project_url".to_string(),
        });
        assert_eq!(err, ApiError::BadRequest("project_url already exists".to_string()));

        let err = ApiError::from(CoreError::InvalidCredentials);
        assert_eq!(
            err,
            ApiError::Unauthorized("Invalid email or password".to_string())
        );
    }

    #[test]
    fn or_internal_replaces_only_unclassified_failures() {
        let map = ApiError::or_internal("Server error while fetching projects");
        assert_eq!(
            map(CoreError::InternalServerError),
            ApiError::InternalServerError("Server error while fetching projects".to_string())
        );
        assert_eq!(
            map(CoreError::NotFound("Project not found".to_string())),
            ApiError::NotFound("Project not found".to_string())
        );
    }

    #[test]
    fn error_envelope_shape() {
        let body = ErrorResponse {
            success: false,
            message: "Invalid project ID".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid project ID");
    }
}
