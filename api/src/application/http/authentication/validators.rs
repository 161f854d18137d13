use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterValidator {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name is required")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "Email is required"),
        email(message = "Please provide a valid email")
    )]
    pub email: Option<String>,

    #[validate(
        required(message = "Password is required"),
        length(min = 6, message = "Password must be at least 6 characters")
    )]
    pub password: Option<String>,

    pub role: Option<String>,
}

/// Login has a single combined presence message, so it skips the field
/// validators and is checked in the handler.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    pub email: Option<String>,

    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_rejects_short_passwords() {
        let payload: RegisterValidator = serde_json::from_value(serde_json::json!({
            "name": "Admin",
            "email": "admin@example.com",
            "password": "short",
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        let messages: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|errors| {
                errors
                    .iter()
                    .filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
            })
            .collect();
        assert!(messages.contains(&"Password must be at least 6 characters".to_string()));
    }

    #[test]
    fn register_rejects_malformed_emails() {
        let payload: RegisterValidator = serde_json::from_value(serde_json::json!({
            "name": "Admin",
            "email": "not-an-email",
            "password": "hunter42",
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }
}
