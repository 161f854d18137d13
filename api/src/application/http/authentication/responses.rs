use aadhar_homes_core::domain::account::entities::Account;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Sanitized account representation: never carries the password hash.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AccountResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(rename = "lastLogin", skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
            role: account.role.to_string(),
            last_login: account.last_login_at,
            created_at: account.created_at,
        }
    }
}

/// Register/login envelope: message, bearer token, and the account.
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthSessionResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub user: AccountResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MeResponse {
    pub success: bool,
    pub user: AccountResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use aadhar_homes_core::domain::account::entities::AccountRole;

    #[test]
    fn account_response_never_leaks_the_hash() {
        let account = Account::new(
            "Admin".to_string(),
            "admin@example.com".to_string(),
            "super-secret-hash".to_string(),
            AccountRole::Admin,
            true,
        );
        let json = serde_json::to_value(AccountResponse::from(account)).unwrap();
        assert_eq!(json["role"], "admin");
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("super-secret-hash"));
        // No login yet, so the field is omitted entirely.
        assert!(json.get("lastLogin").is_none());
    }
}
