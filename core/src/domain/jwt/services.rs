use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind,
};
use tracing::error;

use crate::domain::account::entities::Account;
use crate::domain::common::{AuthConfig, CoreError};
use crate::domain::jwt::entities::JwtClaim;

/// Issues and verifies the HS256 bearer tokens carried by every
/// authenticated request.
#[derive(Debug, Clone)]
pub struct JwtManager {
    secret: String,
    token_ttl_secs: i64,
}

impl JwtManager {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            secret: config.jwt_secret.clone(),
            token_ttl_secs: config.token_ttl_secs,
        }
    }

    pub fn issue(&self, account: &Account) -> Result<String, CoreError> {
        let claims = JwtClaim::new(account, self.token_ttl_secs);
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            error!("Failed to sign token: {}", e);
            CoreError::InternalServerError
        })
    }

    /// Checks signature and expiry; the account behind the claim is
    /// re-fetched by the caller.
    pub fn verify(&self, token: &str) -> Result<JwtClaim, CoreError> {
        let data = decode::<JwtClaim>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => CoreError::TokenExpired,
            _ => CoreError::InvalidToken,
        })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::entities::AccountRole;

    fn manager(ttl_secs: i64) -> JwtManager {
        JwtManager::new(&AuthConfig {
            jwt_secret: "test-secret".to_string(),
            token_ttl_secs: ttl_secs,
        })
    }

    fn account() -> Account {
        Account::new(
            "Admin".to_string(),
            "admin@example.com".to_string(),
            "hash".to_string(),
            AccountRole::Admin,
            true,
        )
    }

    #[test]
    fn issue_then_verify_round_trips_the_claims() {
        let manager = manager(3600);
        let account = account();
        let token = manager.issue(&account).unwrap();
        let claims = manager.verify(&token).unwrap();
        assert_eq!(claims.sub, account.id);
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.email, account.email);
    }

    #[test]
    fn expired_token_is_rejected() {
        // Past the default 60s decoding leeway.
        let manager = manager(-120);
        let token = manager.issue(&account()).unwrap();
        assert_eq!(manager.verify(&token).unwrap_err(), CoreError::TokenExpired);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let manager = manager(3600);
        let token = manager.issue(&account()).unwrap();
        let other = JwtManager::new(&AuthConfig {
            jwt_secret: "other-secret".to_string(),
            token_ttl_secs: 3600,
        });
        assert_eq!(other.verify(&token).unwrap_err(), CoreError::InvalidToken);
    }
}
