use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::entities::Account;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaim {
    /// Account id.
    pub sub: Uuid,
    pub role: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

impl JwtClaim {
    pub fn new(account: &Account, ttl_secs: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: account.id,
            role: account.role.to_string(),
            email: account.email.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_secs)).timestamp(),
        }
    }
}
