use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AccountRole {
    Admin,
    #[default]
    User,
}

impl fmt::Display for AccountRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountRole::Admin => f.write_str("admin"),
            AccountRole::User => f.write_str("user"),
        }
    }
}

impl FromStr for AccountRole {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(AccountRole::Admin),
            "user" => Ok(AccountRole::User),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: AccountRole,
    /// Set on the single account created while the store was empty. A
    /// partial unique index over this flag makes the bootstrap claim
    /// atomic: two concurrent first registrations cannot both win.
    pub is_bootstrap: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        name: String,
        email: String,
        password_hash: String,
        role: AccountRole,
        is_bootstrap: bool,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            name,
            email,
            password_hash,
            role,
            is_bootstrap,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == AccountRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_labels_round_trip() {
        assert_eq!(AccountRole::Admin.to_string(), "admin");
        assert_eq!("admin".parse(), Ok(AccountRole::Admin));
        assert_eq!("user".parse(), Ok(AccountRole::User));
        assert!("root".parse::<AccountRole>().is_err());
    }

    #[test]
    fn new_account_has_no_login_yet() {
        let account = Account::new(
            "Admin".to_string(),
            "admin@example.com".to_string(),
            "hash".to_string(),
            AccountRole::Admin,
            true,
        );
        assert!(account.last_login_at.is_none());
        assert!(account.is_admin());
    }
}
