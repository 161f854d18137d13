use serde::{Deserialize, Serialize};

use crate::domain::account::entities::Account;

/// The verified caller attached to a request after token validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub account: Account,
}

impl Identity {
    pub fn new(account: Account) -> Self {
        Self { account }
    }

    pub fn is_admin(&self) -> bool {
        self.account.is_admin()
    }
}
