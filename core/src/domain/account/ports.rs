use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    account::{
        entities::Account,
        value_objects::{AuthOutput, LoginInput, RegisterAccountInput},
    },
    authentication::value_objects::Identity,
    common::CoreError,
};

#[cfg_attr(test, mockall::automock)]
pub trait AuthService: Send + Sync {
    fn register(
        &self,
        identity: Option<Identity>,
        input: RegisterAccountInput,
    ) -> impl Future<Output = Result<AuthOutput, CoreError>> + Send;

    fn login(&self, input: LoginInput) -> impl Future<Output = Result<AuthOutput, CoreError>> + Send;

    /// Verifies a bearer token and resolves the caller behind it.
    fn authorize(&self, token: String) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait AccountRepository: Send + Sync {
    fn count(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn find_by_email(
        &self,
        email: String,
    ) -> impl Future<Output = Result<Option<Account>, CoreError>> + Send;

    fn find_by_id(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Account>, CoreError>> + Send;

    /// Unique violations surface as `CoreError::Duplicate` with the field
    /// set to "email" or "bootstrap".
    fn insert(&self, account: Account) -> impl Future<Output = Result<Account, CoreError>> + Send;

    fn update_last_login(
        &self,
        id: Uuid,
        when: DateTime<Utc>,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
