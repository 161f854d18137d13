use crate::domain::account::entities::Account;

#[derive(Debug, Clone)]
pub struct RegisterAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Requested role; ignored for the bootstrap account, which is always
    /// granted admin.
    pub role: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AuthOutput {
    pub account: Account,
    pub token: String,
}
