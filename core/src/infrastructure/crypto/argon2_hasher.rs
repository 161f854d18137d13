use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use tracing::error;

use crate::domain::{common::CoreError, crypto::ports::HasherRepository};

#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2Hasher {
    async fn hash_password(&self, password: String) -> Result<String, CoreError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                error!("Failed to hash password: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn verify_password(&self, password: String, hash: String) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(&hash).map_err(|e| {
            error!("Stored password hash is malformed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
