use crate::domain::{
    common::{AadharHomesConfig, services::Service},
    jwt::services::JwtManager,
};
use crate::infrastructure::{
    account::PostgresAccountRepository,
    crypto::Argon2Hasher,
    db::postgres::{Postgres, PostgresConfig},
    listing::PostgresListingRepository,
};

pub type AadharHomesService =
    Service<PostgresListingRepository, PostgresAccountRepository, Argon2Hasher>;

/// Wires the Postgres repositories, password hasher, and token manager into
/// the application service.
pub async fn create_service(config: AadharHomesConfig) -> Result<AadharHomesService, anyhow::Error> {
    let database_url = format!(
        "postgres://{}:{}@{}:{}/{}",
        config.database.username,
        config.database.password,
        config.database.host,
        config.database.port,
        config.database.name
    );
    let postgres = Postgres::new(PostgresConfig { database_url }).await?;

    let listing_repository = PostgresListingRepository::new(postgres.get_db());
    let account_repository = PostgresAccountRepository::new(postgres.get_db());

    Ok(Service::new(
        listing_repository,
        account_repository,
        Argon2Hasher::new(),
        JwtManager::new(&config.auth),
    ))
}
