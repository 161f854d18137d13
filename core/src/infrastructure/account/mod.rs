pub mod mappers;
pub mod repositories;

pub use repositories::account_repository::PostgresAccountRepository;
