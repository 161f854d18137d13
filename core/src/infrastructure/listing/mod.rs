pub mod mappers;
pub mod repositories;

pub use repositories::listing_repository::PostgresListingRepository;
