use crate::domain::{
    account::ports::AccountRepository, common::policies::DefaultPolicy,
    crypto::ports::HasherRepository, jwt::services::JwtManager, listing::ports::ListingRepository,
};

/// Application service aggregating every repository port. The HTTP layer
/// only ever talks to this type through the `ListingService` and
/// `AuthService` traits.
#[derive(Debug, Clone)]
pub struct Service<L, A, H>
where
    L: ListingRepository,
    A: AccountRepository,
    H: HasherRepository,
{
    pub(crate) listing_repository: L,
    pub(crate) account_repository: A,
    pub(crate) hasher: H,
    pub(crate) jwt: JwtManager,
    pub(crate) policy: DefaultPolicy,
}

impl<L, A, H> Service<L, A, H>
where
    L: ListingRepository,
    A: AccountRepository,
    H: HasherRepository,
{
    pub fn new(listing_repository: L, account_repository: A, hasher: H, jwt: JwtManager) -> Self {
        Self {
            listing_repository,
            account_repository,
            hasher,
            jwt,
            policy: DefaultPolicy,
        }
    }
}
