use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::{
    account::ports::AccountRepository,
    authentication::value_objects::Identity,
    common::{CoreError, policies::ensure_policy, services::Service},
    crypto::ports::HasherRepository,
    listing::{
        entities::{Listing, ListingCategory},
        filter::{FilterClause, FlagField, Page},
        ports::{ListingPolicy, ListingRepository, ListingService},
        value_objects::{
            CreateListingInput, ListingQuery, NewLaunchStats, ProjectStats, SearchListingsInput,
            UpdateListingInput,
        },
    },
};

const MANAGE_DENIED: &str = "User role is not authorized to access this route";

/// Days ahead considered "upcoming" for the launch calendar.
const UPCOMING_WINDOW_DAYS: i64 = 30;

impl<L, A, H> ListingService for Service<L, A, H>
where
    L: ListingRepository,
    A: AccountRepository,
    H: HasherRepository,
{
    async fn list_listings(&self, query: ListingQuery) -> Result<Page<Listing>, CoreError> {
        let mut filter = query.filter;
        // Public new-launch reads only ever see active records; projects
        // have no such gate.
        if query.category == ListingCategory::NewLaunch {
            filter.push(FilterClause::Is {
                field: FlagField::IsActive,
                value: true,
            });
        }

        let items = self
            .listing_repository
            .find(query.category, filter.clone(), query.order, query.page)
            .await?;
        let total = self.listing_repository.count(query.category, filter).await?;

        Ok(Page::new(items, total, &query.page))
    }

    async fn get_listing(
        &self,
        category: ListingCategory,
        id: Uuid,
    ) -> Result<Option<Listing>, CoreError> {
        self.listing_repository.find_by_id(category, id).await
    }

    async fn create_listing(
        &self,
        identity: Identity,
        input: CreateListingInput,
    ) -> Result<Listing, CoreError> {
        ensure_policy(
            self.policy.can_manage_listings(identity).await,
            MANAGE_DENIED,
        )?;

        let listing = Listing::new(input)?;
        self.listing_repository.insert(listing).await
    }

    async fn update_listing(
        &self,
        identity: Identity,
        input: UpdateListingInput,
    ) -> Result<Listing, CoreError> {
        ensure_policy(
            self.policy.can_manage_listings(identity).await,
            MANAGE_DENIED,
        )?;

        let mut listing = self
            .listing_repository
            .find_by_id(input.category, input.id)
            .await?
            .ok_or_else(|| CoreError::NotFound(input.category.not_found_message()))?;

        listing.apply(input)?;
        self.listing_repository.update(listing).await
    }

    async fn delete_listing(
        &self,
        identity: Identity,
        category: ListingCategory,
        id: Uuid,
    ) -> Result<(), CoreError> {
        ensure_policy(
            self.policy.can_manage_listings(identity).await,
            MANAGE_DENIED,
        )?;

        let deleted = self.listing_repository.delete(category, id).await?;
        if !deleted {
            return Err(CoreError::NotFound(category.not_found_message()));
        }
        Ok(())
    }

    async fn search_listings(&self, input: SearchListingsInput) -> Result<Page<Listing>, CoreError> {
        if input.query.is_empty() {
            return Err(CoreError::Validation("Search query is required".to_string()));
        }

        let gate_active = input.category == ListingCategory::NewLaunch;
        let (items, total) = self
            .listing_repository
            .search(input.category, input.query, gate_active, input.page)
            .await?;

        Ok(Page::new(items, total, &input.page))
    }

    async fn upcoming_launches(&self, limit: u64) -> Result<Vec<Listing>, CoreError> {
        let now = Utc::now();
        let horizon = now + Duration::days(UPCOMING_WINDOW_DAYS);
        self.listing_repository.upcoming(now, horizon, limit).await
    }

    async fn project_stats(&self, identity: Identity) -> Result<ProjectStats, CoreError> {
        ensure_policy(self.policy.can_view_stats(identity).await, MANAGE_DENIED)?;
        self.listing_repository.project_stats().await
    }

    async fn new_launch_stats(&self, identity: Identity) -> Result<NewLaunchStats, CoreError> {
        ensure_policy(self.policy.can_view_stats(identity).await, MANAGE_DENIED)?;
        self.listing_repository.new_launch_stats(Utc::now()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        account::{
            entities::{Account, AccountRole},
            ports::MockAccountRepository,
        },
        common::AuthConfig,
        crypto::ports::MockHasherRepository,
        jwt::services::JwtManager,
        listing::{
            filter::{FilterSet, Ordering, PageRequest},
            ports::MockListingRepository,
        },
    };

    type TestService =
        Service<MockListingRepository, MockAccountRepository, MockHasherRepository>;

    fn service(listings: MockListingRepository) -> TestService {
        Service::new(
            listings,
            MockAccountRepository::new(),
            MockHasherRepository::new(),
            JwtManager::new(&AuthConfig {
                jwt_secret: "test-secret".to_string(),
                token_ttl_secs: 3600,
            }),
        )
    }

    fn identity(role: AccountRole) -> Identity {
        Identity::new(Account::new(
            "Someone".to_string(),
            "someone@example.com".to_string(),
            "hash".to_string(),
            role,
            false,
        ))
    }

    fn query(category: ListingCategory) -> ListingQuery {
        ListingQuery {
            category,
            filter: FilterSet::new(),
            order: Ordering::default_for(category),
            page: PageRequest::default(),
        }
    }

    #[tokio::test]
    async fn new_launch_listing_always_gates_on_is_active() {
        let mut listings = MockListingRepository::new();
        listings
            .expect_find()
            .withf(|_, filter, _, _| {
                filter.clauses().contains(&FilterClause::Is {
                    field: FlagField::IsActive,
                    value: true,
                })
            })
            .returning(|_, _, _, _| Box::pin(async { Ok(vec![]) }));
        listings.expect_count().returning(|_, _| Ok(0));

        let page = service(listings)
            .list_listings(query(ListingCategory::NewLaunch))
            .await
            .unwrap();
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages(), 0);
    }

    #[tokio::test]
    async fn project_listing_has_no_visibility_gate() {
        let mut listings = MockListingRepository::new();
        listings
            .expect_find()
            .withf(|_, filter, _, _| filter.is_empty())
            .returning(|_, _, _, _| Box::pin(async { Ok(vec![]) }));
        listings.expect_count().returning(|_, _| Ok(0));

        service(listings)
            .list_listings(query(ListingCategory::Project))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn create_requires_the_admin_role() {
        let service = service(MockListingRepository::new());
        let err = service
            .create_listing(
                identity(AccountRole::User),
                CreateListingInput {
                    name: "Skyline Towers".to_string(),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::Forbidden(MANAGE_DENIED.to_string()));
    }

    #[tokio::test]
    async fn delete_of_a_missing_listing_is_not_found() {
        let mut listings = MockListingRepository::new();
        listings.expect_delete().returning(|_, _| Ok(false));

        let err = service(listings)
            .delete_listing(
                identity(AccountRole::Admin),
                ListingCategory::NewLaunch,
                Uuid::nil(),
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::NotFound("New launch project not found".to_string())
        );
    }

    #[tokio::test]
    async fn update_of_a_missing_listing_is_not_found() {
        let mut listings = MockListingRepository::new();
        listings.expect_find_by_id().returning(|_, _| Ok(None));

        let err = service(listings)
            .update_listing(
                identity(AccountRole::Admin),
                UpdateListingInput {
                    id: Uuid::nil(),
                    category: ListingCategory::Project,
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, CoreError::NotFound("Project not found".to_string()));
    }

    #[tokio::test]
    async fn empty_search_query_is_rejected_before_the_search_path() {
        let service = service(MockListingRepository::new());
        let err = service
            .search_listings(SearchListingsInput {
                category: ListingCategory::Project,
                query: String::new(),
                page: PageRequest::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::Validation("Search query is required".to_string())
        );
    }

    #[tokio::test]
    async fn search_gates_new_launches_but_not_projects() {
        let mut listings = MockListingRepository::new();
        listings
            .expect_search()
            .withf(|category, _, gate_active, _| {
                *gate_active == (*category == ListingCategory::NewLaunch)
            })
            .returning(|_, _, _, _| Ok((vec![], 0)));

        let service = service(listings);
        for category in [ListingCategory::Project, ListingCategory::NewLaunch] {
            let page = service
                .search_listings(SearchListingsInput {
                    category,
                    query: "metro".to_string(),
                    page: PageRequest::default(),
                })
                .await
                .unwrap();
            assert_eq!(page.total, 0);
            assert!(page.items.is_empty());
        }
    }

    #[tokio::test]
    async fn stats_require_the_admin_role() {
        let service = service(MockListingRepository::new());
        let err = service
            .project_stats(identity(AccountRole::User))
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::Forbidden(MANAGE_DENIED.to_string()));
    }
}
