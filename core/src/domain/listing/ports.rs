use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::CoreError,
    listing::{
        entities::{Listing, ListingCategory},
        filter::{FilterSet, Ordering, Page, PageRequest},
        value_objects::{
            CreateListingInput, ListingQuery, NewLaunchStats, ProjectStats, SearchListingsInput,
            UpdateListingInput,
        },
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ListingService: Send + Sync {
    fn list_listings(
        &self,
        query: ListingQuery,
    ) -> impl Future<Output = Result<Page<Listing>, CoreError>> + Send;

    fn get_listing(
        &self,
        category: ListingCategory,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Listing>, CoreError>> + Send;

    fn create_listing(
        &self,
        identity: Identity,
        input: CreateListingInput,
    ) -> impl Future<Output = Result<Listing, CoreError>> + Send;

    fn update_listing(
        &self,
        identity: Identity,
        input: UpdateListingInput,
    ) -> impl Future<Output = Result<Listing, CoreError>> + Send;

    fn delete_listing(
        &self,
        identity: Identity,
        category: ListingCategory,
        id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn search_listings(
        &self,
        input: SearchListingsInput,
    ) -> impl Future<Output = Result<Page<Listing>, CoreError>> + Send;

    /// Active new launches with a launch date inside the next 30 days.
    fn upcoming_launches(
        &self,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Listing>, CoreError>> + Send;

    fn project_stats(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<ProjectStats, CoreError>> + Send;

    fn new_launch_stats(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<NewLaunchStats, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ListingRepository: Send + Sync {
    fn find(
        &self,
        category: ListingCategory,
        filter: FilterSet,
        order: Ordering,
        page: PageRequest,
    ) -> impl Future<Output = Result<Vec<Listing>, CoreError>> + Send;

    fn count(
        &self,
        category: ListingCategory,
        filter: FilterSet,
    ) -> impl Future<Output = Result<u64, CoreError>> + Send;

    fn find_by_id(
        &self,
        category: ListingCategory,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Listing>, CoreError>> + Send;

    /// Unique violations surface as `CoreError::Duplicate` naming the wire
    /// field ("project_url").
    fn insert(&self, listing: Listing) -> impl Future<Output = Result<Listing, CoreError>> + Send;

    fn update(&self, listing: Listing) -> impl Future<Output = Result<Listing, CoreError>> + Send;

    /// Returns whether a row was deleted.
    fn delete(
        &self,
        category: ListingCategory,
        id: Uuid,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    /// Relevance-ranked text search; returns the page plus the total match
    /// count under the same predicate.
    fn search(
        &self,
        category: ListingCategory,
        query: String,
        gate_active: bool,
        page: PageRequest,
    ) -> impl Future<Output = Result<(Vec<Listing>, u64), CoreError>> + Send;

    fn upcoming(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: u64,
    ) -> impl Future<Output = Result<Vec<Listing>, CoreError>> + Send;

    fn project_stats(&self) -> impl Future<Output = Result<ProjectStats, CoreError>> + Send;

    fn new_launch_stats(
        &self,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<NewLaunchStats, CoreError>> + Send;
}

pub trait ListingPolicy: Send + Sync {
    fn can_manage_listings(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;

    fn can_view_stats(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<bool, CoreError>> + Send;
}
