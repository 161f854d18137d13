use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::listing::entities::{
    AboutSection, BhkDetail, HighlightPoint, ListingCategory, MediaAsset,
};
use crate::domain::listing::filter::{FilterSet, Ordering, PageRequest};

/// Fully resolved read query: category scope, conjunction of filter
/// clauses, ordering, and page window.
#[derive(Debug, Clone)]
pub struct ListingQuery {
    pub category: ListingCategory,
    pub filter: FilterSet,
    pub order: Ordering,
    pub page: PageRequest,
}

#[derive(Debug, Clone)]
pub struct SearchListingsInput {
    pub category: ListingCategory,
    pub query: String,
    pub page: PageRequest,
}

#[derive(Debug, Clone, Default)]
pub struct CreateListingInput {
    pub category: ListingCategory,
    pub name: String,
    pub address: String,
    pub property_type: String,
    pub builder_name: String,
    pub city: String,
    pub slug: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub luxury: Option<String>,
    pub spotlight: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub bhk_details: Option<Vec<BhkDetail>>,
    pub highlights: Option<Vec<HighlightPoint>>,
    pub about_sections: Option<Vec<AboutSection>>,
    pub amenities: Option<Vec<String>>,
    pub connectivity: Option<Vec<String>>,
    pub entertainment: Option<Vec<String>>,
    pub business: Option<Vec<String>>,
    pub education: Option<Vec<String>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub bg_content: Option<String>,
    pub rera_number: Option<String>,
    pub payment_plan: Option<String>,
    pub about_developer: Option<String>,
    pub overview: Option<String>,
    pub front_image: Option<MediaAsset>,
    pub thumbnail_image: Option<MediaAsset>,
    pub logo: Option<MediaAsset>,
    pub location_image: Option<MediaAsset>,
    pub highlight_image: Option<MediaAsset>,
    pub master_plan_image: Option<MediaAsset>,
    pub brochure: Option<MediaAsset>,
    pub gallery: Option<Vec<MediaAsset>>,
    pub floorplan_images: Option<Vec<MediaAsset>>,
    pub tower_count: Option<i32>,
    pub total_units: Option<i64>,
    pub total_land_area: Option<f64>,
    pub contact_number: Option<i64>,
    pub launching_date: Option<DateTime<Utc>>,
    pub possession_date: Option<DateTime<Utc>>,
    pub priority: Option<i32>,
    pub is_active: Option<bool>,
    pub pre_booking_amount: Option<i64>,
    pub early_bird_discount: Option<f64>,
    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateListingInput {
    pub id: Uuid,
    pub category: ListingCategory,
    pub name: Option<String>,
    pub address: Option<String>,
    pub property_type: Option<String>,
    pub builder_name: Option<String>,
    pub city: Option<String>,
    pub slug: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub luxury: Option<String>,
    pub spotlight: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub bhk_details: Option<Vec<BhkDetail>>,
    pub highlights: Option<Vec<HighlightPoint>>,
    pub about_sections: Option<Vec<AboutSection>>,
    pub amenities: Option<Vec<String>>,
    pub connectivity: Option<Vec<String>>,
    pub entertainment: Option<Vec<String>>,
    pub business: Option<Vec<String>>,
    pub education: Option<Vec<String>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub bg_content: Option<String>,
    pub rera_number: Option<String>,
    pub payment_plan: Option<String>,
    pub about_developer: Option<String>,
    pub overview: Option<String>,
    pub front_image: Option<MediaAsset>,
    pub thumbnail_image: Option<MediaAsset>,
    pub logo: Option<MediaAsset>,
    pub location_image: Option<MediaAsset>,
    pub highlight_image: Option<MediaAsset>,
    pub master_plan_image: Option<MediaAsset>,
    pub brochure: Option<MediaAsset>,
    pub gallery: Option<Vec<MediaAsset>>,
    pub floorplan_images: Option<Vec<MediaAsset>>,
    pub tower_count: Option<i32>,
    pub total_units: Option<i64>,
    pub total_land_area: Option<f64>,
    pub contact_number: Option<i64>,
    pub launching_date: Option<DateTime<Utc>>,
    pub possession_date: Option<DateTime<Utc>>,
    pub priority: Option<i32>,
    pub is_active: Option<bool>,
    pub pre_booking_amount: Option<i64>,
    pub early_bird_discount: Option<f64>,
    pub registration_start: Option<DateTime<Utc>>,
    pub registration_end: Option<DateTime<Utc>>,
}

/// Aggregate figures for the project catalogue. Serialized field names are
/// part of the admin dashboard contract, breakdown rows keep the `_id`
/// grouping key of the previous implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectStatsOverview {
    #[serde(rename = "totalProjects")]
    pub total_projects: i64,
    #[serde(rename = "avgMinPrice")]
    pub avg_min_price: f64,
    #[serde(rename = "avgMaxPrice")]
    pub avg_max_price: f64,
    #[serde(rename = "totalUnits")]
    pub total_units: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewLaunchStatsOverview {
    #[serde(rename = "totalNewLaunches")]
    pub total_new_launches: i64,
    #[serde(rename = "activeNewLaunches")]
    pub active_new_launches: i64,
    #[serde(rename = "avgMinPrice")]
    pub avg_min_price: f64,
    #[serde(rename = "avgMaxPrice")]
    pub avg_max_price: f64,
    #[serde(rename = "totalUnits")]
    pub total_units: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StatusCount {
    #[serde(rename = "_id")]
    pub status: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CityCount {
    #[serde(rename = "_id")]
    pub city: String,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectStats {
    pub overview: ProjectStatsOverview,
    #[serde(rename = "byStatus")]
    pub by_status: Vec<StatusCount>,
    #[serde(rename = "byCity")]
    pub by_city: Vec<CityCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewLaunchStats {
    pub overview: NewLaunchStatsOverview,
    #[serde(rename = "byStatus")]
    pub by_status: Vec<StatusCount>,
    #[serde(rename = "upcomingCount")]
    pub upcoming_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_breakdowns_keep_the_legacy_grouping_key() {
        let row = StatusCount {
            status: "Launched".to_string(),
            count: 3,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["_id"], "Launched");
        assert_eq!(json["count"], 3);
    }
}
