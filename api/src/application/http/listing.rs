//! Shared wire representation of a listing.
//!
//! Field names keep the contract of the previous backend (`projectName`,
//! `project_url`, `project_Status`, ...) so existing clients keep working,
//! including the serialized virtuals `priceRange` and `launchStatus`.

use aadhar_homes_core::domain::listing::entities::{
    AboutSection, BhkDetail, HighlightPoint, Listing, ListingCategory, ListingDetails, MediaAsset,
};
use aadhar_homes_core::domain::listing::filter::Page;
use aadhar_homes_core::domain::listing::value_objects::{CreateListingInput, UpdateListingInput};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Optional fields shared by every create/update payload. Flattened into
/// the per-resource validators.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ListingExtras {
    #[serde(rename = "project_discripation")]
    pub description: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub luxury: Option<String>,
    pub spotlight: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<i64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<i64>,
    #[serde(rename = "BhK_Details")]
    pub bhk_details: Option<Vec<BhkDetail>>,
    #[serde(rename = "highlight")]
    pub highlights: Option<Vec<HighlightPoint>>,
    #[serde(rename = "about_project")]
    pub about_sections: Option<Vec<AboutSection>>,
    #[serde(rename = "Amenities")]
    pub amenities: Option<Vec<String>>,
    #[serde(rename = "projectRedefine_Connectivity")]
    pub connectivity: Option<Vec<String>>,
    #[serde(rename = "projectRedefine_Entertainment")]
    pub entertainment: Option<Vec<String>>,
    #[serde(rename = "projectRedefine_Business")]
    pub business: Option<Vec<String>>,
    #[serde(rename = "projectRedefine_Education")]
    pub education: Option<Vec<String>>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    #[serde(rename = "projectBgContent")]
    pub bg_content: Option<String>,
    #[serde(rename = "projectReraNo")]
    pub rera_number: Option<String>,
    #[serde(rename = "paymentPlan")]
    pub payment_plan: Option<String>,
    #[serde(rename = "AboutDeveloper")]
    pub about_developer: Option<String>,
    #[serde(rename = "projectOverview")]
    pub overview: Option<String>,
    #[serde(rename = "frontImage")]
    pub front_image: Option<MediaAsset>,
    #[serde(rename = "thumbnailImage")]
    pub thumbnail_image: Option<MediaAsset>,
    pub logo: Option<MediaAsset>,
    #[serde(rename = "project_locationImage")]
    pub location_image: Option<MediaAsset>,
    #[serde(rename = "highlightImage")]
    pub highlight_image: Option<MediaAsset>,
    #[serde(rename = "projectMaster_plan")]
    pub master_plan_image: Option<MediaAsset>,
    #[serde(rename = "project_Brochure")]
    pub brochure: Option<MediaAsset>,
    #[serde(rename = "projectGallery")]
    pub gallery: Option<Vec<MediaAsset>>,
    #[serde(rename = "project_floorplan_Image")]
    pub floorplan_images: Option<Vec<MediaAsset>>,
    #[serde(rename = "towerNumber")]
    pub tower_count: Option<i32>,
    #[serde(rename = "totalUnit")]
    pub total_units: Option<i64>,
    #[serde(rename = "totalLandArea")]
    pub total_land_area: Option<f64>,
    #[serde(rename = "mobileNumber")]
    pub contact_number: Option<i64>,
    #[serde(rename = "possessionDate")]
    pub possession_date: Option<DateTime<Utc>>,
}

impl ListingExtras {
    pub fn into_create_input(self, category: ListingCategory) -> CreateListingInput {
        CreateListingInput {
            category,
            description: self.description,
            state: self.state,
            country: self.country,
            luxury: self.luxury,
            spotlight: self.spotlight,
            min_price: self.min_price,
            max_price: self.max_price,
            bhk_details: self.bhk_details,
            highlights: self.highlights,
            about_sections: self.about_sections,
            amenities: self.amenities,
            connectivity: self.connectivity,
            entertainment: self.entertainment,
            business: self.business,
            education: self.education,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            bg_content: self.bg_content,
            rera_number: self.rera_number,
            payment_plan: self.payment_plan,
            about_developer: self.about_developer,
            overview: self.overview,
            front_image: self.front_image,
            thumbnail_image: self.thumbnail_image,
            logo: self.logo,
            location_image: self.location_image,
            highlight_image: self.highlight_image,
            master_plan_image: self.master_plan_image,
            brochure: self.brochure,
            gallery: self.gallery,
            floorplan_images: self.floorplan_images,
            tower_count: self.tower_count,
            total_units: self.total_units,
            total_land_area: self.total_land_area,
            contact_number: self.contact_number,
            possession_date: self.possession_date,
            ..Default::default()
        }
    }

    pub fn into_update_input(self, id: Uuid, category: ListingCategory) -> UpdateListingInput {
        UpdateListingInput {
            id,
            category,
            description: self.description,
            state: self.state,
            country: self.country,
            luxury: self.luxury,
            spotlight: self.spotlight,
            min_price: self.min_price,
            max_price: self.max_price,
            bhk_details: self.bhk_details,
            highlights: self.highlights,
            about_sections: self.about_sections,
            amenities: self.amenities,
            connectivity: self.connectivity,
            entertainment: self.entertainment,
            business: self.business,
            education: self.education,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
            bg_content: self.bg_content,
            rera_number: self.rera_number,
            payment_plan: self.payment_plan,
            about_developer: self.about_developer,
            overview: self.overview,
            front_image: self.front_image,
            thumbnail_image: self.thumbnail_image,
            logo: self.logo,
            location_image: self.location_image,
            highlight_image: self.highlight_image,
            master_plan_image: self.master_plan_image,
            brochure: self.brochure,
            gallery: self.gallery,
            floorplan_images: self.floorplan_images,
            tower_count: self.tower_count,
            total_units: self.total_units,
            total_land_area: self.total_land_area,
            contact_number: self.contact_number,
            possession_date: self.possession_date,
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListingResponse {
    pub id: Uuid,
    #[serde(rename = "schema_type")]
    pub schema_type: String,
    #[serde(rename = "project_url", skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(rename = "projectName")]
    pub name: String,
    #[serde(rename = "projectAddress")]
    pub address: String,
    #[serde(rename = "project_discripation", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(rename = "builderName")]
    pub builder_name: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub country: String,
    pub luxury: String,
    pub spotlight: String,
    #[serde(rename = "project_Status")]
    pub status: String,
    #[serde(rename = "minPrice", skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(rename = "maxPrice", skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(rename = "priceRange")]
    pub price_range: String,
    #[serde(rename = "BhK_Details")]
    pub bhk_details: Vec<BhkDetail>,
    #[serde(rename = "highlight")]
    pub highlights: Vec<HighlightPoint>,
    #[serde(rename = "about_project")]
    pub about_sections: Vec<AboutSection>,
    #[serde(rename = "Amenities")]
    pub amenities: Vec<String>,
    #[serde(rename = "projectRedefine_Connectivity")]
    pub connectivity: Vec<String>,
    #[serde(rename = "projectRedefine_Entertainment")]
    pub entertainment: Vec<String>,
    #[serde(rename = "projectRedefine_Business")]
    pub business: Vec<String>,
    #[serde(rename = "projectRedefine_Education")]
    pub education: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(rename = "projectBgContent", skip_serializing_if = "Option::is_none")]
    pub bg_content: Option<String>,
    #[serde(rename = "projectReraNo", skip_serializing_if = "Option::is_none")]
    pub rera_number: Option<String>,
    #[serde(rename = "paymentPlan", skip_serializing_if = "Option::is_none")]
    pub payment_plan: Option<String>,
    #[serde(rename = "AboutDeveloper", skip_serializing_if = "Option::is_none")]
    pub about_developer: Option<String>,
    #[serde(rename = "projectOverview", skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(rename = "frontImage", skip_serializing_if = "Option::is_none")]
    pub front_image: Option<MediaAsset>,
    #[serde(rename = "thumbnailImage", skip_serializing_if = "Option::is_none")]
    pub thumbnail_image: Option<MediaAsset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<MediaAsset>,
    #[serde(rename = "project_locationImage", skip_serializing_if = "Option::is_none")]
    pub location_image: Option<MediaAsset>,
    #[serde(rename = "highlightImage", skip_serializing_if = "Option::is_none")]
    pub highlight_image: Option<MediaAsset>,
    #[serde(rename = "projectMaster_plan", skip_serializing_if = "Option::is_none")]
    pub master_plan_image: Option<MediaAsset>,
    #[serde(rename = "project_Brochure", skip_serializing_if = "Option::is_none")]
    pub brochure: Option<MediaAsset>,
    #[serde(rename = "projectGallery")]
    pub gallery: Vec<MediaAsset>,
    #[serde(rename = "project_floorplan_Image")]
    pub floorplan_images: Vec<MediaAsset>,
    #[serde(rename = "towerNumber", skip_serializing_if = "Option::is_none")]
    pub tower_count: Option<i32>,
    #[serde(rename = "totalUnit", skip_serializing_if = "Option::is_none")]
    pub total_units: Option<i64>,
    #[serde(rename = "totalLandArea", skip_serializing_if = "Option::is_none")]
    pub total_land_area: Option<f64>,
    #[serde(rename = "mobileNumber", skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<i64>,
    #[serde(rename = "launchingDate", skip_serializing_if = "Option::is_none")]
    pub launching_date: Option<DateTime<Utc>>,
    #[serde(rename = "possessionDate", skip_serializing_if = "Option::is_none")]
    pub possession_date: Option<DateTime<Utc>>,
    #[serde(rename = "isActive", skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(rename = "preBookingAmount", skip_serializing_if = "Option::is_none")]
    pub pre_booking_amount: Option<i64>,
    #[serde(rename = "earlyBirdDiscount", skip_serializing_if = "Option::is_none")]
    pub early_bird_discount: Option<f64>,
    #[serde(rename = "registrationStartDate", skip_serializing_if = "Option::is_none")]
    pub registration_start: Option<DateTime<Utc>>,
    #[serde(rename = "registrationEndDate", skip_serializing_if = "Option::is_none")]
    pub registration_end: Option<DateTime<Utc>>,
    #[serde(rename = "launchStatus", skip_serializing_if = "Option::is_none")]
    pub launch_status: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

fn launch_status(launching_date: Option<DateTime<Utc>>) -> String {
    match launching_date {
        None => "TBA".to_string(),
        Some(date) => {
            let now = Utc::now();
            if date > now {
                let days = ((date - now).num_seconds() as u64).div_ceil(86_400);
                format!("Launching in {days} days")
            } else {
                "Launched".to_string()
            }
        }
    }
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        let price_range = listing.price_range();
        let status = listing.details.status_label();
        let schema_type = listing.category().as_str().to_string();

        let (
            is_active,
            priority,
            pre_booking_amount,
            early_bird_discount,
            registration_start,
            registration_end,
            launch_status,
        ) = match listing.details {
            ListingDetails::Project { .. } => (None, None, None, None, None, None, None),
            ListingDetails::NewLaunch {
                priority,
                is_active,
                pre_booking_amount,
                early_bird_discount,
                registration_start,
                registration_end,
                ..
            } => (
                Some(is_active),
                Some(priority),
                pre_booking_amount,
                early_bird_discount,
                registration_start,
                registration_end,
                Some(self::launch_status(listing.launching_date)),
            ),
        };

        Self {
            id: listing.id,
            schema_type,
            slug: listing.slug,
            name: listing.name,
            address: listing.address,
            description: listing.description,
            property_type: listing.property_type,
            builder_name: listing.builder_name,
            city: listing.city,
            state: listing.state,
            country: listing.country,
            luxury: listing.luxury,
            spotlight: listing.spotlight,
            status,
            min_price: listing.min_price,
            max_price: listing.max_price,
            price_range,
            bhk_details: listing.bhk_details,
            highlights: listing.highlights,
            about_sections: listing.about_sections,
            amenities: listing.amenities,
            connectivity: listing.connectivity,
            entertainment: listing.entertainment,
            business: listing.business,
            education: listing.education,
            meta_title: listing.meta_title,
            meta_description: listing.meta_description,
            bg_content: listing.bg_content,
            rera_number: listing.rera_number,
            payment_plan: listing.payment_plan,
            about_developer: listing.about_developer,
            overview: listing.overview,
            front_image: listing.front_image,
            thumbnail_image: listing.thumbnail_image,
            logo: listing.logo,
            location_image: listing.location_image,
            highlight_image: listing.highlight_image,
            master_plan_image: listing.master_plan_image,
            brochure: listing.brochure,
            gallery: listing.gallery,
            floorplan_images: listing.floorplan_images,
            tower_count: listing.tower_count,
            total_units: listing.total_units,
            total_land_area: listing.total_land_area,
            contact_number: listing.contact_number,
            launching_date: listing.launching_date,
            possession_date: listing.possession_date,
            is_active,
            priority,
            pre_booking_amount,
            early_bird_discount,
            registration_start,
            registration_end,
            launch_status,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListingListResponse {
    pub success: bool,
    pub count: usize,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u64,
    #[serde(rename = "currentPage")]
    pub current_page: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    pub data: Vec<ListingResponse>,
}

impl ListingListResponse {
    pub fn from_page(page: Page<Listing>, query: Option<String>) -> Self {
        let total_pages = page.total_pages();
        let data: Vec<ListingResponse> = page.items.into_iter().map(ListingResponse::from).collect();

        Self {
            success: true,
            count: data.len(),
            total: page.total,
            total_pages,
            current_page: page.page,
            query,
            data,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListingItemResponse {
    pub success: bool,
    pub data: ListingResponse,
}

impl ListingItemResponse {
    pub fn new(listing: Listing) -> Self {
        Self {
            success: true,
            data: listing.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListingMutationResponse {
    pub success: bool,
    pub message: String,
    pub data: ListingResponse,
}

impl ListingMutationResponse {
    pub fn new(message: &str, listing: Listing) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: listing.into(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ListingDeleteResponse {
    pub success: bool,
    pub message: String,
    pub data: serde_json::Value,
}

impl ListingDeleteResponse {
    pub fn new(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: serde_json::json!({}),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpcomingLaunchesResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<ListingResponse>,
}

impl UpcomingLaunchesResponse {
    pub fn new(listings: Vec<Listing>) -> Self {
        let data: Vec<ListingResponse> = listings.into_iter().map(ListingResponse::from).collect();
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aadhar_homes_core::domain::listing::filter::PageRequest;
    use chrono::Duration;

    fn project() -> Listing {
        Listing::new(CreateListingInput {
            name: "Skyline Towers".to_string(),
            address: "12 MG Road".to_string(),
            property_type: "Residential".to_string(),
            builder_name: "Acme Builders".to_string(),
            city: "Pune".to_string(),
            min_price: Some(5_000_000),
            max_price: Some(15_000_000),
            ..Default::default()
        })
        .unwrap()
    }

    fn new_launch(launching_date: DateTime<Utc>) -> Listing {
        Listing::new(CreateListingInput {
            category: ListingCategory::NewLaunch,
            name: "Metro Heights".to_string(),
            address: "Old Airport Road".to_string(),
            property_type: "Residential".to_string(),
            builder_name: "Acme Builders".to_string(),
            city: "Pune".to_string(),
            launching_date: Some(launching_date),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn project_serializes_with_the_legacy_wire_names() {
        let json = serde_json::to_value(ListingResponse::from(project())).unwrap();
        assert_eq!(json["projectName"], "Skyline Towers");
        assert_eq!(json["project_url"], "skyline-towers");
        assert_eq!(json["project_Status"], "Under Construction");
        assert_eq!(json["builderName"], "Acme Builders");
        assert_eq!(json["schema_type"], "project");
        assert_eq!(json["priceRange"], "₹5000000 - ₹15000000");
        // Launch-only fields never appear on projects.
        assert!(json.get("isActive").is_none());
        assert!(json.get("priority").is_none());
        assert!(json.get("launchStatus").is_none());
    }

    #[test]
    fn new_launch_carries_its_extra_fields() {
        let json = serde_json::to_value(ListingResponse::from(new_launch(
            Utc::now() - Duration::days(2),
        )))
        .unwrap();
        assert_eq!(json["schema_type"], "newlaunch");
        assert_eq!(json["isActive"], true);
        assert_eq!(json["priority"], 0);
        assert_eq!(json["launchStatus"], "Launched");
        assert_eq!(json["priceRange"], "Price on Request");
    }

    #[test]
    fn launch_status_counts_days_until_launch() {
        let status = launch_status(Some(Utc::now() + Duration::days(3)));
        assert_eq!(status, "Launching in 3 days");
        assert_eq!(launch_status(None), "TBA");
    }

    #[test]
    fn list_envelope_reports_pagination() {
        let request = PageRequest::new(Some(2), Some(10));
        let page = Page::new(vec![project()], 11, &request);
        let json =
            serde_json::to_value(ListingListResponse::from_page(page, Some("sky".to_string())))
                .unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 1);
        assert_eq!(json["total"], 11);
        assert_eq!(json["totalPages"], 2);
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["query"], "sky");
    }

    #[test]
    fn delete_envelope_has_an_empty_data_object() {
        let json =
            serde_json::to_value(ListingDeleteResponse::new("Project deleted successfully"))
                .unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Project deleted successfully");
        assert_eq!(json["data"], serde_json::json!({}));
    }
}
