use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{CoreError, generate_timestamp};
use crate::domain::listing::value_objects::{CreateListingInput, UpdateListingInput};

/// The two listing catalogues served by the platform. They share one record
/// shape; the per-category differences live in [`ListingDetails`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListingCategory {
    #[default]
    Project,
    #[serde(rename = "newlaunch")]
    NewLaunch,
}

impl ListingCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingCategory::Project => "project",
            ListingCategory::NewLaunch => "newlaunch",
        }
    }

    /// Label used in user-facing messages ("Project not found", ...).
    pub fn display_name(&self) -> &'static str {
        match self {
            ListingCategory::Project => "Project",
            ListingCategory::NewLaunch => "New launch project",
        }
    }

    pub fn not_found_message(&self) -> String {
        format!("{} not found", self.display_name())
    }
}

impl FromStr for ListingCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(ListingCategory::Project),
            "newlaunch" => Ok(ListingCategory::NewLaunch),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "Under Construction")]
    UnderConstruction,
    #[serde(rename = "Ready to Move")]
    ReadyToMove,
    #[serde(rename = "Upcoming")]
    Upcoming,
    #[serde(rename = "Completed")]
    Completed,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProjectStatus::UnderConstruction => "Under Construction",
            ProjectStatus::ReadyToMove => "Ready to Move",
            ProjectStatus::Upcoming => "Upcoming",
            ProjectStatus::Completed => "Completed",
        };
        f.write_str(label)
    }
}

impl FromStr for ProjectStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Under Construction" => Ok(ProjectStatus::UnderConstruction),
            "Ready to Move" => Ok(ProjectStatus::ReadyToMove),
            "Upcoming" => Ok(ProjectStatus::Upcoming),
            "Completed" => Ok(ProjectStatus::Completed),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum LaunchStatus {
    #[default]
    #[serde(rename = "Pre-Launch")]
    PreLaunch,
    #[serde(rename = "Launching Soon")]
    LaunchingSoon,
    #[serde(rename = "Launched")]
    Launched,
    #[serde(rename = "Sold Out")]
    SoldOut,
}

impl fmt::Display for LaunchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            LaunchStatus::PreLaunch => "Pre-Launch",
            LaunchStatus::LaunchingSoon => "Launching Soon",
            LaunchStatus::Launched => "Launched",
            LaunchStatus::SoldOut => "Sold Out",
        };
        f.write_str(label)
    }
}

impl FromStr for LaunchStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pre-Launch" => Ok(LaunchStatus::PreLaunch),
            "Launching Soon" => Ok(LaunchStatus::LaunchingSoon),
            "Launched" => Ok(LaunchStatus::Launched),
            "Sold Out" => Ok(LaunchStatus::SoldOut),
            _ => Err(()),
        }
    }
}

/// A named media slot: the storage id plus direct and CDN URLs.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, FromJsonQueryResult,
)]
pub struct MediaAsset {
    #[serde(default)]
    pub public_id: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub cdn_url: String,
}

/// Free-text unit configuration row ({unit type, area, price}); none of the
/// three labels is validated as numeric.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, FromJsonQueryResult,
)]
pub struct BhkDetail {
    pub bhk_type: Option<String>,
    pub price: Option<String>,
    #[serde(rename = "bhk_Area")]
    pub bhk_area: Option<String>,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, FromJsonQueryResult,
)]
pub struct HighlightPoint {
    #[serde(rename = "highlight_Point")]
    pub highlight_point: Option<String>,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema, FromJsonQueryResult,
)]
pub struct AboutSection {
    pub about_image: Option<String>,
    pub mobile_banner_image: Option<String>,
}

/// Per-category attributes. The status enumerations are disjoint on purpose:
/// a project lifecycle and a launch lifecycle are independently typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub enum ListingDetails {
    Project {
        status: ProjectStatus,
    },
    NewLaunch {
        status: LaunchStatus,
        priority: i32,
        is_active: bool,
        pre_booking_amount: Option<i64>,
        early_bird_discount: Option<f64>,
        registration_start: Option<DateTime<Utc>>,
        registration_end: Option<DateTime<Utc>>,
    },
}

impl ListingDetails {
    pub fn category(&self) -> ListingCategory {
        match self {
            ListingDetails::Project { .. } => ListingCategory::Project,
            ListingDetails::NewLaunch { .. } => ListingCategory::NewLaunch,
        }
    }

    pub fn status_label(&self) -> String {
        match self {
            ListingDetails::Project { status } => status.to_string(),
            ListingDetails::NewLaunch { status, .. } => status.to_string(),
        }
    }

    /// Visibility gate. Projects have no soft-hide flag, so they are always
    /// visible; only new launches can be deactivated.
    pub fn is_active(&self) -> bool {
        match self {
            ListingDetails::Project { .. } => true,
            ListingDetails::NewLaunch { is_active, .. } => *is_active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Listing {
    pub id: Uuid,
    pub slug: Option<String>,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub property_type: String,
    pub builder_name: String,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    /// Stored as the literal strings "True"/"False"; the string contract is
    /// part of the wire format and of the filter semantics.
    pub luxury: String,
    pub spotlight: String,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub bhk_details: Vec<BhkDetail>,
    pub highlights: Vec<HighlightPoint>,
    pub about_sections: Vec<AboutSection>,
    pub amenities: Vec<String>,
    pub connectivity: Vec<String>,
    pub entertainment: Vec<String>,
    pub business: Vec<String>,
    pub education: Vec<String>,
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
    pub gallery: Vec<MediaAsset>,
    pub floorplan_images: Vec<MediaAsset>,
    pub tower_count: Option<i32>,
    pub total_units: Option<i64>,
    pub total_land_area: Option<f64>,
    pub contact_number: Option<i64>,
    pub launching_date: Option<DateTime<Utc>>,
    pub possession_date: Option<DateTime<Utc>>,
    pub details: ListingDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lossy slug derivation: lowercase, runs of non-alphanumerics collapse to a
/// single dash, leading/trailing dashes trimmed. Returns `None` when nothing
/// survives so the record simply has no slug.
pub fn derive_slug(name: &str) -> Option<String> {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    if slug.is_empty() { None } else { Some(slug) }
}

fn parse_project_status(value: Option<&str>) -> Result<ProjectStatus, CoreError> {
    match value {
        None => Ok(ProjectStatus::default()),
        Some(raw) => raw.parse().map_err(|_| {
            CoreError::Validation(format!(
                "{raw} is not a valid enum value for path `project_Status`"
            ))
        }),
    }
}

fn parse_launch_status(value: Option<&str>) -> Result<LaunchStatus, CoreError> {
    match value {
        None => Ok(LaunchStatus::default()),
        Some(raw) => raw.parse().map_err(|_| {
            CoreError::Validation(format!(
                "{raw} is not a valid enum value for path `project_Status`"
            ))
        }),
    }
}

impl Listing {
    pub fn new(input: CreateListingInput) -> Result<Self, CoreError> {
        let (now, timestamp) = generate_timestamp();

        let details = match input.category {
            ListingCategory::Project => ListingDetails::Project {
                status: parse_project_status(input.status.as_deref())?,
            },
            ListingCategory::NewLaunch => {
                if input.launching_date.is_none() {
                    return Err(CoreError::Validation(
                        "Launching date is required for new launches".to_string(),
                    ));
                }
                ListingDetails::NewLaunch {
                    status: parse_launch_status(input.status.as_deref())?,
                    priority: input.priority.unwrap_or(0),
                    is_active: input.is_active.unwrap_or(true),
                    pre_booking_amount: input.pre_booking_amount,
                    early_bird_discount: input.early_bird_discount,
                    registration_start: input.registration_start,
                    registration_end: input.registration_end,
                }
            }
        };

        let slug = input
            .slug
            .filter(|s| !s.is_empty())
            .or_else(|| derive_slug(&input.name));

        Ok(Self {
            id: Uuid::new_v7(timestamp),
            slug,
            name: input.name,
            address: input.address,
            description: input.description,
            property_type: input.property_type,
            builder_name: input.builder_name,
            city: input.city,
            state: input.state,
            country: input.country.unwrap_or_else(|| "India".to_string()),
            luxury: input.luxury.unwrap_or_else(|| "False".to_string()),
            spotlight: input.spotlight.unwrap_or_else(|| "False".to_string()),
            min_price: input.min_price,
            max_price: input.max_price,
            bhk_details: input.bhk_details.unwrap_or_default(),
            highlights: input.highlights.unwrap_or_default(),
            about_sections: input.about_sections.unwrap_or_default(),
            amenities: input.amenities.unwrap_or_default(),
            connectivity: input.connectivity.unwrap_or_default(),
            entertainment: input.entertainment.unwrap_or_default(),
            business: input.business.unwrap_or_default(),
            education: input.education.unwrap_or_default(),
            meta_title: input.meta_title,
            meta_description: input.meta_description,
            bg_content: input.bg_content,
            rera_number: input.rera_number,
            payment_plan: input.payment_plan,
            about_developer: input.about_developer,
            overview: input.overview,
            front_image: input.front_image,
            thumbnail_image: input.thumbnail_image,
            logo: input.logo,
            location_image: input.location_image,
            highlight_image: input.highlight_image,
            master_plan_image: input.master_plan_image,
            brochure: input.brochure,
            gallery: input.gallery.unwrap_or_default(),
            floorplan_images: input.floorplan_images.unwrap_or_default(),
            tower_count: input.tower_count,
            total_units: input.total_units,
            total_land_area: input.total_land_area,
            contact_number: input.contact_number,
            launching_date: input.launching_date,
            possession_date: input.possession_date,
            details,
            created_at: now,
            updated_at: now,
        })
    }

    /// Partial update: absent fields stay untouched. A new name re-derives
    /// the slug unless an explicit slug was supplied alongside it.
    pub fn apply(&mut self, input: UpdateListingInput) -> Result<(), CoreError> {
        let explicit_slug = input.slug.filter(|s| !s.is_empty());
        if let Some(slug) = explicit_slug {
            self.slug = Some(slug);
        } else if let Some(name) = input.name.as_deref() {
            self.slug = derive_slug(name);
        }

        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(address) = input.address {
            self.address = address;
        }
        if let Some(description) = input.description {
            self.description = Some(description);
        }
        if let Some(property_type) = input.property_type {
            self.property_type = property_type;
        }
        if let Some(builder_name) = input.builder_name {
            self.builder_name = builder_name;
        }
        if let Some(city) = input.city {
            self.city = city;
        }
        if let Some(state) = input.state {
            self.state = Some(state);
        }
        if let Some(country) = input.country {
            self.country = country;
        }
        if let Some(luxury) = input.luxury {
            self.luxury = luxury;
        }
        if let Some(spotlight) = input.spotlight {
            self.spotlight = spotlight;
        }
        if let Some(min_price) = input.min_price {
            self.min_price = Some(min_price);
        }
        if let Some(max_price) = input.max_price {
            self.max_price = Some(max_price);
        }
        if let Some(bhk_details) = input.bhk_details {
            self.bhk_details = bhk_details;
        }
        if let Some(highlights) = input.highlights {
            self.highlights = highlights;
        }
        if let Some(about_sections) = input.about_sections {
            self.about_sections = about_sections;
        }
        if let Some(amenities) = input.amenities {
            self.amenities = amenities;
        }
        if let Some(connectivity) = input.connectivity {
            self.connectivity = connectivity;
        }
        if let Some(entertainment) = input.entertainment {
            self.entertainment = entertainment;
        }
        if let Some(business) = input.business {
            self.business = business;
        }
        if let Some(education) = input.education {
            self.education = education;
        }
        if let Some(meta_title) = input.meta_title {
            self.meta_title = Some(meta_title);
        }
        if let Some(meta_description) = input.meta_description {
            self.meta_description = Some(meta_description);
        }
        if let Some(bg_content) = input.bg_content {
            self.bg_content = Some(bg_content);
        }
        if let Some(rera_number) = input.rera_number {
            self.rera_number = Some(rera_number);
        }
        if let Some(payment_plan) = input.payment_plan {
            self.payment_plan = Some(payment_plan);
        }
        if let Some(about_developer) = input.about_developer {
            self.about_developer = Some(about_developer);
        }
        if let Some(overview) = input.overview {
            self.overview = Some(overview);
        }
        if let Some(front_image) = input.front_image {
            self.front_image = Some(front_image);
        }
        if let Some(thumbnail_image) = input.thumbnail_image {
            self.thumbnail_image = Some(thumbnail_image);
        }
        if let Some(logo) = input.logo {
            self.logo = Some(logo);
        }
        if let Some(location_image) = input.location_image {
            self.location_image = Some(location_image);
        }
        if let Some(highlight_image) = input.highlight_image {
            self.highlight_image = Some(highlight_image);
        }
        if let Some(master_plan_image) = input.master_plan_image {
            self.master_plan_image = Some(master_plan_image);
        }
        if let Some(brochure) = input.brochure {
            self.brochure = Some(brochure);
        }
        if let Some(gallery) = input.gallery {
            self.gallery = gallery;
        }
        if let Some(floorplan_images) = input.floorplan_images {
            self.floorplan_images = floorplan_images;
        }
        if let Some(tower_count) = input.tower_count {
            self.tower_count = Some(tower_count);
        }
        if let Some(total_units) = input.total_units {
            self.total_units = Some(total_units);
        }
        if let Some(total_land_area) = input.total_land_area {
            self.total_land_area = Some(total_land_area);
        }
        if let Some(contact_number) = input.contact_number {
            self.contact_number = Some(contact_number);
        }
        if let Some(launching_date) = input.launching_date {
            self.launching_date = Some(launching_date);
        }
        if let Some(possession_date) = input.possession_date {
            self.possession_date = Some(possession_date);
        }

        match &mut self.details {
            ListingDetails::Project { status } => {
                if let Some(raw) = input.status.as_deref() {
                    *status = parse_project_status(Some(raw))?;
                }
            }
            ListingDetails::NewLaunch {
                status,
                priority,
                is_active,
                pre_booking_amount,
                early_bird_discount,
                registration_start,
                registration_end,
            } => {
                if let Some(raw) = input.status.as_deref() {
                    *status = parse_launch_status(Some(raw))?;
                }
                if let Some(value) = input.priority {
                    *priority = value;
                }
                if let Some(value) = input.is_active {
                    *is_active = value;
                }
                if let Some(value) = input.pre_booking_amount {
                    *pre_booking_amount = Some(value);
                }
                if let Some(value) = input.early_bird_discount {
                    *early_bird_discount = Some(value);
                }
                if let Some(value) = input.registration_start {
                    *registration_start = Some(value);
                }
                if let Some(value) = input.registration_end {
                    *registration_end = Some(value);
                }
            }
        }

        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn category(&self) -> ListingCategory {
        self.details.category()
    }

    /// Serialized virtual: "₹min - ₹max" when both bounds are present.
    pub fn price_range(&self) -> String {
        match (self.min_price, self.max_price) {
            (Some(min), Some(max)) => format!("₹{min} - ₹{max}"),
            _ => "Price on Request".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project_input(name: &str) -> CreateListingInput {
        CreateListingInput {
            name: name.to_string(),
            address: "12 MG Road".to_string(),
            property_type: "Residential".to_string(),
            builder_name: "Acme Builders".to_string(),
            city: "Pune".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn derive_slug_lowercases_and_collapses() {
        assert_eq!(derive_slug("Skyline Towers"), Some("skyline-towers".into()));
        assert_eq!(
            derive_slug("  Grand -- Vista!! Phase 2 "),
            Some("grand-vista-phase-2".into())
        );
        assert_eq!(derive_slug("!!!"), None);
    }

    #[test]
    fn derive_slug_is_idempotent() {
        let once = derive_slug("Skyline Towers").unwrap();
        assert_eq!(derive_slug(&once), Some(once.clone()));
    }

    #[test]
    fn new_project_derives_slug_and_defaults() {
        let listing = Listing::new(project_input("Skyline Towers")).unwrap();
        assert_eq!(listing.slug.as_deref(), Some("skyline-towers"));
        assert_eq!(listing.country, "India");
        assert_eq!(listing.luxury, "False");
        assert_eq!(listing.spotlight, "False");
        assert_eq!(listing.details.status_label(), "Under Construction");
        assert!(listing.details.is_active());
    }

    #[test]
    fn explicit_slug_overrides_derivation() {
        let mut input = project_input("Skyline Towers");
        input.slug = Some("custom-slug".to_string());
        let listing = Listing::new(input).unwrap();
        assert_eq!(listing.slug.as_deref(), Some("custom-slug"));
    }

    #[test]
    fn empty_slug_is_treated_as_absent() {
        let mut input = project_input("Skyline Towers");
        input.slug = Some(String::new());
        let listing = Listing::new(input).unwrap();
        assert_eq!(listing.slug.as_deref(), Some("skyline-towers"));
    }

    #[test]
    fn invalid_status_is_rejected() {
        let mut input = project_input("Skyline Towers");
        input.status = Some("Launched".to_string());
        let err = Listing::new(input).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(
                "Launched is not a valid enum value for path `project_Status`".to_string()
            )
        );
    }

    #[test]
    fn new_launch_requires_launching_date() {
        let mut input = project_input("Metro Heights");
        input.category = ListingCategory::NewLaunch;
        let err = Listing::new(input).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation("Launching date is required for new launches".to_string())
        );
    }

    #[test]
    fn new_launch_defaults() {
        let mut input = project_input("Metro Heights");
        input.category = ListingCategory::NewLaunch;
        input.launching_date = Some(Utc::now());
        let listing = Listing::new(input).unwrap();
        match listing.details {
            ListingDetails::NewLaunch {
                status,
                priority,
                is_active,
                ..
            } => {
                assert_eq!(status, LaunchStatus::PreLaunch);
                assert_eq!(priority, 0);
                assert!(is_active);
            }
            _ => panic!("expected a new launch"),
        }
    }

    #[test]
    fn apply_rederives_slug_when_name_changes() {
        let mut listing = Listing::new(project_input("Skyline Towers")).unwrap();
        let update = UpdateListingInput {
            name: Some("Harbor View".to_string()),
            ..Default::default()
        };
        listing.apply(update).unwrap();
        assert_eq!(listing.name, "Harbor View");
        assert_eq!(listing.slug.as_deref(), Some("harbor-view"));
    }

    #[test]
    fn apply_keeps_explicit_slug_over_derivation() {
        let mut listing = Listing::new(project_input("Skyline Towers")).unwrap();
        let update = UpdateListingInput {
            name: Some("Harbor View".to_string()),
            slug: Some("kept-slug".to_string()),
            ..Default::default()
        };
        listing.apply(update).unwrap();
        assert_eq!(listing.slug.as_deref(), Some("kept-slug"));
    }

    #[test]
    fn apply_ignores_launch_fields_on_projects() {
        let mut listing = Listing::new(project_input("Skyline Towers")).unwrap();
        let update = UpdateListingInput {
            priority: Some(9),
            is_active: Some(false),
            ..Default::default()
        };
        listing.apply(update).unwrap();
        assert!(matches!(listing.details, ListingDetails::Project { .. }));
        assert!(listing.details.is_active());
    }

    #[test]
    fn price_range_virtual() {
        let mut listing = Listing::new(project_input("Skyline Towers")).unwrap();
        assert_eq!(listing.price_range(), "Price on Request");
        listing.min_price = Some(5_000_000);
        listing.max_price = Some(15_000_000);
        assert_eq!(listing.price_range(), "₹5000000 - ₹15000000");
    }
}
