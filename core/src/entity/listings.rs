use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::listing::entities::{AboutSection, BhkDetail, HighlightPoint, MediaAsset};

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct MediaAssetList(pub Vec<MediaAsset>);

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct BhkDetailList(pub Vec<BhkDetail>);

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct HighlightList(pub Vec<HighlightPoint>);

#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize, FromJsonQueryResult)]
pub struct AboutSectionList(pub Vec<AboutSection>);

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "listings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub category: String,
    pub slug: Option<String>,
    pub name: String,
    pub address: String,
    pub description: Option<String>,
    pub property_type: String,
    pub builder_name: String,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
    pub luxury: String,
    pub spotlight: String,
    pub status: String,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub front_image: Option<MediaAsset>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub thumbnail_image: Option<MediaAsset>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub logo: Option<MediaAsset>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub location_image: Option<MediaAsset>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub highlight_image: Option<MediaAsset>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub master_plan_image: Option<MediaAsset>,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub brochure: Option<MediaAsset>,
    #[sea_orm(column_type = "JsonBinary")]
    pub gallery: MediaAssetList,
    #[sea_orm(column_type = "JsonBinary")]
    pub floorplan_images: MediaAssetList,
    #[sea_orm(column_type = "JsonBinary")]
    pub bhk_details: BhkDetailList,
    #[sea_orm(column_type = "JsonBinary")]
    pub highlights: HighlightList,
    #[sea_orm(column_type = "JsonBinary")]
    pub about_sections: AboutSectionList,
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
    pub tower_count: Option<i32>,
    pub total_units: Option<i64>,
    pub total_land_area: Option<f64>,
    pub contact_number: Option<i64>,
    pub launching_date: Option<DateTimeUtc>,
    pub possession_date: Option<DateTimeUtc>,
    pub priority: i32,
    pub is_active: bool,
    pub pre_booking_amount: Option<i64>,
    pub early_bird_discount: Option<f64>,
    pub registration_start: Option<DateTimeUtc>,
    pub registration_end: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
