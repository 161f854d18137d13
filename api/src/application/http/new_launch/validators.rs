use aadhar_homes_core::domain::listing::entities::ListingCategory;
use aadhar_homes_core::domain::listing::value_objects::{CreateListingInput, UpdateListingInput};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::listing::ListingExtras;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateNewLaunchValidator {
    #[serde(rename = "projectName")]
    #[validate(
        required(message = "Project name is required"),
        length(min = 1, message = "Project name is required")
    )]
    pub name: Option<String>,

    #[serde(rename = "projectAddress")]
    #[validate(
        required(message = "Project address is required"),
        length(min = 1, message = "Project address is required")
    )]
    pub address: Option<String>,

    #[serde(rename = "type")]
    #[validate(
        required(message = "Project type is required"),
        length(min = 1, message = "Project type is required")
    )]
    pub property_type: Option<String>,

    #[validate(
        required(message = "City is required"),
        length(min = 1, message = "City is required")
    )]
    pub city: Option<String>,

    #[serde(rename = "builderName")]
    #[validate(
        required(message = "Builder name is required"),
        length(min = 1, message = "Builder name is required")
    )]
    pub builder_name: Option<String>,

    #[serde(rename = "launchingDate")]
    #[validate(required(message = "Launching date is required for new launches"))]
    pub launching_date: Option<DateTime<Utc>>,

    #[serde(rename = "project_url")]
    pub slug: Option<String>,

    #[serde(rename = "project_Status")]
    pub status: Option<String>,

    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,

    pub priority: Option<i32>,

    #[serde(rename = "preBookingAmount")]
    pub pre_booking_amount: Option<i64>,

    #[serde(rename = "earlyBirdDiscount")]
    pub early_bird_discount: Option<f64>,

    #[serde(rename = "registrationStartDate")]
    pub registration_start: Option<DateTime<Utc>>,

    #[serde(rename = "registrationEndDate")]
    pub registration_end: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: ListingExtras,
}

impl CreateNewLaunchValidator {
    pub fn into_input(self) -> CreateListingInput {
        let mut input = self.extra.into_create_input(ListingCategory::NewLaunch);
        input.name = self.name.unwrap_or_default();
        input.address = self.address.unwrap_or_default();
        input.property_type = self.property_type.unwrap_or_default();
        input.city = self.city.unwrap_or_default();
        input.builder_name = self.builder_name.unwrap_or_default();
        input.launching_date = self.launching_date;
        input.slug = self.slug;
        input.status = self.status;
        input.is_active = self.is_active;
        input.priority = self.priority;
        input.pre_booking_amount = self.pre_booking_amount;
        input.early_bird_discount = self.early_bird_discount;
        input.registration_start = self.registration_start;
        input.registration_end = self.registration_end;
        input
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateNewLaunchValidator {
    #[serde(rename = "projectName")]
    #[validate(length(min = 1, message = "Project name is required"))]
    pub name: Option<String>,

    #[serde(rename = "projectAddress")]
    #[validate(length(min = 1, message = "Project address is required"))]
    pub address: Option<String>,

    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Project type is required"))]
    pub property_type: Option<String>,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: Option<String>,

    #[serde(rename = "builderName")]
    #[validate(length(min = 1, message = "Builder name is required"))]
    pub builder_name: Option<String>,

    #[serde(rename = "launchingDate")]
    pub launching_date: Option<DateTime<Utc>>,

    #[serde(rename = "project_url")]
    pub slug: Option<String>,

    #[serde(rename = "project_Status")]
    pub status: Option<String>,

    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,

    pub priority: Option<i32>,

    #[serde(rename = "preBookingAmount")]
    pub pre_booking_amount: Option<i64>,

    #[serde(rename = "earlyBirdDiscount")]
    pub early_bird_discount: Option<f64>,

    #[serde(rename = "registrationStartDate")]
    pub registration_start: Option<DateTime<Utc>>,

    #[serde(rename = "registrationEndDate")]
    pub registration_end: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: ListingExtras,
}

impl UpdateNewLaunchValidator {
    pub fn into_input(self, id: Uuid) -> UpdateListingInput {
        let mut input = self.extra.into_update_input(id, ListingCategory::NewLaunch);
        input.name = self.name;
        input.address = self.address;
        input.property_type = self.property_type;
        input.city = self.city;
        input.builder_name = self.builder_name;
        input.launching_date = self.launching_date;
        input.slug = self.slug;
        input.status = self.status;
        input.is_active = self.is_active;
        input.priority = self.priority;
        input.pre_booking_amount = self.pre_booking_amount;
        input.early_bird_discount = self.early_bird_discount;
        input.registration_start = self.registration_start;
        input.registration_end = self.registration_end;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launching_date_is_required_for_new_launches() {
        let payload: CreateNewLaunchValidator = serde_json::from_value(serde_json::json!({
            "projectName": "Metro Heights",
            "projectAddress": "Old Airport Road",
            "type": "Residential",
            "city": "Pune",
            "builderName": "Acme Builders",
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        let messages: Vec<String> = errors
            .field_errors()
            .values()
            .flat_map(|errors| {
                errors
                    .iter()
                    .filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
            })
            .collect();
        assert!(messages.contains(&"Launching date is required for new launches".to_string()));
    }

    #[test]
    fn launch_specific_fields_reach_the_core_input() {
        let payload: CreateNewLaunchValidator = serde_json::from_value(serde_json::json!({
            "projectName": "Metro Heights",
            "projectAddress": "Old Airport Road",
            "type": "Residential",
            "city": "Pune",
            "builderName": "Acme Builders",
            "launchingDate": "2026-09-15T00:00:00Z",
            "priority": 7,
            "preBookingAmount": 200000,
        }))
        .unwrap();
        payload.validate().unwrap();

        let input = payload.into_input();
        assert_eq!(input.category, ListingCategory::NewLaunch);
        assert_eq!(input.priority, Some(7));
        assert_eq!(input.pre_booking_amount, Some(200_000));
        assert!(input.launching_date.is_some());
    }
}
