use aadhar_homes_core::domain::listing::entities::ListingCategory;
use aadhar_homes_core::domain::listing::value_objects::{CreateListingInput, UpdateListingInput};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::application::http::listing::ListingExtras;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProjectValidator {
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

    #[serde(rename = "project_url")]
    pub slug: Option<String>,

    #[serde(rename = "project_Status")]
    pub status: Option<String>,

    #[serde(rename = "launchingDate")]
    pub launching_date: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: ListingExtras,
}

impl CreateProjectValidator {
    pub fn into_input(self) -> CreateListingInput {
        let mut input = self.extra.into_create_input(ListingCategory::Project);
        input.name = self.name.unwrap_or_default();
        input.address = self.address.unwrap_or_default();
        input.property_type = self.property_type.unwrap_or_default();
        input.city = self.city.unwrap_or_default();
        input.builder_name = self.builder_name.unwrap_or_default();
        input.slug = self.slug;
        input.status = self.status;
        input.launching_date = self.launching_date;
        input
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProjectValidator {
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

    #[serde(rename = "project_url")]
    pub slug: Option<String>,

    #[serde(rename = "project_Status")]
    pub status: Option<String>,

    #[serde(rename = "launchingDate")]
    pub launching_date: Option<DateTime<Utc>>,

    #[serde(flatten)]
    pub extra: ListingExtras,
}

impl UpdateProjectValidator {
    pub fn into_input(self, id: Uuid) -> UpdateListingInput {
        let mut input = self.extra.into_update_input(id, ListingCategory::Project);
        input.name = self.name;
        input.address = self.address;
        input.property_type = self.property_type;
        input.city = self.city;
        input.builder_name = self.builder_name;
        input.slug = self.slug;
        input.status = self.status;
        input.launching_date = self.launching_date;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_fields_use_the_legacy_messages() {
        let payload: CreateProjectValidator = serde_json::from_str("{}").unwrap();
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

        assert!(messages.contains(&"Project name is required".to_string()));
        assert!(messages.contains(&"City is required".to_string()));
        assert!(messages.contains(&"Builder name is required".to_string()));
    }

    #[test]
    fn wire_names_map_into_the_core_input() {
        let payload: CreateProjectValidator = serde_json::from_value(serde_json::json!({
            "projectName": "Skyline Towers",
            "projectAddress": "12 MG Road",
            "type": "Residential",
            "city": "Pune",
            "builderName": "Acme Builders",
            "minPrice": 5000000,
            "projectReraNo": "P52100001111",
        }))
        .unwrap();
        payload.validate().unwrap();

        let input = payload.into_input();
        assert_eq!(input.category, ListingCategory::Project);
        assert_eq!(input.name, "Skyline Towers");
        assert_eq!(input.min_price, Some(5_000_000));
        assert_eq!(input.rera_number.as_deref(), Some("P52100001111"));
        assert!(input.slug.is_none());
    }

    #[test]
    fn update_payload_keeps_absent_fields_absent() {
        let payload: UpdateProjectValidator = serde_json::from_value(serde_json::json!({
            "projectName": "Harbor View",
        }))
        .unwrap();
        payload.validate().unwrap();

        let input = payload.into_input(Uuid::nil());
        assert_eq!(input.name.as_deref(), Some("Harbor View"));
        assert!(input.address.is_none());
        assert!(input.city.is_none());
    }
}
