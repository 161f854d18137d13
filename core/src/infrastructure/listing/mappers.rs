use sea_orm::ActiveValue::Set;
use tracing::error;

use crate::domain::common::CoreError;
use crate::domain::listing::entities::{Listing, ListingCategory, ListingDetails};
use crate::entity::listings::{
    AboutSectionList, ActiveModel as ListingActiveModel, BhkDetailList, HighlightList,
    MediaAssetList, Model as ListingModel,
};

impl TryFrom<ListingModel> for Listing {
    type Error = CoreError;

    fn try_from(model: ListingModel) -> Result<Self, Self::Error> {
        let category: ListingCategory = model.category.parse().map_err(|_| {
            error!("Unknown listing category in store: {}", model.category);
            CoreError::InternalServerError
        })?;

        let details = match category {
            ListingCategory::Project => ListingDetails::Project {
                status: model.status.parse().map_err(|_| {
                    error!("Unknown project status in store: {}", model.status);
                    CoreError::InternalServerError
                })?,
            },
            ListingCategory::NewLaunch => ListingDetails::NewLaunch {
                status: model.status.parse().map_err(|_| {
                    error!("Unknown launch status in store: {}", model.status);
                    CoreError::InternalServerError
                })?,
                priority: model.priority,
                is_active: model.is_active,
                pre_booking_amount: model.pre_booking_amount,
                early_bird_discount: model.early_bird_discount,
                registration_start: model.registration_start,
                registration_end: model.registration_end,
            },
        };

        Ok(Listing {
            id: model.id,
            slug: model.slug,
            name: model.name,
            address: model.address,
            description: model.description,
            property_type: model.property_type,
            builder_name: model.builder_name,
            city: model.city,
            state: model.state,
            country: model.country,
            luxury: model.luxury,
            spotlight: model.spotlight,
            min_price: model.min_price,
            max_price: model.max_price,
            bhk_details: model.bhk_details.0,
            highlights: model.highlights.0,
            about_sections: model.about_sections.0,
            amenities: model.amenities,
            connectivity: model.connectivity,
            entertainment: model.entertainment,
            business: model.business,
            education: model.education,
            meta_title: model.meta_title,
            meta_description: model.meta_description,
            bg_content: model.bg_content,
            rera_number: model.rera_number,
            payment_plan: model.payment_plan,
            about_developer: model.about_developer,
            overview: model.overview,
            front_image: model.front_image,
            thumbnail_image: model.thumbnail_image,
            logo: model.logo,
            location_image: model.location_image,
            highlight_image: model.highlight_image,
            master_plan_image: model.master_plan_image,
            brochure: model.brochure,
            gallery: model.gallery.0,
            floorplan_images: model.floorplan_images.0,
            tower_count: model.tower_count,
            total_units: model.total_units,
            total_land_area: model.total_land_area,
            contact_number: model.contact_number,
            launching_date: model.launching_date,
            possession_date: model.possession_date,
            details,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

pub fn to_active_model(listing: Listing) -> ListingActiveModel {
    let category = listing.category();
    let status = listing.details.status_label();
    let (
        priority,
        is_active,
        pre_booking_amount,
        early_bird_discount,
        registration_start,
        registration_end,
    ) = match listing.details {
        ListingDetails::Project { .. } => (0, true, None, None, None, None),
        ListingDetails::NewLaunch {
            priority,
            is_active,
            pre_booking_amount,
            early_bird_discount,
            registration_start,
            registration_end,
            ..
        } => (
            priority,
            is_active,
            pre_booking_amount,
            early_bird_discount,
            registration_start,
            registration_end,
        ),
    };

    ListingActiveModel {
        id: Set(listing.id),
        category: Set(category.as_str().to_string()),
        slug: Set(listing.slug),
        name: Set(listing.name),
        address: Set(listing.address),
        description: Set(listing.description),
        property_type: Set(listing.property_type),
        builder_name: Set(listing.builder_name),
        city: Set(listing.city),
        state: Set(listing.state),
        country: Set(listing.country),
        luxury: Set(listing.luxury),
        spotlight: Set(listing.spotlight),
        status: Set(status),
        min_price: Set(listing.min_price),
        max_price: Set(listing.max_price),
        front_image: Set(listing.front_image),
        thumbnail_image: Set(listing.thumbnail_image),
        logo: Set(listing.logo),
        location_image: Set(listing.location_image),
        highlight_image: Set(listing.highlight_image),
        master_plan_image: Set(listing.master_plan_image),
        brochure: Set(listing.brochure),
        gallery: Set(MediaAssetList(listing.gallery)),
        floorplan_images: Set(MediaAssetList(listing.floorplan_images)),
        bhk_details: Set(BhkDetailList(listing.bhk_details)),
        highlights: Set(HighlightList(listing.highlights)),
        about_sections: Set(AboutSectionList(listing.about_sections)),
        amenities: Set(listing.amenities),
        connectivity: Set(listing.connectivity),
        entertainment: Set(listing.entertainment),
        business: Set(listing.business),
        education: Set(listing.education),
        meta_title: Set(listing.meta_title),
        meta_description: Set(listing.meta_description),
        bg_content: Set(listing.bg_content),
        rera_number: Set(listing.rera_number),
        payment_plan: Set(listing.payment_plan),
        about_developer: Set(listing.about_developer),
        overview: Set(listing.overview),
        tower_count: Set(listing.tower_count),
        total_units: Set(listing.total_units),
        total_land_area: Set(listing.total_land_area),
        contact_number: Set(listing.contact_number),
        launching_date: Set(listing.launching_date),
        possession_date: Set(listing.possession_date),
        priority: Set(priority),
        is_active: Set(is_active),
        pre_booking_amount: Set(pre_booking_amount),
        early_bird_discount: Set(early_bird_discount),
        registration_start: Set(registration_start),
        registration_end: Set(registration_end),
        created_at: Set(listing.created_at),
        updated_at: Set(listing.updated_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::listing::value_objects::CreateListingInput;
    use chrono::Utc;
    use sea_orm::ActiveValue;

    fn launch_listing() -> Listing {
        Listing::new(CreateListingInput {
            category: ListingCategory::NewLaunch,
            name: "Metro Heights".to_string(),
            address: "Old Airport Road".to_string(),
            property_type: "Residential".to_string(),
            builder_name: "Acme Builders".to_string(),
            city: "Pune".to_string(),
            launching_date: Some(Utc::now()),
            priority: Some(5),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn round_trips_a_new_launch_through_the_model() {
        let listing = launch_listing();
        let active = to_active_model(listing.clone());

        let ActiveValue::Set(category) = active.category else {
            panic!("category not set");
        };
        assert_eq!(category, "newlaunch");

        let ActiveValue::Set(status) = active.status else {
            panic!("status not set");
        };
        assert_eq!(status, "Pre-Launch");

        let ActiveValue::Set(priority) = active.priority else {
            panic!("priority not set");
        };
        assert_eq!(priority, 5);
    }

    #[test]
    fn projects_store_neutral_launch_columns() {
        let listing = Listing::new(CreateListingInput {
            name: "Skyline Towers".to_string(),
            address: "12 MG Road".to_string(),
            property_type: "Residential".to_string(),
            builder_name: "Acme Builders".to_string(),
            city: "Pune".to_string(),
            ..Default::default()
        })
        .unwrap();

        let active = to_active_model(listing);
        assert!(matches!(active.priority, ActiveValue::Set(0)));
        assert!(matches!(active.is_active, ActiveValue::Set(true)));
        assert!(matches!(active.pre_booking_amount, ActiveValue::Set(None)));
    }
}
