//! Translation of listing query parameters into the typed core query.
//!
//! Every rule here mirrors the public listing contract: unrecognized or
//! unparsable parameters contribute nothing, filters are conjunctive, and
//! the sort key must come from the allow-list.

use std::collections::HashMap;

use aadhar_homes_core::domain::listing::{
    entities::ListingCategory,
    filter::{
        DateField, FilterClause, FilterSet, NumericField, Ordering, PageRequest, SortDirection,
        SortKey, TextField,
    },
    value_objects::{ListingQuery, SearchListingsInput},
};
use chrono::{DateTime, NaiveDate, Utc};

pub fn parse_listing_query(
    map: &HashMap<String, String>,
    category: ListingCategory,
) -> ListingQuery {
    let mut filter = FilterSet::new();

    if let Some(city) = non_empty(map, "city") {
        filter.push(FilterClause::Contains {
            field: TextField::City,
            value: city,
        });
    }
    if let Some(property_type) = non_empty(map, "type") {
        filter.push(FilterClause::Contains {
            field: TextField::PropertyType,
            value: property_type,
        });
    }
    if let Some(status) = non_empty(map, "status") {
        filter.push(FilterClause::Equals {
            field: TextField::Status,
            value: status,
        });
    }
    if let Some(builder) = non_empty(map, "builder") {
        filter.push(FilterClause::Contains {
            field: TextField::BuilderName,
            value: builder,
        });
    }
    if let Some(min_price) = parse_i64(map, "minPrice") {
        filter.push(FilterClause::AtLeast {
            field: NumericField::MinPrice,
            value: min_price,
        });
    }
    if let Some(max_price) = parse_i64(map, "maxPrice") {
        filter.push(FilterClause::AtMost {
            field: NumericField::MaxPrice,
            value: max_price,
        });
    }
    if let Some(luxury) = non_empty(map, "luxury") {
        filter.push(FilterClause::Equals {
            field: TextField::Luxury,
            value: luxury,
        });
    }

    match category {
        ListingCategory::Project => {
            if let Some(spotlight) = non_empty(map, "spotlight") {
                filter.push(FilterClause::Equals {
                    field: TextField::Spotlight,
                    value: spotlight,
                });
            }
        }
        ListingCategory::NewLaunch => {
            if let Some(from) = parse_date(map, "launchFrom") {
                filter.push(FilterClause::OnOrAfter {
                    field: DateField::LaunchingDate,
                    value: from,
                });
            }
            if let Some(to) = parse_date(map, "launchTo") {
                filter.push(FilterClause::OnOrBefore {
                    field: DateField::LaunchingDate,
                    value: to,
                });
            }
        }
    }

    let order = resolve_ordering(map, category);
    let page = PageRequest::new(parse_u64(map, "page"), parse_u64(map, "limit"));

    ListingQuery {
        category,
        filter,
        order,
        page,
    }
}

/// `None` when `q` is missing or empty; the search endpoint turns that
/// into a 400 before touching the store.
pub fn parse_search_query(
    map: &HashMap<String, String>,
    category: ListingCategory,
) -> Option<SearchListingsInput> {
    let query = non_empty(map, "q")?;

    Some(SearchListingsInput {
        category,
        query,
        page: PageRequest::new(parse_u64(map, "page"), parse_u64(map, "limit")),
    })
}

pub fn parse_limit(map: &HashMap<String, String>) -> u64 {
    PageRequest::new(None, parse_u64(map, "limit")).limit
}

fn resolve_ordering(map: &HashMap<String, String>, category: ListingCategory) -> Ordering {
    match non_empty(map, "sortBy").and_then(|raw| raw.parse::<SortKey>().ok()) {
        Some(key) => {
            let direction = if map.get("sortOrder").is_some_and(|order| order == "desc") {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            Ordering::explicit(key, direction)
        }
        None => Ordering::default_for(category),
    }
}

fn non_empty(map: &HashMap<String, String>, key: &str) -> Option<String> {
    map.get(key).filter(|value| !value.is_empty()).cloned()
}

fn parse_i64(map: &HashMap<String, String>, key: &str) -> Option<i64> {
    map.get(key).and_then(|value| value.parse().ok())
}

fn parse_u64(map: &HashMap<String, String>, key: &str) -> Option<u64> {
    map.get(key).and_then(|value| value.parse().ok())
}

fn parse_date(map: &HashMap<String, String>, key: &str) -> Option<DateTime<Utc>> {
    let raw = map.get(key)?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn full_parameter_set_builds_a_conjunction() {
        let query = parse_listing_query(
            &map(&[
                ("city", "Pune"),
                ("type", "Residential"),
                ("status", "Upcoming"),
                ("builder", "Acme"),
                ("minPrice", "5000000"),
                ("maxPrice", "15000000"),
                ("luxury", "True"),
                ("spotlight", "True"),
                ("page", "2"),
                ("limit", "20"),
            ]),
            ListingCategory::Project,
        );

        assert_eq!(query.filter.len(), 8);
        assert!(query.filter.clauses().contains(&FilterClause::Contains {
            field: TextField::City,
            value: "Pune".to_string(),
        }));
        assert!(query.filter.clauses().contains(&FilterClause::Equals {
            field: TextField::Status,
            value: "Upcoming".to_string(),
        }));
        assert!(query.filter.clauses().contains(&FilterClause::AtLeast {
            field: NumericField::MinPrice,
            value: 5_000_000,
        }));
        assert_eq!(query.page.page, 2);
        assert_eq!(query.page.limit, 20);
    }

    #[test]
    fn absent_and_unknown_parameters_contribute_nothing() {
        let query = parse_listing_query(
            &map(&[("utm_source", "newsletter"), ("city", "")]),
            ListingCategory::Project,
        );
        assert!(query.filter.is_empty());
        assert_eq!(query.page.page, 1);
        assert_eq!(query.page.limit, 10);
    }

    #[test]
    fn unparsable_numbers_are_ignored() {
        let query = parse_listing_query(
            &map(&[("minPrice", "cheap"), ("page", "first"), ("limit", "-3")]),
            ListingCategory::Project,
        );
        assert!(query.filter.is_empty());
        assert_eq!(query.page.page, 1);
        assert_eq!(query.page.limit, 10);
    }

    #[test]
    fn spotlight_only_applies_to_projects() {
        let launch = parse_listing_query(&map(&[("spotlight", "True")]), ListingCategory::NewLaunch);
        assert!(launch.filter.is_empty());

        let project = parse_listing_query(&map(&[("spotlight", "True")]), ListingCategory::Project);
        assert_eq!(project.filter.len(), 1);
    }

    #[test]
    fn launch_window_only_applies_to_new_launches() {
        let project = parse_listing_query(
            &map(&[("launchFrom", "2026-09-01"), ("launchTo", "2026-10-01")]),
            ListingCategory::Project,
        );
        assert!(project.filter.is_empty());

        let launch = parse_listing_query(
            &map(&[("launchFrom", "2026-09-01"), ("launchTo", "2026-10-01")]),
            ListingCategory::NewLaunch,
        );
        assert_eq!(launch.filter.len(), 2);
    }

    #[test]
    fn launch_dates_accept_rfc3339_and_plain_dates() {
        let launch = parse_listing_query(
            &map(&[("launchFrom", "2026-09-01T10:30:00Z")]),
            ListingCategory::NewLaunch,
        );
        assert_eq!(launch.filter.len(), 1);

        let launch = parse_listing_query(
            &map(&[("launchFrom", "next month")]),
            ListingCategory::NewLaunch,
        );
        assert!(launch.filter.is_empty());
    }

    #[test]
    fn explicit_sort_defaults_to_ascending() {
        let query = parse_listing_query(&map(&[("sortBy", "minPrice")]), ListingCategory::Project);
        assert_eq!(
            query.order.keys,
            vec![(SortKey::MinPrice, SortDirection::Asc)]
        );

        let query = parse_listing_query(
            &map(&[("sortBy", "minPrice"), ("sortOrder", "desc")]),
            ListingCategory::Project,
        );
        assert_eq!(
            query.order.keys,
            vec![(SortKey::MinPrice, SortDirection::Desc)]
        );
    }

    #[test]
    fn unknown_sort_keys_fall_back_to_the_resource_default() {
        let query = parse_listing_query(
            &map(&[("sortBy", "password_hash")]),
            ListingCategory::NewLaunch,
        );
        assert_eq!(
            query.order.keys,
            vec![
                (SortKey::Priority, SortDirection::Desc),
                (SortKey::LaunchingDate, SortDirection::Asc),
            ]
        );
    }

    #[test]
    fn search_requires_a_non_empty_query() {
        assert!(parse_search_query(&map(&[]), ListingCategory::Project).is_none());
        assert!(parse_search_query(&map(&[("q", "")]), ListingCategory::Project).is_none());

        let input = parse_search_query(
            &map(&[("q", "metro"), ("page", "3")]),
            ListingCategory::NewLaunch,
        )
        .unwrap();
        assert_eq!(input.query, "metro");
        assert_eq!(input.page.page, 3);
    }

    #[test]
    fn upcoming_limit_is_clamped() {
        assert_eq!(parse_limit(&map(&[])), 10);
        assert_eq!(parse_limit(&map(&[("limit", "5")])), 5);
        assert_eq!(parse_limit(&map(&[("limit", "100000")])), 100);
    }
}
