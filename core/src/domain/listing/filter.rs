//! Typed query construction for listing reads.
//!
//! Request parameters become an explicit conjunction of tagged filter
//! clauses over closed field enums; the repository layer translates them
//! into database conditions. No stringly-typed column name ever crosses
//! this boundary.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::listing::entities::ListingCategory;

/// Text columns that may be filtered by substring or exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    City,
    PropertyType,
    BuilderName,
    Status,
    Luxury,
    Spotlight,
}

/// Numeric columns supporting range bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    MinPrice,
    MaxPrice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    LaunchingDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagField {
    IsActive,
}

/// A single predicate over one listing field.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterClause {
    /// Case-insensitive substring match.
    Contains { field: TextField, value: String },
    /// Exact match on the stored value.
    Equals { field: TextField, value: String },
    AtLeast { field: NumericField, value: i64 },
    AtMost { field: NumericField, value: i64 },
    OnOrAfter { field: DateField, value: DateTime<Utc> },
    OnOrBefore { field: DateField, value: DateTime<Utc> },
    Is { field: FlagField, value: bool },
}

/// An explicit conjunction of clauses. Adding a clause can only narrow the
/// result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    clauses: Vec<FilterClause>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self {
            clauses: Vec::new(),
        }
    }

    pub fn and(mut self, clause: FilterClause) -> Self {
        self.clauses.push(clause);
        self
    }

    pub fn push(&mut self, clause: FilterClause) {
        self.clauses.push(clause);
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }
}

/// Sortable columns. Anything outside this allow-list falls back to the
/// resource default instead of ordering by an arbitrary stored field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    CreatedAt,
    UpdatedAt,
    Name,
    MinPrice,
    MaxPrice,
    LaunchingDate,
    Priority,
    City,
}

impl FromStr for SortKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(SortKey::CreatedAt),
            "updatedAt" => Ok(SortKey::UpdatedAt),
            "projectName" => Ok(SortKey::Name),
            "minPrice" => Ok(SortKey::MinPrice),
            "maxPrice" => Ok(SortKey::MaxPrice),
            "launchingDate" => Ok(SortKey::LaunchingDate),
            "priority" => Ok(SortKey::Priority),
            "city" => Ok(SortKey::City),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ordering {
    pub keys: Vec<(SortKey, SortDirection)>,
}

impl Ordering {
    pub fn explicit(key: SortKey, direction: SortDirection) -> Self {
        Self {
            keys: vec![(key, direction)],
        }
    }

    /// Resource defaults: projects newest first; new launches by priority,
    /// then soonest launch.
    pub fn default_for(category: ListingCategory) -> Self {
        match category {
            ListingCategory::Project => Self {
                keys: vec![(SortKey::CreatedAt, SortDirection::Desc)],
            },
            ListingCategory::NewLaunch => Self {
                keys: vec![
                    (SortKey::Priority, SortDirection::Desc),
                    (SortKey::LaunchingDate, SortDirection::Asc),
                ],
            },
        }
    }
}

/// 1-based page plus page size, clamped to sane bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
}

impl PageRequest {
    pub const DEFAULT_LIMIT: u64 = 10;
    pub const MAX_LIMIT: u64 = 100;

    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit
                .unwrap_or(Self::DEFAULT_LIMIT)
                .clamp(1, Self::MAX_LIMIT),
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// One page of results together with the total match count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: &PageRequest) -> Self {
        Self {
            items,
            total,
            page: request.page,
            limit: request.limit,
        }
    }

    pub fn total_pages(&self) -> u64 {
        self.total.div_ceil(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_defaults() {
        let page = PageRequest::new(None, None);
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn page_request_clamps_bounds() {
        let page = PageRequest::new(Some(0), Some(0));
        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 1);

        let page = PageRequest::new(Some(3), Some(100_000));
        assert_eq!(page.limit, PageRequest::MAX_LIMIT);
        assert_eq!(page.offset(), 2 * PageRequest::MAX_LIMIT);
    }

    #[test]
    fn offset_is_page_minus_one_times_limit() {
        let page = PageRequest::new(Some(4), Some(25));
        assert_eq!(page.offset(), 75);
    }

    #[test]
    fn total_pages_rounds_up() {
        let request = PageRequest::new(Some(1), Some(10));
        assert_eq!(Page::<u8>::new(vec![], 0, &request).total_pages(), 0);
        assert_eq!(Page::<u8>::new(vec![], 10, &request).total_pages(), 1);
        assert_eq!(Page::<u8>::new(vec![], 11, &request).total_pages(), 2);
    }

    #[test]
    fn sort_key_allow_list() {
        assert_eq!("createdAt".parse(), Ok(SortKey::CreatedAt));
        assert_eq!("projectName".parse(), Ok(SortKey::Name));
        assert_eq!("priority".parse(), Ok(SortKey::Priority));
        assert!("__proto__".parse::<SortKey>().is_err());
        assert!("password_hash".parse::<SortKey>().is_err());
    }

    #[test]
    fn default_ordering_per_category() {
        let project = Ordering::default_for(ListingCategory::Project);
        assert_eq!(project.keys, vec![(SortKey::CreatedAt, SortDirection::Desc)]);

        let launch = Ordering::default_for(ListingCategory::NewLaunch);
        assert_eq!(
            launch.keys,
            vec![
                (SortKey::Priority, SortDirection::Desc),
                (SortKey::LaunchingDate, SortDirection::Asc),
            ]
        );
    }

    #[test]
    fn filter_set_is_a_growing_conjunction() {
        let base = FilterSet::new().and(FilterClause::Contains {
            field: TextField::City,
            value: "Pune".to_string(),
        });
        let narrowed = base.clone().and(FilterClause::AtLeast {
            field: NumericField::MinPrice,
            value: 5_000_000,
        });
        assert_eq!(base.len(), 1);
        assert_eq!(narrowed.len(), 2);
        assert!(narrowed.clauses().starts_with(base.clauses()));
    }
}
