use chrono::{DateTime, Utc};
use sea_orm::sea_query::{Expr, SimpleExpr, extension::postgres::PgExpr};
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, SqlErr, Statement,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::CoreError,
    listing::{
        entities::{Listing, ListingCategory},
        filter::{
            DateField, FilterClause, FilterSet, FlagField, NumericField, Ordering, PageRequest,
            SortDirection, SortKey, TextField,
        },
        ports::ListingRepository,
        value_objects::{
            CityCount, NewLaunchStats, NewLaunchStatsOverview, ProjectStats, ProjectStatsOverview,
            StatusCount,
        },
    },
};
use crate::entity::listings::{Column as ListingColumn, Entity as ListingEntity};
use crate::infrastructure::listing::mappers::to_active_model;

/// Weighted search document. The GIN index in the migrations is declared
/// over this exact expression.
const SEARCH_VECTOR: &str = "setweight(to_tsvector('english', coalesce(name, '')), 'A') \
     || setweight(to_tsvector('english', coalesce(address, '') || ' ' || coalesce(property_type, '') || ' ' || status), 'B') \
     || setweight(to_tsvector('english', coalesce(description, '') || ' ' || coalesce(city, '') || ' ' || coalesce(state, '')), 'C') \
     || setweight(to_tsvector('english', coalesce(builder_name, '')), 'D')";

#[derive(Debug, Clone)]
pub struct PostgresListingRepository {
    pub db: DatabaseConnection,
}

impl PostgresListingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn text_column(field: TextField) -> ListingColumn {
    match field {
        TextField::City => ListingColumn::City,
        TextField::PropertyType => ListingColumn::PropertyType,
        TextField::BuilderName => ListingColumn::BuilderName,
        TextField::Status => ListingColumn::Status,
        TextField::Luxury => ListingColumn::Luxury,
        TextField::Spotlight => ListingColumn::Spotlight,
    }
}

fn numeric_column(field: NumericField) -> ListingColumn {
    match field {
        NumericField::MinPrice => ListingColumn::MinPrice,
        NumericField::MaxPrice => ListingColumn::MaxPrice,
    }
}

fn date_column(field: DateField) -> ListingColumn {
    match field {
        DateField::LaunchingDate => ListingColumn::LaunchingDate,
    }
}

fn flag_column(field: FlagField) -> ListingColumn {
    match field {
        FlagField::IsActive => ListingColumn::IsActive,
    }
}

fn sort_column(key: SortKey) -> ListingColumn {
    match key {
        SortKey::CreatedAt => ListingColumn::CreatedAt,
        SortKey::UpdatedAt => ListingColumn::UpdatedAt,
        SortKey::Name => ListingColumn::Name,
        SortKey::MinPrice => ListingColumn::MinPrice,
        SortKey::MaxPrice => ListingColumn::MaxPrice,
        SortKey::LaunchingDate => ListingColumn::LaunchingDate,
        SortKey::Priority => ListingColumn::Priority,
        SortKey::City => ListingColumn::City,
    }
}

fn escape_like(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn clause_expr(clause: &FilterClause) -> SimpleExpr {
    match clause {
        FilterClause::Contains { field, value } => {
            Expr::col(text_column(*field)).ilike(format!("%{}%", escape_like(value)))
        }
        FilterClause::Equals { field, value } => text_column(*field).eq(value.clone()),
        FilterClause::AtLeast { field, value } => numeric_column(*field).gte(*value),
        FilterClause::AtMost { field, value } => numeric_column(*field).lte(*value),
        FilterClause::OnOrAfter { field, value } => date_column(*field).gte(*value),
        FilterClause::OnOrBefore { field, value } => date_column(*field).lte(*value),
        FilterClause::Is { field, value } => flag_column(*field).eq(*value),
    }
}

fn build_condition(category: ListingCategory, filter: &FilterSet) -> Condition {
    let mut condition = Condition::all().add(ListingColumn::Category.eq(category.as_str()));
    for clause in filter.clauses() {
        condition = condition.add(clause_expr(clause));
    }
    condition
}

fn map_write_err(err: DbErr, category: ListingCategory) -> CoreError {
    if matches!(err, DbErr::RecordNotUpdated) {
        return CoreError::NotFound(category.not_found_message());
    }
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) if message.contains("slug") => {
            CoreError::Duplicate {
                field: "project_url".to_string(),
            }
        }
        _ => {
            error!("Failed to write listing: {}", err);
            CoreError::InternalServerError
        }
    }
}

impl ListingRepository for PostgresListingRepository {
    async fn find(
        &self,
        category: ListingCategory,
        filter: FilterSet,
        order: Ordering,
        page: PageRequest,
    ) -> Result<Vec<Listing>, CoreError> {
        let mut query = ListingEntity::find().filter(build_condition(category, &filter));

        for (key, direction) in &order.keys {
            let sort_order = match direction {
                SortDirection::Asc => Order::Asc,
                SortDirection::Desc => Order::Desc,
            };
            query = query.order_by(sort_column(*key), sort_order);
        }

        let models = query
            .limit(page.limit)
            .offset(page.offset())
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch listings: {}", e);
                CoreError::InternalServerError
            })?;

        models.into_iter().map(Listing::try_from).collect()
    }

    async fn count(&self, category: ListingCategory, filter: FilterSet) -> Result<u64, CoreError> {
        ListingEntity::find()
            .filter(build_condition(category, &filter))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to count listings: {}", e);
                CoreError::InternalServerError
            })
    }

    async fn find_by_id(
        &self,
        category: ListingCategory,
        id: Uuid,
    ) -> Result<Option<Listing>, CoreError> {
        let model = ListingEntity::find()
            .filter(ListingColumn::Id.eq(id))
            .filter(ListingColumn::Category.eq(category.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get listing by id: {}", e);
                CoreError::InternalServerError
            })?;

        model.map(Listing::try_from).transpose()
    }

    async fn insert(&self, listing: Listing) -> Result<Listing, CoreError> {
        let category = listing.category();
        ListingEntity::insert(to_active_model(listing))
            .exec_with_returning(&self.db)
            .await
            .map_err(|e| map_write_err(e, category))
            .and_then(Listing::try_from)
    }

    async fn update(&self, listing: Listing) -> Result<Listing, CoreError> {
        let category = listing.category();
        let id = listing.id;
        ListingEntity::update(to_active_model(listing))
            .filter(ListingColumn::Id.eq(id))
            .filter(ListingColumn::Category.eq(category.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| map_write_err(e, category))
            .and_then(Listing::try_from)
    }

    async fn delete(&self, category: ListingCategory, id: Uuid) -> Result<bool, CoreError> {
        let result = ListingEntity::delete_many()
            .filter(ListingColumn::Id.eq(id))
            .filter(ListingColumn::Category.eq(category.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete listing: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(result.rows_affected > 0)
    }

    async fn search(
        &self,
        category: ListingCategory,
        query: String,
        gate_active: bool,
        page: PageRequest,
    ) -> Result<(Vec<Listing>, u64), CoreError> {
        let gate = if gate_active {
            " AND is_active = TRUE"
        } else {
            ""
        };

        let select_sql = format!(
            "SELECT * FROM listings \
             WHERE category = $1{gate} AND ({SEARCH_VECTOR}) @@ plainto_tsquery('english', $2) \
             ORDER BY ts_rank({SEARCH_VECTOR}, plainto_tsquery('english', $2)) DESC \
             LIMIT $3 OFFSET $4"
        );
        let models = ListingEntity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                select_sql,
                [
                    category.as_str().into(),
                    query.clone().into(),
                    (page.limit as i64).into(),
                    (page.offset() as i64).into(),
                ],
            ))
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to search listings: {}", e);
                CoreError::InternalServerError
            })?;

        let items = models
            .into_iter()
            .map(Listing::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let count_sql = format!(
            "SELECT COUNT(*) AS count FROM listings \
             WHERE category = $1{gate} AND ({SEARCH_VECTOR}) @@ plainto_tsquery('english', $2)"
        );
        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                count_sql,
                [category.as_str().into(), query.into()],
            ))
            .await
            .map_err(|e| {
                error!("Failed to count search results: {}", e);
                CoreError::InternalServerError
            })?;

        let total = row
            .and_then(|row| row.try_get::<i64>("", "count").ok())
            .unwrap_or(0);

        Ok((items, total as u64))
    }

    async fn upcoming(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        limit: u64,
    ) -> Result<Vec<Listing>, CoreError> {
        let models = ListingEntity::find()
            .filter(ListingColumn::Category.eq(ListingCategory::NewLaunch.as_str()))
            .filter(ListingColumn::IsActive.eq(true))
            .filter(ListingColumn::LaunchingDate.gte(from))
            .filter(ListingColumn::LaunchingDate.lte(to))
            .order_by(ListingColumn::LaunchingDate, Order::Asc)
            .order_by(ListingColumn::Priority, Order::Desc)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch upcoming launches: {}", e);
                CoreError::InternalServerError
            })?;

        models.into_iter().map(Listing::try_from).collect()
    }

    async fn project_stats(&self) -> Result<ProjectStats, CoreError> {
        let overview_stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              COUNT(*)::bigint AS total_projects,
              COALESCE(ROUND(AVG(min_price)::numeric, 2), 0)::float8 AS avg_min_price,
              COALESCE(ROUND(AVG(max_price)::numeric, 2), 0)::float8 AS avg_max_price,
              COALESCE(SUM(total_units), 0)::bigint AS total_units
            FROM listings
            WHERE category = $1
            "#,
            [ListingCategory::Project.as_str().into()],
        );

        let row = self.db.query_one(overview_stmt).await.map_err(|e| {
            error!("Failed to compute project overview stats: {}", e);
            CoreError::InternalServerError
        })?;

        let overview = match row {
            Some(row) => ProjectStatsOverview {
                total_projects: row.try_get::<i64>("", "total_projects").unwrap_or(0),
                avg_min_price: row.try_get::<f64>("", "avg_min_price").unwrap_or(0.0),
                avg_max_price: row.try_get::<f64>("", "avg_max_price").unwrap_or(0.0),
                total_units: row.try_get::<i64>("", "total_units").unwrap_or(0),
            },
            None => ProjectStatsOverview {
                total_projects: 0,
                avg_min_price: 0.0,
                avg_max_price: 0.0,
                total_units: 0,
            },
        };

        let by_status = self
            .status_breakdown(ListingCategory::Project)
            .await?;
        let by_city = self.city_breakdown(ListingCategory::Project).await?;

        Ok(ProjectStats {
            overview,
            by_status,
            by_city,
        })
    }

    async fn new_launch_stats(&self, now: DateTime<Utc>) -> Result<NewLaunchStats, CoreError> {
        let overview_stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              COUNT(*)::bigint AS total_new_launches,
              COALESCE(SUM(CASE WHEN is_active THEN 1 ELSE 0 END), 0)::bigint AS active_new_launches,
              COALESCE(ROUND(AVG(min_price)::numeric, 2), 0)::float8 AS avg_min_price,
              COALESCE(ROUND(AVG(max_price)::numeric, 2), 0)::float8 AS avg_max_price,
              COALESCE(SUM(total_units), 0)::bigint AS total_units
            FROM listings
            WHERE category = $1
            "#,
            [ListingCategory::NewLaunch.as_str().into()],
        );

        let row = self.db.query_one(overview_stmt).await.map_err(|e| {
            error!("Failed to compute new launch overview stats: {}", e);
            CoreError::InternalServerError
        })?;

        let overview = match row {
            Some(row) => NewLaunchStatsOverview {
                total_new_launches: row.try_get::<i64>("", "total_new_launches").unwrap_or(0),
                active_new_launches: row.try_get::<i64>("", "active_new_launches").unwrap_or(0),
                avg_min_price: row.try_get::<f64>("", "avg_min_price").unwrap_or(0.0),
                avg_max_price: row.try_get::<f64>("", "avg_max_price").unwrap_or(0.0),
                total_units: row.try_get::<i64>("", "total_units").unwrap_or(0),
            },
            None => NewLaunchStatsOverview {
                total_new_launches: 0,
                active_new_launches: 0,
                avg_min_price: 0.0,
                avg_max_price: 0.0,
                total_units: 0,
            },
        };

        let by_status = self
            .status_breakdown(ListingCategory::NewLaunch)
            .await?;

        let upcoming_stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT COUNT(*)::bigint AS count
            FROM listings
            WHERE category = $1 AND is_active = TRUE AND launching_date >= $2
            "#,
            [ListingCategory::NewLaunch.as_str().into(), now.into()],
        );
        let upcoming_count = self
            .db
            .query_one(upcoming_stmt)
            .await
            .map_err(|e| {
                error!("Failed to count upcoming launches: {}", e);
                CoreError::InternalServerError
            })?
            .and_then(|row| row.try_get::<i64>("", "count").ok())
            .unwrap_or(0);

        Ok(NewLaunchStats {
            overview,
            by_status,
            upcoming_count,
        })
    }
}

impl PostgresListingRepository {
    async fn status_breakdown(
        &self,
        category: ListingCategory,
    ) -> Result<Vec<StatusCount>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT status, COUNT(*)::bigint AS count
            FROM listings
            WHERE category = $1
            GROUP BY status
            "#,
            [category.as_str().into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to compute status breakdown: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let status = row.try_get::<String>("", "status").ok()?;
                let count = row.try_get::<i64>("", "count").ok()?;
                Some(StatusCount { status, count })
            })
            .collect())
    }

    async fn city_breakdown(&self, category: ListingCategory) -> Result<Vec<CityCount>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT city, COUNT(*)::bigint AS count
            FROM listings
            WHERE category = $1
            GROUP BY city
            ORDER BY count DESC
            LIMIT 10
            "#,
            [category.as_str().into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to compute city breakdown: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let city = row.try_get::<String>("", "city").ok()?;
                let count = row.try_get::<i64>("", "count").ok()?;
                Some(CityCount { city, count })
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_patterns_are_escaped() {
        assert_eq!(escape_like("100%_pure"), "100\\%\\_pure");
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn every_sort_key_maps_to_a_column() {
        let keys = [
            SortKey::CreatedAt,
            SortKey::UpdatedAt,
            SortKey::Name,
            SortKey::MinPrice,
            SortKey::MaxPrice,
            SortKey::LaunchingDate,
            SortKey::Priority,
            SortKey::City,
        ];
        for key in keys {
            // Exhaustiveness is what matters; the match itself would fail to
            // compile if a key were missing.
            let _ = sort_column(key);
        }
    }

    #[test]
    fn conjunction_carries_every_clause() {
        let narrowed = build_condition(
            ListingCategory::Project,
            &FilterSet::new()
                .and(FilterClause::Contains {
                    field: TextField::City,
                    value: "Pune".to_string(),
                })
                .and(FilterClause::AtLeast {
                    field: NumericField::MinPrice,
                    value: 5_000_000,
                }),
        );
        let rendered = format!("{narrowed:?}");
        assert!(rendered.contains("%Pune%"));
        assert!(rendered.contains("5000000"));
        assert!(rendered.contains("project"));
    }
}
