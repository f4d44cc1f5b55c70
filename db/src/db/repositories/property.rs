// Property repository implementation

use super::fragment::{SqlArg, SqlFragment};
use super::queries::property_queries;
use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::{NewProperty, Property, PropertyListing};
use tracing::instrument;

/// Number of rows returned when a caller does not ask for a specific limit
pub const DEFAULT_LIMIT: i64 = 10;

/// Filter for searching properties
///
/// Every field is optional; an absent field places no constraint on that
/// dimension. Price bounds are in cents and apply independently, so a
/// minimum-only or maximum-only search narrows results on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// Partial, case-sensitive match against the city name
    pub city: Option<String>,
    pub owner_id: Option<i32>,
    pub minimum_price_per_night: Option<i32>,
    pub maximum_price_per_night: Option<i32>,
    /// Keeps only properties whose average review rating is at least this
    pub minimum_rating: Option<f64>,
    /// Row cap; `None` or a non-positive value falls back to [`DEFAULT_LIMIT`]
    pub limit: Option<i64>,
}

impl PropertyFilter {
    fn effective_limit(&self) -> i64 {
        self.limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT)
    }
}

/// Build the property search statement for a filter
///
/// Criteria are applied in a fixed order: city, owner, price range, minimum
/// rating. Each present criterion appends exactly one argument and one
/// predicate, so placeholder numbering matches argument position for every
/// subset of filters. The rating predicate lands in `HAVING` because it
/// references the aggregate.
pub fn build_search_query(filter: &PropertyFilter) -> SqlFragment {
    let mut fragment = SqlFragment::new(format!(
        "SELECT {}\nFROM properties\nJOIN property_reviews ON properties.id = property_reviews.property_id",
        property_queries::SELECT_LISTING_COLUMNS
    ));

    if let Some(city) = &filter.city {
        fragment.predicate("properties.city LIKE", SqlArg::Text(format!("%{}%", city)));
    }

    if let Some(owner_id) = filter.owner_id {
        fragment.predicate("properties.owner_id =", SqlArg::Int(owner_id as i64));
    }

    if let Some(minimum) = filter.minimum_price_per_night {
        fragment.predicate("properties.cost_per_night >=", SqlArg::Int(minimum as i64));
    }

    if let Some(maximum) = filter.maximum_price_per_night {
        fragment.predicate("properties.cost_per_night <=", SqlArg::Int(maximum as i64));
    }

    fragment.push("\nGROUP BY properties.id");

    if let Some(rating) = filter.minimum_rating {
        let n = fragment.bind(SqlArg::Float(rating));
        fragment.push(&format!("\nHAVING avg(property_reviews.rating) >= ${}", n));
    }

    fragment.push("\nORDER BY properties.cost_per_night");

    let n = fragment.bind(SqlArg::Int(filter.effective_limit()));
    fragment.push(&format!("\nLIMIT ${}", n));

    fragment
}

/// Repository for property-related database operations
#[derive(Clone)]
pub struct PropertyRepository {
    pool: DbPool,
}

impl PropertyRepository {
    /// Create a new PropertyRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Search properties matching all specified criteria
    ///
    /// Results carry each property's average review rating and come back
    /// ordered by ascending nightly cost, capped at the filter's limit.
    ///
    /// # Errors
    /// Returns `DatabaseError::QueryFailed` when the store rejects the
    /// statement; no retry, no partial results.
    #[instrument(skip(self))]
    pub async fn find_with_filter(
        &self,
        filter: &PropertyFilter,
    ) -> Result<Vec<PropertyListing>, DatabaseError> {
        let fragment = build_search_query(filter);
        tracing::debug!(sql = fragment.sql(), "Executing property search");

        let listings: Vec<PropertyListing> = fragment.fetch_all(self.pool.pool()).await?;

        tracing::debug!(count = listings.len(), "Found properties with filter");
        Ok(listings)
    }

    /// Create a new property
    #[instrument(skip(self, property))]
    pub async fn create(&self, property: &NewProperty) -> Result<Property, DatabaseError> {
        let created = sqlx::query_as::<_, Property>(
            r#"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url,
                cover_photo_url, cost_per_night, parking_spaces,
                number_of_bathrooms, number_of_bedrooms, country,
                street, city, province, post_code
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(property.owner_id)
        .bind(&property.title)
        .bind(&property.description)
        .bind(&property.thumbnail_photo_url)
        .bind(&property.cover_photo_url)
        .bind(property.cost_per_night)
        .bind(property.parking_spaces)
        .bind(property.number_of_bathrooms)
        .bind(property.number_of_bedrooms)
        .bind(&property.country)
        .bind(&property.street)
        .bind(&property.city)
        .bind(&property.province)
        .bind(&property.post_code)
        .fetch_one(self.pool.pool())
        .await?;

        tracing::info!(
            property_id = created.id,
            owner_id = created.owner_id,
            "Property created"
        );
        Ok(created)
    }
}
