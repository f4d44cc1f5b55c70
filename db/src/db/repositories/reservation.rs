// Reservation repository implementation

use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::ReservationSummary;
use tracing::instrument;

/// Number of reservations returned when a caller does not ask for more
pub const DEFAULT_LIMIT: i64 = 10;

/// Repository for reservation-related database operations
#[derive(Clone)]
pub struct ReservationRepository {
    pool: DbPool,
}

impl ReservationRepository {
    /// Create a new ReservationRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Find the reservations made by a guest
    ///
    /// Each row carries the reserved property's title, nightly cost, and
    /// average review rating, ordered by start date, capped at `limit`
    /// (default 10).
    #[instrument(skip(self))]
    pub async fn find_by_guest_id(
        &self,
        guest_id: i32,
        limit: Option<i64>,
    ) -> Result<Vec<ReservationSummary>, DatabaseError> {
        let limit = limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT);

        let reservations = sqlx::query_as::<_, ReservationSummary>(
            r#"
            SELECT reservations.id, properties.title, properties.cost_per_night,
                reservations.start_date,
                avg(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date
            LIMIT $2
            "#,
        )
        .bind(guest_id)
        .bind(limit)
        .fetch_all(self.pool.pool())
        .await?;

        tracing::debug!(
            guest_id = guest_id,
            count = reservations.len(),
            "Found reservations for guest"
        );
        Ok(reservations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    #[tokio::test]
    async fn test_unreachable_store_rejects_with_error() {
        // A lazily-created pool pointed at a closed port fails at query time
        // with an error, never an empty row set
        let config = DatabaseConfig {
            url: "postgresql://nobody@127.0.0.1:1/unreachable".to_string(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
        };
        let pool = DbPool::connect_lazy(&config).unwrap();
        let repository = ReservationRepository::new(pool);

        let result = repository.find_by_guest_id(1, None).await;
        assert!(result.is_err());
    }
}
