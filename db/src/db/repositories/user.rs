// User repository implementation

use super::queries::user_queries;
use crate::db::DbPool;
use crate::errors::DatabaseError;
use crate::models::{NewUser, User};
use tracing::instrument;

/// Repository for user-related database operations
#[derive(Clone)]
pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    /// Create a new UserRepository
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Find a user by email address
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE email = $1",
            user_queries::SELECT_ALL_COLUMNS
        ))
        .bind(email)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(user)
    }

    /// Find a user by ID
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {} FROM users WHERE id = $1",
            user_queries::SELECT_ALL_COLUMNS
        ))
        .bind(id)
        .fetch_optional(self.pool.pool())
        .await?;

        Ok(user)
    }

    /// Create a new user, returning the stored row with its assigned id
    #[instrument(skip(self, user))]
    pub async fn create(&self, user: &NewUser) -> Result<User, DatabaseError> {
        let created = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .fetch_one(self.pool.pool())
        .await?;

        tracing::info!(user_id = created.id, email = %created.email, "User created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;

    #[tokio::test]
    async fn test_user_repository_creation() {
        // Repository construction needs no live connection with a lazy pool
        let config = DatabaseConfig {
            url: "postgresql://nobody@127.0.0.1:1/unreachable".to_string(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
        };
        let pool = DbPool::connect_lazy(&config).unwrap();
        let _repository = UserRepository::new(pool);
    }
}
