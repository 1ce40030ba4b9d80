//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;
use crate::utils::db_error::is_unique_violation_on_alias;

/// PostgreSQL repository for alias→URL storage and resolution.
///
/// Alias uniqueness is enforced by the `urls_alias_key` constraint, so a
/// colliding insert is rejected atomically by the database even under
/// concurrent writers.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save_url(&self, url: &str, alias: &str) -> Result<i64, StoreError> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO urls (alias, url)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(alias)
        .bind(url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_alias(&e) {
                StoreError::alias_exists(alias)
            } else {
                StoreError::from(e)
            }
        })?;

        Ok(id)
    }

    async fn get_url(&self, alias: &str) -> Result<String, StoreError> {
        let url = sqlx::query_scalar::<_, String>(
            r#"
            SELECT url FROM urls
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await?;

        url.ok_or_else(|| StoreError::not_found(alias))
    }
}
