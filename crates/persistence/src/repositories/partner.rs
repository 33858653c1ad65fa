//! Partner repository for database operations.

use sqlx::PgPool;

use crate::entities::PartnerEntity;
use crate::metrics::timed;

/// Repository for partner logo rows.
#[derive(Clone)]
pub struct PartnerRepository {
    pool: PgPool,
}

impl PartnerRepository {
    /// Creates a new PartnerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a partner.
    pub async fn create(&self, name: &str, logo_url: &str) -> Result<PartnerEntity, sqlx::Error> {
        timed(
            "create_partner",
            sqlx::query_as::<_, PartnerEntity>(
                r#"
                INSERT INTO partners (name, logo_url)
                VALUES ($1, $2)
                RETURNING id, name, logo_url, created_at
                "#,
            )
            .bind(name)
            .bind(logo_url)
            .fetch_one(&self.pool),
        )
        .await
    }

    /// All partners in ascending id order.
    pub async fn find_all(&self) -> Result<Vec<PartnerEntity>, sqlx::Error> {
        timed(
            "list_partners",
            sqlx::query_as::<_, PartnerEntity>(
                r#"
                SELECT id, name, logo_url, created_at
                FROM partners
                ORDER BY id ASC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await
    }

    /// Delete a partner.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = timed(
            "delete_partner",
            sqlx::query("DELETE FROM partners WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;
        Ok(result.rows_affected())
    }
}
