//! Contact repository for database operations.

use sqlx::PgPool;

use crate::entities::ContactEntity;
use crate::metrics::timed;

/// Repository for contact form submissions.
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Creates a new ContactRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Store a contact message.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactEntity, sqlx::Error> {
        timed(
            "create_contact",
            sqlx::query_as::<_, ContactEntity>(
                r#"
                INSERT INTO contacts (name, email, message)
                VALUES ($1, $2, $3)
                RETURNING id, name, email, message, created_at
                "#,
            )
            .bind(name)
            .bind(email)
            .bind(message)
            .fetch_one(&self.pool),
        )
        .await
    }

    /// All contact messages, newest first.
    pub async fn find_all(&self) -> Result<Vec<ContactEntity>, sqlx::Error> {
        timed(
            "list_contacts",
            sqlx::query_as::<_, ContactEntity>(
                r#"
                SELECT id, name, email, message, created_at
                FROM contacts
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await
    }
}
