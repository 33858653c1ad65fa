//! Contact entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::ContactMessage;
use sqlx::FromRow;

/// Database row mapping for the contacts table.
#[derive(Debug, Clone, FromRow)]
pub struct ContactEntity {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl From<ContactEntity> for ContactMessage {
    fn from(entity: ContactEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            message: entity.message,
            created_at: entity.created_at,
        }
    }
}
