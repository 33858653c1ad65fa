//! Partner entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Partner;
use sqlx::FromRow;

/// Database row mapping for the partners table.
#[derive(Debug, Clone, FromRow)]
pub struct PartnerEntity {
    pub id: i64,
    pub name: String,
    pub logo_url: String,
    pub created_at: DateTime<Utc>,
}

impl From<PartnerEntity> for Partner {
    fn from(entity: PartnerEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            logo_url: entity.logo_url,
            created_at: entity.created_at,
        }
    }
}
