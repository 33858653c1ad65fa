//! Slider image entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::SliderItem;
use sqlx::FromRow;

/// Database row mapping for the slider_images table.
#[derive(Debug, Clone, FromRow)]
pub struct SliderImageEntity {
    pub id: i64,
    pub image_url: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<SliderImageEntity> for SliderItem {
    fn from(entity: SliderImageEntity) -> Self {
        Self {
            id: entity.id,
            image_url: entity.image_url,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}
