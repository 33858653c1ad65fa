//! Slider image repository for database operations.

use sqlx::PgPool;

use crate::entities::SliderImageEntity;
use crate::metrics::timed;

/// Repository for slider image rows.
#[derive(Clone)]
pub struct SliderRepository {
    pool: PgPool,
}

impl SliderRepository {
    /// Creates a new SliderRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert an image. New images are active.
    pub async fn create(&self, image_url: &str) -> Result<SliderImageEntity, sqlx::Error> {
        timed(
            "create_slider_image",
            sqlx::query_as::<_, SliderImageEntity>(
                r#"
                INSERT INTO slider_images (image_url)
                VALUES ($1)
                RETURNING id, image_url, active, created_at
                "#,
            )
            .bind(image_url)
            .fetch_one(&self.pool),
        )
        .await
    }

    /// All images in ascending id order so the wheel keeps a stable layout.
    pub async fn find_all(&self) -> Result<Vec<SliderImageEntity>, sqlx::Error> {
        timed(
            "list_slider_images",
            sqlx::query_as::<_, SliderImageEntity>(
                r#"
                SELECT id, image_url, active, created_at
                FROM slider_images
                ORDER BY id ASC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await
    }

    /// Count stored images.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = timed(
            "count_slider_images",
            sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM slider_images")
                .fetch_one(&self.pool),
        )
        .await?;
        Ok(count.0)
    }

    /// Delete an image.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: i64) -> Result<u64, sqlx::Error> {
        let result = timed(
            "delete_slider_image",
            sqlx::query("DELETE FROM slider_images WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;
        Ok(result.rows_affected())
    }
}
