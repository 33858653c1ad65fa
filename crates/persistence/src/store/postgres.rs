//! PostgreSQL-backed content store.

use async_trait::async_trait;
use domain::models::contact::NewContactMessage;
use domain::models::partner::NewPartner;
use domain::models::slider::NewSliderItem;
use domain::models::{ContactMessage, Partner, SliderItem};
use sqlx::PgPool;

use super::{ContentStore, StoreBackend, StoreError};
use crate::metrics::record_pool_metrics;
use crate::repositories::{ContactRepository, PartnerRepository, SliderRepository};

/// Content store over a PostgreSQL pool.
#[derive(Clone)]
pub struct PgContentStore {
    pool: PgPool,
    contacts: ContactRepository,
    slider: SliderRepository,
    partners: PartnerRepository,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            contacts: ContactRepository::new(pool.clone()),
            slider: SliderRepository::new(pool.clone()),
            partners: PartnerRepository::new(pool.clone()),
            pool,
        }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Postgres
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        record_pool_metrics(&self.pool);
        Ok(())
    }

    async fn create_contact(&self, new: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let entity = self
            .contacts
            .create(&new.name, &new.email, &new.message)
            .await?;
        Ok(entity.into())
    }

    async fn list_contacts(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let entities = self.contacts.find_all().await?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn create_slider_item(&self, new: NewSliderItem) -> Result<SliderItem, StoreError> {
        let entity = self.slider.create(&new.image_url).await?;
        Ok(entity.into())
    }

    async fn list_slider_items(&self) -> Result<Vec<SliderItem>, StoreError> {
        let entities = self.slider.find_all().await?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn delete_slider_item(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.slider.delete(id).await? > 0)
    }

    async fn create_partner(&self, new: NewPartner) -> Result<Partner, StoreError> {
        let entity = self.partners.create(&new.name, &new.logo_url).await?;
        Ok(entity.into())
    }

    async fn list_partners(&self) -> Result<Vec<Partner>, StoreError> {
        let entities = self.partners.find_all().await?;
        Ok(entities.into_iter().map(Into::into).collect())
    }

    async fn delete_partner(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.partners.delete(id).await? > 0)
    }
}
