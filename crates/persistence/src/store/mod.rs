//! Content storage abstraction.
//!
//! The site runs against PostgreSQL when a database URL is configured and
//! falls back to a process-local in-memory store otherwise. Handlers only
//! see the `ContentStore` trait.

mod memory;
mod postgres;
pub mod seed;

use async_trait::async_trait;
use domain::models::contact::NewContactMessage;
use domain::models::partner::NewPartner;
use domain::models::slider::NewSliderItem;
use domain::models::{ContactMessage, Partner, SliderItem};
use thiserror::Error;

pub use memory::MemoryContentStore;
pub use postgres::PgContentStore;

/// Errors raised by a content store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Which backend a store writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreBackend::Postgres => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

/// CRUD operations for the site's three collections.
///
/// Ordering guarantees:
/// - contacts are returned newest first
/// - slider items and partners are returned in ascending id order
#[async_trait]
pub trait ContentStore: Send + Sync {
    fn backend(&self) -> StoreBackend;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;

    async fn create_contact(&self, new: NewContactMessage) -> Result<ContactMessage, StoreError>;

    async fn list_contacts(&self) -> Result<Vec<ContactMessage>, StoreError>;

    async fn create_slider_item(&self, new: NewSliderItem) -> Result<SliderItem, StoreError>;

    async fn list_slider_items(&self) -> Result<Vec<SliderItem>, StoreError>;

    /// Returns whether a row was removed.
    async fn delete_slider_item(&self, id: i64) -> Result<bool, StoreError>;

    async fn create_partner(&self, new: NewPartner) -> Result<Partner, StoreError>;

    async fn list_partners(&self) -> Result<Vec<Partner>, StoreError>;

    /// Returns whether a row was removed.
    async fn delete_partner(&self, id: i64) -> Result<bool, StoreError>;
}
