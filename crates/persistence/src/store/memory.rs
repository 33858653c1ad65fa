//! In-memory content store used when no database is configured.
//!
//! Contents live for the lifetime of the process. Identifiers come from
//! per-collection sequences and are never reused after a delete.

use async_trait::async_trait;
use chrono::Utc;
use domain::models::contact::NewContactMessage;
use domain::models::partner::NewPartner;
use domain::models::slider::NewSliderItem;
use domain::models::{ContactMessage, Partner, SliderItem};
use tokio::sync::RwLock;

use super::seed::{LOCAL_PARTNERS, LOCAL_SLIDER_IMAGES};
use super::{ContentStore, StoreBackend, StoreError};

#[derive(Debug)]
struct Collections {
    contacts: Vec<ContactMessage>,
    slider: Vec<SliderItem>,
    partners: Vec<Partner>,
    next_contact_id: i64,
    next_slider_id: i64,
    next_partner_id: i64,
}

impl Default for Collections {
    fn default() -> Self {
        Self {
            contacts: Vec::new(),
            slider: Vec::new(),
            partners: Vec::new(),
            next_contact_id: 1,
            next_slider_id: 1,
            next_partner_id: 1,
        }
    }
}

impl Collections {
    fn push_slider(&mut self, image_url: String) -> SliderItem {
        let item = SliderItem {
            id: self.next_slider_id,
            image_url,
            active: true,
            created_at: Utc::now(),
        };
        self.next_slider_id += 1;
        self.slider.push(item.clone());
        item
    }

    fn push_partner(&mut self, name: String, logo_url: String) -> Partner {
        let partner = Partner {
            id: self.next_partner_id,
            name,
            logo_url,
            created_at: Utc::now(),
        };
        self.next_partner_id += 1;
        self.partners.push(partner.clone());
        partner
    }
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryContentStore {
    inner: RwLock<Collections>,
}

impl MemoryContentStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with the default slider images and partners.
    pub fn seeded() -> Self {
        let mut collections = Collections::default();
        for image_url in LOCAL_SLIDER_IMAGES {
            collections.push_slider(image_url.to_string());
        }
        for (name, logo_url) in LOCAL_PARTNERS {
            collections.push_partner(name.to_string(), logo_url.to_string());
        }
        Self {
            inner: RwLock::new(collections),
        }
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn create_contact(&self, new: NewContactMessage) -> Result<ContactMessage, StoreError> {
        let mut inner = self.inner.write().await;
        let contact = ContactMessage {
            id: inner.next_contact_id,
            name: new.name,
            email: new.email,
            message: new.message,
            created_at: Utc::now(),
        };
        inner.next_contact_id += 1;
        inner.contacts.push(contact.clone());
        Ok(contact)
    }

    async fn list_contacts(&self) -> Result<Vec<ContactMessage>, StoreError> {
        let mut contacts = self.inner.read().await.contacts.clone();
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(contacts)
    }

    async fn create_slider_item(&self, new: NewSliderItem) -> Result<SliderItem, StoreError> {
        Ok(self.inner.write().await.push_slider(new.image_url))
    }

    async fn list_slider_items(&self) -> Result<Vec<SliderItem>, StoreError> {
        Ok(self.inner.read().await.slider.clone())
    }

    async fn delete_slider_item(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.slider.len();
        inner.slider.retain(|item| item.id != id);
        Ok(inner.slider.len() != before)
    }

    async fn create_partner(&self, new: NewPartner) -> Result<Partner, StoreError> {
        Ok(self.inner.write().await.push_partner(new.name, new.logo_url))
    }

    async fn list_partners(&self) -> Result<Vec<Partner>, StoreError> {
        Ok(self.inner.read().await.partners.clone())
    }

    async fn delete_partner(&self, id: i64) -> Result<bool, StoreError> {
        let mut inner = self.inner.write().await;
        let before = inner.partners.len();
        inner.partners.retain(|partner| partner.id != id);
        Ok(inner.partners.len() != before)
    }
}
