//! Loads wheel content from the site API.

use std::time::Duration;

use domain::models::{Partner, SliderItem};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::CarouselError;

/// Content fetched once before the wheel is mounted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelSet {
    /// Active slider images in ascending id order, one per wheel panel.
    pub slides: Vec<SliderItem>,
    /// Partner logos in ascending id order.
    pub partners: Vec<Partner>,
}

impl PanelSet {
    /// Number of wheel panels; zero means the wheel must not be mounted.
    pub fn panel_count(&self) -> usize {
        self.slides.len()
    }

    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.slides.iter().map(|s| s.image_url.as_str())
    }

    pub fn logo_urls(&self) -> impl Iterator<Item = &str> {
        self.partners.iter().map(|p| p.logo_url.as_str())
    }
}

#[derive(Serialize)]
struct NewImage<'a> {
    image_url: &'a str,
}

/// HTTP client for the slider and partner endpoints.
#[derive(Debug, Clone)]
pub struct PanelSource {
    client: Client,
    base_url: String,
}

impl PanelSource {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CarouselError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/slider`
    pub async fn fetch_slider(&self) -> Result<Vec<SliderItem>, CarouselError> {
        self.get_json("/api/slider").await
    }

    /// `GET /api/partners`
    pub async fn fetch_partners(&self) -> Result<Vec<Partner>, CarouselError> {
        self.get_json("/api/partners").await
    }

    /// Fetches slider images and partners. Inactive slider images are
    /// dropped.
    pub async fn load(&self) -> Result<PanelSet, CarouselError> {
        let (slides, partners) = tokio::try_join!(self.fetch_slider(), self.fetch_partners())?;
        let slides: Vec<SliderItem> = slides.into_iter().filter(|s| s.active).collect();

        info!(
            slides = slides.len(),
            partners = partners.len(),
            "wheel content loaded"
        );
        Ok(PanelSet { slides, partners })
    }

    /// `POST /api/slider`
    pub async fn add_slider_image(&self, image_url: &str) -> Result<SliderItem, CarouselError> {
        let url = self.url("/api/slider");
        debug!(url = %url, image_url, "adding slider image");

        let response = self
            .client
            .post(&url)
            .json(&NewImage { image_url })
            .send()
            .await?;
        Self::check_status(&url, response.status())?;
        Ok(response.json().await?)
    }

    /// Posts each image in order and returns the created rows. Stops at the
    /// first failure; images already added stay added.
    pub async fn add_slider_images<'a, I>(
        &self,
        image_urls: I,
    ) -> Result<Vec<SliderItem>, CarouselError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut added = Vec::new();
        for image_url in image_urls {
            let item = self.add_slider_image(image_url).await?;
            info!(slider_id = item.id, image_url = %item.image_url, "Added slider image");
            added.push(item);
        }
        Ok(added)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CarouselError> {
        let url = self.url(path);
        debug!(url = %url, "fetching wheel content");

        let response = self.client.get(&url).send().await?;
        Self::check_status(&url, response.status())?;
        Ok(response.json().await?)
    }

    fn check_status(url: &str, status: reqwest::StatusCode) -> Result<(), CarouselError> {
        if status.is_success() {
            return Ok(());
        }
        Err(CarouselError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn slide(id: i64, active: bool) -> SliderItem {
        SliderItem {
            id,
            image_url: format!("/img/{id}.jpg"),
            active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let source = PanelSource::with_client(Client::new(), "http://localhost:3000/");
        assert_eq!(source.base_url(), "http://localhost:3000");
        assert_eq!(source.url("/api/slider"), "http://localhost:3000/api/slider");
    }

    #[test]
    fn test_panel_set_accessors() {
        let set = PanelSet {
            slides: vec![slide(1, true), slide(2, true)],
            partners: vec![],
        };
        assert_eq!(set.panel_count(), 2);
        assert_eq!(
            set.image_urls().collect::<Vec<_>>(),
            vec!["/img/1.jpg", "/img/2.jpg"]
        );
        assert_eq!(PanelSet::default().panel_count(), 0);
    }

    #[test]
    fn test_check_status() {
        assert!(PanelSource::check_status("u", reqwest::StatusCode::OK).is_ok());
        match PanelSource::check_status("u", reqwest::StatusCode::BAD_GATEWAY) {
            Err(CarouselError::Status { url, status }) => {
                assert_eq!(url, "u");
                assert_eq!(status, 502);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
