//! Adds the sample slider images to a running site.
//!
//! Usage: `seed-slider [BASE_URL]`. The base URL falls back to `SITE_URL`
//! and then to `http://localhost:3000`.

use std::time::Duration;

use anyhow::{Context, Result};
use carousel::PanelSource;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const SAMPLE_SLIDER_IMAGES: [&str; 2] = [
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=1920&h=1080&fit=crop",
    "https://images.unsplash.com/photo-1558494949-efc025793ad1?q=80&w=1920&h=1080&fit=crop",
];

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SITE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let source = PanelSource::new(base_url, Duration::from_secs(10))
        .context("Failed to build HTTP client")?;
    let added = source
        .add_slider_images(SAMPLE_SLIDER_IMAGES)
        .await
        .with_context(|| format!("Failed to add slider images to {}", source.base_url()))?;

    info!(count = added.len(), "Slider seeding finished");
    Ok(())
}
