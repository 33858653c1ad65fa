//! Database connection pool management.

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::repositories::SliderRepository;
use crate::store::seed::DATABASE_SLIDER_IMAGES;

/// Schema migrations embedded at build time.
pub static MIGRATOR: Migrator = sqlx::migrate!("./src/migrations");

/// Database configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    /// Require TLS without verifying the server certificate (hosted databases
    /// with self-signed certificates).
    pub require_tls: bool,
}

/// Creates a PostgreSQL connection pool with the given configuration.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let mut options = PgConnectOptions::from_str(&config.url)?;
    if config.require_tls {
        options = options.ssl_mode(PgSslMode::Require);
    }

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect_with(options)
        .await
}

/// Applies the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Inserts the default slider images when the table is empty.
///
/// Returns the number of rows inserted.
pub async fn seed_slider_images(pool: &PgPool) -> Result<usize, sqlx::Error> {
    let repo = SliderRepository::new(pool.clone());
    if repo.count().await? > 0 {
        return Ok(0);
    }

    info!("Seeding initial slider images...");
    for image_url in DATABASE_SLIDER_IMAGES {
        repo.create(image_url).await?;
    }
    Ok(DATABASE_SLIDER_IMAGES.len())
}
