use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use persistence::{ContentStore, MemoryContentStore, PgContentStore};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    services::ServeDir,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::config::{Config, SecurityConfig};
use crate::middleware::{
    metrics_handler, metrics_middleware, security_headers_middleware, trace_id,
};
use crate::routes::{contact, health, partners, slider};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub config: Arc<Config>,
}

/// Opens the content store selected by configuration.
///
/// With a database URL this connects, migrates and seeds PostgreSQL. Without
/// one the site runs on a seeded in-memory store.
pub async fn connect_store(config: &Config) -> anyhow::Result<Arc<dyn ContentStore>> {
    if config.database.url().is_none() {
        info!("No database URL configured. Running in local mode (in-memory).");
        return Ok(Arc::new(MemoryContentStore::seeded()));
    }

    let db_config: persistence::db::DatabaseConfig = (&config.database).into();
    let pool = persistence::db::create_pool(&db_config).await?;

    info!("Running database migrations...");
    persistence::db::run_migrations(&pool).await?;
    info!("Database tables are ready");

    let seeded = persistence::db::seed_slider_images(&pool).await?;
    if seeded > 0 {
        info!(count = seeded, "Seeded default slider images");
    }

    Ok(Arc::new(PgContentStore::new(pool)))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if security.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = security
        .cors_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn create_app(config: Config, store: Arc<dyn ContentStore>) -> Router {
    let config = Arc::new(config);
    let state = AppState {
        store,
        config: config.clone(),
    };

    let api_routes = Router::new()
        .route(
            "/api/contact",
            get(contact::list_contacts).post(contact::submit_contact),
        )
        .route(
            "/api/slider",
            get(slider::list_slider_items).post(slider::create_slider_item),
        )
        .route("/api/slider/:id", delete(slider::delete_slider_item))
        .route(
            "/api/partners",
            get(partners::list_partners).post(partners::create_partner),
        )
        .route("/api/partners/:id", delete(partners::delete_partner));

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .fallback_service(ServeDir::new(&config.server.static_dir))
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors_layer(&config.security))
        .with_state(state)
}
