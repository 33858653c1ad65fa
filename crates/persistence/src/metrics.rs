//! Database metrics.

use metrics::{counter, gauge, histogram};
use sqlx::PgPool;
use std::future::Future;
use std::time::Instant;

/// Record how long a named query took.
pub fn record_query_duration(query: &'static str, duration_secs: f64) {
    histogram!("database_query_duration_seconds", "query" => query).record(duration_secs);
}

/// Count a failed query.
pub fn record_query_error(query: &'static str) {
    counter!("database_query_errors_total", "query" => query).increment(1);
}

/// Snapshot the pool's connection counts as gauges.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();

    gauge!("database_connections_active").set(size.saturating_sub(idle) as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Awaits a query, recording its duration and counting it when it fails.
///
/// ```ignore
/// timed("list_partners", sqlx::query_as(SQL).fetch_all(&pool)).await
/// ```
pub async fn timed<T, F>(query: &'static str, fut: F) -> Result<T, sqlx::Error>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    let start = Instant::now();
    let result = fut.await;
    record_query_duration(query, start.elapsed().as_secs_f64());
    if result.is_err() {
        record_query_error(query);
    }
    result
}
