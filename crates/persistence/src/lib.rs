//! Persistence layer for the showcase site backend.
//!
//! This crate contains:
//! - Database connection management, migrations and seeding
//! - Entity definitions (database row mappings)
//! - Repository implementations
//! - The `ContentStore` abstraction with PostgreSQL and in-memory backends

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
pub mod store;

pub use store::{ContentStore, MemoryContentStore, PgContentStore, StoreBackend, StoreError};
