//! Domain layer for the showcase site backend.
//!
//! This crate contains:
//! - Domain models (SliderItem, Partner, ContactMessage)
//! - Request and response payloads with their validation rules

pub mod models;
