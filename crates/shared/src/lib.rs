//! Shared utilities and common types for the showcase site backend.
//!
//! This crate provides functionality used across the other crates:
//! - Common validation logic for submitted form fields

pub mod validation;
