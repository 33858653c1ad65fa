//! HTTP route handlers.

pub mod contact;
pub mod health;
pub mod partners;
pub mod slider;
