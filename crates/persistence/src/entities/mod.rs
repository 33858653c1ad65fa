//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod contact;
pub mod partner;
pub mod slider;

pub use contact::ContactEntity;
pub use partner::PartnerEntity;
pub use slider::SliderImageEntity;
