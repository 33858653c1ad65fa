//! Domain models for the showcase site.

pub mod common;
pub mod contact;
pub mod partner;
pub mod slider;

pub use common::SuccessResponse;
pub use contact::ContactMessage;
pub use partner::Partner;
pub use slider::SliderItem;
