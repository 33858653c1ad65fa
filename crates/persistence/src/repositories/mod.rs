//! Repository implementations for database operations.

pub mod contact;
pub mod partner;
pub mod slider;

pub use contact::ContactRepository;
pub use partner::PartnerRepository;
pub use slider::SliderRepository;
