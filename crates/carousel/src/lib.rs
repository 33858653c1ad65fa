//! Homepage wheel slider.
//!
//! Panels sit on a vertical ring and the ring eases toward a target angle on
//! every frame. The panel closest to the viewer is marked active. Step
//! buttons and scroll input move the target; scroll input snaps to the
//! nearest panel once it goes quiet, and an idle timer advances the wheel
//! one panel at a fixed period.
//!
//! - [`RotationController`] holds the state and is driven explicitly
//!   (`tick` per frame, `advance` for virtual time), which keeps it testable.
//! - [`FrameLoop`] drives a shared controller from the tokio clock.
//! - [`PanelSource`] loads slider images and partner logos from the site API.

pub mod config;
pub mod controller;
pub mod error;
pub mod frame_loop;
pub mod geometry;
pub mod render;
pub mod source;
pub mod timers;

pub use config::WheelConfig;
pub use controller::{RotationController, StepDirection};
pub use error::CarouselError;
pub use frame_loop::{launch, FrameLoop, SharedController, WheelHandle};
pub use render::{PanelView, RenderSurface, WheelView};
pub use source::{PanelSet, PanelSource};
pub use timers::{TimerKey, Timers};
