//! Rendered wheel state as plain values.

use serde::Serialize;

/// One panel of the wheel as it should be drawn this frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelView {
    pub index: usize,
    /// Fixed placement on the ring, e.g. `rotateX(90deg) translateZ(640px)`.
    pub transform: String,
    /// Whether the panel carries the `active` state class.
    pub active: bool,
}

/// Full wheel output for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WheelView {
    pub container_transform: String,
    pub panels: Vec<PanelView>,
}

impl WheelView {
    pub fn active_index(&self) -> Option<usize> {
        self.panels.iter().find(|p| p.active).map(|p| p.index)
    }
}

/// Receives a view on every frame.
pub trait RenderSurface: Send + 'static {
    fn render(&mut self, view: &WheelView);
}

impl<F> RenderSurface for F
where
    F: FnMut(&WheelView) + Send + 'static,
{
    fn render(&mut self, view: &WheelView) {
        self(view)
    }
}
