//! Tuning knobs for the wheel.

use serde::Deserialize;
use std::time::Duration;

/// Wheel behaviour settings. Defaults match the production site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Fraction of the remaining distance covered per frame.
    pub easing: f64,
    /// Ring radius as a fraction of the viewport height.
    pub radius_factor: f64,
    /// Degrees of rotation per unit of scroll delta.
    pub scroll_scale: f64,
    /// Quiet period after the last scroll event before snapping.
    pub snap_debounce_ms: u64,
    /// Period of the automatic one-panel advance.
    pub idle_period_ms: u64,
    /// Scroll input only turns the wheel while the page offset is below this.
    pub scroll_limit_px: f64,
    /// Target frame period of the frame loop.
    pub frame_interval_ms: u64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            easing: 0.1,
            radius_factor: 0.8,
            scroll_scale: 0.1,
            snap_debounce_ms: 100,
            idle_period_ms: 5000,
            scroll_limit_px: 500.0,
            frame_interval_ms: 16,
        }
    }
}

impl WheelConfig {
    pub fn snap_debounce(&self) -> Duration {
        Duration::from_millis(self.snap_debounce_ms)
    }

    pub fn idle_period(&self) -> Duration {
        Duration::from_millis(self.idle_period_ms)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WheelConfig::default();
        assert_eq!(config.easing, 0.1);
        assert_eq!(config.snap_debounce(), Duration::from_millis(100));
        assert_eq!(config.idle_period(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let config: WheelConfig = serde_json::from_str(r#"{"idle_period_ms": 8000}"#).unwrap();
        assert_eq!(config.idle_period(), Duration::from_secs(8));
        assert_eq!(config.scroll_limit_px, 500.0);
    }

    #[test]
    fn test_zero_frame_interval_is_clamped() {
        let config = WheelConfig {
            frame_interval_ms: 0,
            ..WheelConfig::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(1));
    }
}
