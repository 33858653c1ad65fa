//! Rotation state of the wheel.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::WheelConfig;
use crate::geometry::{
    ease_toward, facing_offset, is_facing, panel_transform, placement_angle, sector_angle,
    snap_to_sector, wheel_transform,
};
use crate::render::{PanelView, WheelView};
use crate::timers::{TimerKey, Timers};

/// Direction of a manual step control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    /// Rotates back by one panel.
    Up,
    /// Rotates forward by one panel.
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Mounted,
    Running,
    Stopped,
}

/// Eased angular position of a ring of panels.
///
/// The controller has no clock of its own. `tick` applies one frame of
/// easing and `advance` moves the virtual clock, firing the snap and idle
/// timers that fall due. Input is accepted only while running; once stopped
/// a controller stays stopped and a new one has to be mounted.
#[derive(Debug, Clone)]
pub struct RotationController {
    config: WheelConfig,
    panel_count: usize,
    theta: f64,
    radius: f64,
    current_angle: f64,
    target_angle: f64,
    active: Vec<bool>,
    now: Duration,
    timers: Timers,
    lifecycle: Lifecycle,
}

impl RotationController {
    /// Mounts a controller for `panel_count` panels.
    ///
    /// Returns `None` when there are no panels to arrange.
    pub fn mount(panel_count: usize, viewport_height: f64, config: WheelConfig) -> Option<Self> {
        let Some(theta) = sector_angle(panel_count) else {
            debug!("no panels to mount, wheel stays inert");
            return None;
        };

        let mut controller = Self {
            radius: viewport_height * config.radius_factor,
            config,
            panel_count,
            theta,
            current_angle: 0.0,
            target_angle: 0.0,
            active: vec![false; panel_count],
            now: Duration::ZERO,
            timers: Timers::new(),
            lifecycle: Lifecycle::Mounted,
        };
        controller.refresh_active();

        info!(
            panel_count,
            theta = controller.theta,
            radius = controller.radius,
            "wheel mounted"
        );
        Some(controller)
    }

    /// Starts the idle clock. Returns false if the controller was already
    /// started or has been stopped.
    pub fn start(&mut self) -> bool {
        if self.lifecycle != Lifecycle::Mounted {
            return false;
        }
        self.lifecycle = Lifecycle::Running;
        self.reset_idle();
        debug!("wheel started");
        true
    }

    /// Cancels every pending timer. Subsequent input and ticks are ignored.
    pub fn stop(&mut self) {
        if self.lifecycle == Lifecycle::Stopped {
            return;
        }
        self.lifecycle = Lifecycle::Stopped;
        self.timers.cancel_all();
        info!(current_angle = self.current_angle, "wheel stopped");
    }

    /// Applies one frame of easing and refreshes the active flags.
    ///
    /// Returns true when the active panel changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        let before = self.active_index();
        self.current_angle = ease_toward(self.current_angle, self.target_angle, self.config.easing);
        self.refresh_active();
        before != self.active_index()
    }

    /// Moves the virtual clock forward by `dt` and applies every timer that
    /// fell due, in deadline order.
    pub fn advance(&mut self, dt: Duration) {
        if !self.is_running() {
            return;
        }
        self.now += dt;
        for key in self.timers.advance(self.now) {
            match key {
                TimerKey::Snap => {
                    let snapped = snap_to_sector(self.target_angle, self.theta);
                    debug!(from = self.target_angle, to = snapped, "snapping to panel");
                    self.target_angle = snapped;
                }
                TimerKey::IdleAdvance => {
                    self.target_angle += self.theta;
                    debug!(target_angle = self.target_angle, "idle advance");
                }
            }
        }
    }

    /// Runs frames of `frame_interval` for `duration`, advancing the clock
    /// before each tick. Returns the number of frames run.
    pub fn run_for(&mut self, duration: Duration) -> usize {
        let frame = self.config.frame_interval();
        let mut remaining = duration;
        let mut frames = 0;
        while !remaining.is_zero() && self.is_running() {
            let step = remaining.min(frame);
            self.advance(step);
            self.tick();
            remaining -= step;
            frames += 1;
        }
        frames
    }

    /// Moves the target by one panel and restarts the idle clock.
    pub fn step(&mut self, direction: StepDirection) -> bool {
        if !self.is_running() {
            return false;
        }
        match direction {
            StepDirection::Up => self.target_angle -= self.theta,
            StepDirection::Down => self.target_angle += self.theta,
        }
        self.reset_idle();
        true
    }

    /// Applies scroll input with vertical delta `delta_y`.
    ///
    /// Ignored entirely once the page has scrolled to `scroll_limit_px` or
    /// beyond. Otherwise the target moves immediately and a snap is
    /// scheduled for when the input goes quiet.
    pub fn scroll(&mut self, delta_y: f64, page_scroll_y: f64) -> bool {
        if !self.is_running() || page_scroll_y >= self.config.scroll_limit_px {
            return false;
        }
        self.target_angle += delta_y * self.config.scroll_scale;
        self.timers
            .schedule_once(TimerKey::Snap, self.now, self.config.snap_debounce());
        self.reset_idle();
        true
    }

    pub fn current_angle(&self) -> f64 {
        self.current_angle
    }

    pub fn target_angle(&self) -> f64 {
        self.target_angle
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn panel_count(&self) -> usize {
        self.panel_count
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    pub fn is_stopped(&self) -> bool {
        self.lifecycle == Lifecycle::Stopped
    }

    /// Virtual time since mount.
    pub fn elapsed(&self) -> Duration {
        self.now
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active.iter().position(|active| *active)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    pub fn timers(&self) -> &Timers {
        &self.timers
    }

    pub fn view(&self) -> WheelView {
        let panels = (0..self.panel_count)
            .map(|index| PanelView {
                index,
                transform: panel_transform(placement_angle(self.theta, index), self.radius),
                active: self.active[index],
            })
            .collect();

        WheelView {
            container_transform: wheel_transform(self.radius, self.current_angle),
            panels,
        }
    }

    fn reset_idle(&mut self) {
        self.timers
            .schedule_repeating(TimerKey::IdleAdvance, self.now, self.config.idle_period());
    }

    fn refresh_active(&mut self) {
        for (index, active) in self.active.iter_mut().enumerate() {
            let offset = facing_offset(placement_angle(self.theta, index), self.current_angle);
            *active = is_facing(offset, self.theta);
        }
    }
}
