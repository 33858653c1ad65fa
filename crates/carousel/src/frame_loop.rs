//! Drives a controller from the tokio clock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::config::WheelConfig;
use crate::controller::{RotationController, StepDirection};
use crate::render::{RenderSurface, WheelView};

/// Controller shared between the frame loop and input handlers.
///
/// Every handler call and every frame runs to completion under the lock.
pub type SharedController = Arc<Mutex<RotationController>>;

fn lock(controller: &SharedController) -> MutexGuard<'_, RotationController> {
    controller.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Repeating frame task bound to a cancellation token.
///
/// Each frame advances the controller's clock by the elapsed tokio time,
/// applies one easing tick and hands the resulting view to the surface. The
/// loop ends when the token is cancelled, when the handle is dropped, or
/// when it finds the controller stopped.
pub struct FrameLoop {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl FrameLoop {
    pub fn spawn<S>(controller: SharedController, mut surface: S, frame_interval: Duration) -> Self
    where
        S: RenderSurface,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(frame_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut last_frame = Instant::now();

            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => {
                        debug!("frame loop cancelled");
                        break;
                    }
                    _ = interval.tick() => {
                        let now = Instant::now();
                        let elapsed = now.duration_since(last_frame);
                        last_frame = now;

                        let view = {
                            let mut wheel = lock(&controller);
                            if !wheel.is_running() {
                                debug!("controller stopped, ending frame loop");
                                break;
                            }
                            wheel.advance(elapsed);
                            wheel.tick();
                            wheel.view()
                        };
                        surface.render(&view);
                    }
                }
            }
        });

        Self {
            token,
            handle: Some(handle),
        }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, JoinHandle::is_finished)
    }

    /// Cancels the loop and waits for the task to exit.
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!(error = %e, "frame loop task failed");
            }
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// A running wheel: the shared controller plus its frame loop.
pub struct WheelHandle {
    controller: SharedController,
    frame_loop: FrameLoop,
}

impl WheelHandle {
    pub fn controller(&self) -> SharedController {
        Arc::clone(&self.controller)
    }

    pub fn step(&self, direction: StepDirection) -> bool {
        lock(&self.controller).step(direction)
    }

    pub fn scroll(&self, delta_y: f64, page_scroll_y: f64) -> bool {
        lock(&self.controller).scroll(delta_y, page_scroll_y)
    }

    pub fn view(&self) -> WheelView {
        lock(&self.controller).view()
    }

    /// Stops the controller and waits for the frame loop to exit.
    pub async fn shutdown(self) {
        lock(&self.controller).stop();
        self.frame_loop.stop().await;
    }
}

/// Mounts, starts and animates a wheel of `panel_count` panels.
///
/// Returns `None` without spawning anything when there are no panels.
/// Must be called from within a tokio runtime.
pub fn launch<S>(
    panel_count: usize,
    viewport_height: f64,
    config: WheelConfig,
    surface: S,
) -> Option<WheelHandle>
where
    S: RenderSurface,
{
    let frame_interval = config.frame_interval();
    let mut controller = RotationController::mount(panel_count, viewport_height, config)?;
    controller.start();

    let controller: SharedController = Arc::new(Mutex::new(controller));
    let frame_loop = FrameLoop::spawn(Arc::clone(&controller), surface, frame_interval);

    Some(WheelHandle {
        controller,
        frame_loop,
    })
}
