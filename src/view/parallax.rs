use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Maps a viewport pixel position onto `[-1, 1]` on both axes.
    pub fn from_viewport(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (x / width) * 2.0 - 1.0,
            y: (y / height) * 2.0 - 1.0,
        }
    }
}

#[derive(Debug, Default)]
struct Tracker {
    raw: Point,
    smoothed: Point,
}

/// Pointer follower for decorative tilt effects. Each frame moves the
/// smoothed position a fixed fraction of the way toward the raw pointer.
#[derive(Clone)]
pub struct ParallaxAnimator {
    tracker: Arc<RwLock<Tracker>>,
    factor: f64,
}

impl ParallaxAnimator {
    pub fn new(factor: f64) -> Self {
        Self {
            tracker: Arc::new(RwLock::new(Tracker::default())),
            factor,
        }
    }

    pub async fn set_pointer(&self, raw: Point) {
        self.tracker.write().await.raw = raw;
    }

    pub async fn smoothed(&self) -> Point {
        self.tracker.read().await.smoothed
    }

    /// `(rotate_x, rotate_y)` in degrees for an element tilted by `strength`.
    pub async fn tilt(&self, strength: f64) -> (f64, f64) {
        let smoothed = self.smoothed().await;
        (smoothed.y * strength, smoothed.x * strength)
    }

    /// Advances one frame.
    pub async fn step(&self) -> Point {
        let mut tracker = self.tracker.write().await;
        let Tracker { raw, smoothed } = &mut *tracker;
        smoothed.x += (raw.x - smoothed.x) * self.factor;
        smoothed.y += (raw.y - smoothed.y) * self.factor;
        *smoothed
    }

    /// Runs [`ParallaxAnimator::step`] every `frame` until the returned
    /// handle is stopped or dropped.
    pub fn start(&self, frame: Duration) -> AnimationHandle {
        let token = CancellationToken::new();
        let animator = self.clone();
        let cancelled = token.clone();

        let task = tokio::spawn(async move {
            let mut ticker = interval(frame);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => break,
                    _ = ticker.tick() => {
                        animator.step().await;
                    }
                }
            }
        });

        log::debug!("Parallax animation started ({:?} per frame)", frame);
        AnimationHandle {
            token,
            task: Some(task),
        }
    }
}

/// Owns the per-frame callback of a running animation. Dropping it cancels
/// the callback; [`AnimationHandle::stop`] also waits for it to finish.
pub struct AnimationHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl AnimationHandle {
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                log::warn!("Parallax animation task ended abnormally: {}", e);
            }
        }
        log::debug!("Parallax animation stopped");
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled()
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
