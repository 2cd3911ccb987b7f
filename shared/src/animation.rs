//! Time-based easing of the wheel angle.
//!
//! [`SpinAnimation`] is a tick-driven state machine: the caller feeds it
//! timestamps (from requestAnimationFrame in the browser, from a manual clock
//! in tests) and gets back the angle to draw.

use serde::{Deserialize, Serialize};
use std::cell::Cell;

use crate::error::{WheelError, WheelResult};

/// Monotonic wall clock in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Clock advanced by hand.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self { now: Cell::new(start_ms) }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: f64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

// Easing function for smooth deceleration: 1 - (1-t)^3
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinPhase {
    Idle,
    Running,
    Resolved,
}

/// One emitted animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub angle: f64,
    /// Linear progress `t` in `[0, 1]` before easing.
    pub progress: f64,
    pub finished: bool,
}

#[derive(Debug, Clone)]
pub struct SpinAnimation {
    phase: SpinPhase,
    start_angle: f64,
    target_angle: f64,
    duration_ms: f64,
    started_at_ms: f64,
    last_angle: f64,
}

impl SpinAnimation {
    pub fn new() -> Self {
        Self {
            phase: SpinPhase::Idle,
            start_angle: 0.0,
            target_angle: 0.0,
            duration_ms: 0.0,
            started_at_ms: 0.0,
            last_angle: 0.0,
        }
    }

    pub fn phase(&self) -> SpinPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == SpinPhase::Running
    }

    pub fn target_angle(&self) -> f64 {
        self.target_angle
    }

    /// Begin easing from `start_angle` to `target_angle`.
    ///
    /// Rejected while a previous run has not resolved yet, and when the
    /// target is behind the start or either angle is not finite. A rejected
    /// call leaves the animation untouched.
    pub fn start(
        &mut self,
        start_angle: f64,
        target_angle: f64,
        duration_ms: f64,
        now_ms: f64,
    ) -> WheelResult<()> {
        if self.is_running() {
            return Err(WheelError::ReentrantSpin);
        }
        if !start_angle.is_finite() || !target_angle.is_finite() || target_angle < start_angle {
            return Err(WheelError::InvalidTarget {
                start: start_angle,
                target: target_angle,
            });
        }
        self.phase = SpinPhase::Running;
        self.start_angle = start_angle;
        self.target_angle = target_angle;
        // NaN and infinite durations resolve on the first tick like zero
        self.duration_ms = if duration_ms.is_finite() { duration_ms.max(0.0) } else { 0.0 };
        self.started_at_ms = now_ms;
        self.last_angle = start_angle;
        Ok(())
    }

    /// Advance to `now_ms`. Returns `None` unless running.
    ///
    /// The frame with `progress == 1.0` carries exactly the target angle and
    /// moves the animation to [`SpinPhase::Resolved`].
    pub fn tick(&mut self, now_ms: f64) -> Option<Frame> {
        if !self.is_running() {
            return None;
        }

        let elapsed = now_ms - self.started_at_ms;
        let t = if self.duration_ms <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration_ms).clamp(0.0, 1.0)
        };

        let angle = if t >= 1.0 {
            self.phase = SpinPhase::Resolved;
            self.target_angle
        } else {
            let delta = self.target_angle - self.start_angle;
            let eased = self.start_angle + delta * ease_out_cubic(t);
            // rounding must not push an intermediate frame past the target
            eased.max(self.last_angle).min(self.target_angle)
        };
        self.last_angle = angle;

        Some(Frame {
            angle,
            progress: t,
            finished: t >= 1.0,
        })
    }
}

impl Default for SpinAnimation {
    fn default() -> Self {
        Self::new()
    }
}
