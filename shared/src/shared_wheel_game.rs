use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::animation::{Clock, Frame, SpinAnimation, SpinPhase};
use crate::config::WheelConfig;
use crate::error::{WheelError, WheelResult};
use crate::geometry::{selected_index, target_angle};
use crate::selector::select_with;
use crate::slices::Slice;

/// Mutable part of the wheel: where it points and whether a spin is in flight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelState {
    pub current_angle: f64,
    pub spinning: bool,
}

/// Outcome of a completed spin
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinResult {
    pub index: usize,
    pub label: String,
}

/// What was decided when a spin started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTicket {
    pub index: usize,
    pub start_angle: f64,
    pub target_angle: f64,
}

/// Presentation hooks driven by [`WheelGame::tick`].
pub trait SpinObserver {
    /// Called for every animation frame, the terminal one included.
    fn on_frame(&mut self, _angle: f64, _highlighted: usize) {}

    /// Called once per completed spin, before `spinning` is released.
    fn on_result(&mut self, result: &SpinResult) -> Result<(), String>;
}

/// Clears the spinning flag when dropped, whatever happened before.
struct SpinRelease<'a> {
    spinning: &'a mut bool,
}

impl Drop for SpinRelease<'_> {
    fn drop(&mut self) {
        *self.spinning = false;
    }
}

#[derive(Debug, Clone)]
pub struct WheelGame {
    config: WheelConfig,
    state: WheelState,
    animation: SpinAnimation,
    pending: Option<usize>,
    last_result: Option<SpinResult>,
}

impl WheelGame {
    pub fn new(config: WheelConfig) -> WheelResult<Self> {
        let config = config.checked()?;
        Ok(Self {
            config,
            state: WheelState::default(),
            animation: SpinAnimation::new(),
            pending: None,
            last_result: None,
        })
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn slices(&self) -> &[Slice] {
        &self.config.slices
    }

    pub fn state(&self) -> WheelState {
        self.state
    }

    pub fn is_spinning(&self) -> bool {
        self.state.spinning
    }

    pub fn phase(&self) -> SpinPhase {
        self.animation.phase()
    }

    pub fn last_result(&self) -> Option<&SpinResult> {
        self.last_result.as_ref()
    }

    /// Slice currently under the pointer.
    pub fn highlighted_index(&self) -> usize {
        selected_index(self.state.current_angle, self.config.slice_count())
    }

    pub fn spin<R: Rng>(&mut self, rng: &mut R, now_ms: f64) -> WheelResult<SpinTicket> {
        self.spin_with(|total| rng.gen_range(1..=total), now_ms)
    }

    /// Start a spin using `draw` as the random source (see [`select_with`]).
    ///
    /// While a spin is running this returns [`WheelError::ReentrantSpin`]
    /// and leaves every piece of state untouched.
    pub fn spin_with<F>(&mut self, draw: F, now_ms: f64) -> WheelResult<SpinTicket>
    where
        F: FnOnce(u64) -> u64,
    {
        if self.state.spinning {
            debug!("Ignoring spin request, wheel already spinning");
            return Err(WheelError::ReentrantSpin);
        }
        self.state.spinning = true;
        self.last_result = None;

        let index = match select_with(&self.config.slices, draw) {
            Ok(index) => index,
            Err(e) => {
                warn!("Spin aborted: {}", e);
                self.state.spinning = false;
                return Err(e);
            }
        };

        let start_angle = self.state.current_angle;
        let target = target_angle(
            index,
            self.config.slice_count(),
            start_angle,
            self.config.extra_full_rotations,
        );
        if let Err(e) = self
            .animation
            .start(start_angle, target, self.config.duration_ms, now_ms)
        {
            warn!("Spin aborted: {}", e);
            self.state.spinning = false;
            return Err(e);
        }
        self.pending = Some(index);

        info!("Spin started, landing on slice {}", index);
        debug!("Spin from {:.4} rad to {:.4} rad", start_angle, target);

        Ok(SpinTicket {
            index,
            start_angle,
            target_angle: target,
        })
    }

    pub fn tick_clock<C: Clock, O: SpinObserver>(&mut self, clock: &C, observer: &mut O) -> Option<Frame> {
        self.tick(clock.now_ms(), observer)
    }

    /// Advance the running spin to `now_ms` and notify `observer`.
    ///
    /// On the terminal frame the result is handed to the observer and the
    /// spinning flag is released, even if the observer fails.
    pub fn tick<O: SpinObserver>(&mut self, now_ms: f64, observer: &mut O) -> Option<Frame> {
        let frame = self.animation.tick(now_ms)?;
        self.state.current_angle = frame.angle;

        let release = if frame.finished {
            Some(SpinRelease {
                spinning: &mut self.state.spinning,
            })
        } else {
            None
        };

        let highlighted = selected_index(frame.angle, self.config.slices.len());
        observer.on_frame(frame.angle, highlighted);

        if release.is_some() {
            if let Some(index) = self.pending.take() {
                if highlighted != index {
                    warn!("Wheel stopped on slice {} but slice {} was drawn", highlighted, index);
                }
                let result = SpinResult {
                    index,
                    label: self.config.slices[index].label.clone(),
                };
                if let Err(e) = observer.on_result(&result) {
                    warn!("Presentation hook failed: {}", e);
                }
                self.last_result = Some(result);
            }
        }
        drop(release);

        Some(frame)
    }
}

impl Default for WheelGame {
    fn default() -> Self {
        Self {
            config: WheelConfig::default(),
            state: WheelState::default(),
            animation: SpinAnimation::new(),
            pending: None,
            last_result: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ManualClock;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<f64>,
        results: Vec<SpinResult>,
    }

    impl SpinObserver for Recorder {
        fn on_frame(&mut self, angle: f64, _highlighted: usize) {
            self.frames.push(angle);
        }

        fn on_result(&mut self, result: &SpinResult) -> Result<(), String> {
            self.results.push(result.clone());
            Ok(())
        }
    }

    #[test]
    fn test_not_spinning_before_first_spin() {
        let game = WheelGame::default();
        assert!(!game.is_spinning());
        assert_eq!(game.phase(), SpinPhase::Idle);
        assert!(game.last_result().is_none());
    }

    #[test]
    fn test_second_spin_while_running_changes_nothing() {
        let mut game = WheelGame::default();
        let ticket = game.spin_with(|total| total, 0.0).unwrap();
        let before = game.state();

        assert_eq!(game.spin_with(|_| 1, 10.0), Err(WheelError::ReentrantSpin));
        assert_eq!(game.state(), before);

        let mut recorder = Recorder::default();
        while game.is_spinning() {
            game.tick(game_time(&recorder), &mut recorder);
        }
        assert_eq!(recorder.results.len(), 1);
        assert_eq!(recorder.results[0].index, ticket.index);
    }

    // 16 ms per recorded frame
    fn game_time(recorder: &Recorder) -> f64 {
        (recorder.frames.len() as f64 + 1.0) * 16.0
    }

    #[test]
    fn test_tick_without_spin_is_none() {
        let mut game = WheelGame::default();
        let mut recorder = Recorder::default();
        assert!(game.tick(123.0, &mut recorder).is_none());
        assert!(recorder.frames.is_empty());
    }

    #[test]
    fn test_angle_accumulates_across_spins() {
        let clock = ManualClock::new(0.0);
        let mut game = WheelGame::default();
        let mut recorder = Recorder::default();

        let first = game.spin_with(|_| 1, clock.now_ms()).unwrap();
        clock.advance(5_000.0);
        game.tick_clock(&clock, &mut recorder).unwrap();
        assert_eq!(game.state().current_angle, first.target_angle);

        let second = game.spin_with(|_| 55, clock.now_ms()).unwrap();
        assert_eq!(second.start_angle, first.target_angle);
        assert!(second.target_angle > first.target_angle);
        clock.advance(5_000.0);
        game.tick_clock(&clock, &mut recorder).unwrap();
        assert_eq!(game.highlighted_index(), 5);
        assert_eq!(game.last_result().map(|r| r.index), Some(5));
    }
}
