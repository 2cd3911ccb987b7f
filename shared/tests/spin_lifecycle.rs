use std::f64::consts::TAU;
use std::panic::{catch_unwind, AssertUnwindSafe};

use wheel_shared::constants::POINTER_ANGLE;
use wheel_shared::geometry::{normalize_angle, selected_index, slice_angle};
use wheel_shared::{
    Clock, ManualClock, Slice, SpinObserver, SpinPhase, SpinResult, WheelConfig, WheelError,
    WheelGame, DEFAULT_SLICES,
};

#[derive(Default)]
struct Recorder {
    frames: Vec<(f64, usize)>,
    results: Vec<SpinResult>,
}

impl SpinObserver for Recorder {
    fn on_frame(&mut self, angle: f64, highlighted: usize) {
        self.frames.push((angle, highlighted));
    }

    fn on_result(&mut self, result: &SpinResult) -> Result<(), String> {
        self.results.push(result.clone());
        Ok(())
    }
}

struct FailingHook;

impl SpinObserver for FailingHook {
    fn on_result(&mut self, _result: &SpinResult) -> Result<(), String> {
        Err("modal element missing".to_string())
    }
}

struct PanickingHook;

impl SpinObserver for PanickingHook {
    fn on_result(&mut self, _result: &SpinResult) -> Result<(), String> {
        panic!("confetti canvas exploded");
    }
}

fn run_to_end<O: SpinObserver>(game: &mut WheelGame, clock: &ManualClock, observer: &mut O) {
    while game.is_spinning() {
        clock.advance(16.0);
        game.tick_clock(clock, observer);
    }
}

#[test]
fn max_draw_on_default_table_lands_on_slice_nine() {
    let clock = ManualClock::new(0.0);
    let mut game = WheelGame::new(WheelConfig::default()).unwrap();
    assert_eq!(game.state().current_angle, 0.0);

    let ticket = game.spin_with(|total| total, clock.now_ms()).unwrap();
    assert_eq!(ticket.index, 9);
    assert!(game.is_spinning());
    assert_eq!(game.phase(), SpinPhase::Running);

    // slice 9's center sits under the pointer at the target
    let slice = slice_angle(11);
    let center = ticket.target_angle + 9.0 * slice + slice / 2.0;
    let diff = normalize_angle(center - POINTER_ANGLE);
    assert!(diff < 1e-9 || TAU - diff < 1e-9);
    assert_eq!(selected_index(ticket.target_angle, 11), 9);

    let mut recorder = Recorder::default();
    run_to_end(&mut game, &clock, &mut recorder);

    let angles: Vec<f64> = recorder.frames.iter().map(|(a, _)| *a).collect();
    assert!(angles.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(*angles.last().unwrap(), ticket.target_angle);
    assert_eq!(recorder.frames.last().unwrap().1, 9);

    assert_eq!(
        recorder.results,
        vec![SpinResult {
            index: 9,
            label: "Voucher 1 TRIỆU".to_string()
        }]
    );
    assert!(!game.is_spinning());
    assert_eq!(game.phase(), SpinPhase::Resolved);
    assert_eq!(game.state().current_angle, ticket.target_angle);
    assert_eq!(game.highlighted_index(), 9);
}

#[test]
fn all_zero_weights_never_animate() {
    let slices = vec![Slice::new("a", 0, "#111"), Slice::new("b", 0, "#222")];
    let mut game = WheelGame::new(WheelConfig::with_slices(slices)).unwrap();

    assert_eq!(game.spin_with(|_| 1, 0.0), Err(WheelError::NoValidSlot));
    assert!(!game.is_spinning());
    assert_eq!(game.phase(), SpinPhase::Idle);

    let mut recorder = Recorder::default();
    assert!(game.tick(1_000.0, &mut recorder).is_none());
    assert!(recorder.frames.is_empty());
    assert!(recorder.results.is_empty());
}

#[test]
fn failing_hook_still_releases_spinning() {
    let clock = ManualClock::new(0.0);
    let mut game = WheelGame::default();
    game.spin_with(|_| 3, clock.now_ms()).unwrap();

    run_to_end(&mut game, &clock, &mut FailingHook);
    assert!(!game.is_spinning());
    assert_eq!(game.last_result().map(|r| r.index), Some(0));

    // a fresh spin is accepted again
    assert!(game.spin_with(|_| 100, clock.now_ms()).is_ok());
}

#[test]
fn panicking_hook_still_releases_spinning() {
    let clock = ManualClock::new(0.0);
    let mut game = WheelGame::default();
    game.spin_with(|_| 42, clock.now_ms()).unwrap();
    clock.advance(10_000.0);

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        game.tick_clock(&clock, &mut PanickingHook);
    }));
    assert!(outcome.is_err());
    assert!(!game.is_spinning());
}

#[test]
fn repeated_spins_match_weights_and_never_pick_the_jackpot() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let clock = ManualClock::new(0.0);
    let mut rng = StdRng::seed_from_u64(2024);
    let mut game = WheelGame::default();
    let mut counts = vec![0usize; DEFAULT_SLICES.len()];

    for _ in 0..2_000 {
        let ticket = game.spin(&mut rng, clock.now_ms()).unwrap();
        let mut recorder = Recorder::default();
        clock.advance(3_000.0);
        game.tick_clock(&clock, &mut recorder).unwrap();
        assert_eq!(recorder.results[0].index, ticket.index);
        assert_eq!(game.highlighted_index(), ticket.index);
        counts[ticket.index] += 1;
    }

    assert_eq!(counts[10], 0);
    for count in &counts[..10] {
        // expected 200 each
        assert!(*count > 120 && *count < 280, "count {}", count);
    }
}
