use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, OscillatorType};
use wheel_shared::constants::{FANFARE_NOTE_SPACING_MS, SPIN_TICK_INTERVAL_MS};

use crate::config::{load_sound_enabled, save_sound_enabled};

// C5, E5, G5, C6
const FANFARE_NOTES: [f32; 4] = [523.25, 659.25, 783.99, 1046.50];
const FANFARE_NOTE_SECONDS: f64 = 0.15;
const TICK_SECONDS: f64 = 0.1;

/// Spin ticks and the win fanfare, synthesized with oscillators.
///
/// The AudioContext is only created after a user gesture, as browsers
/// refuse to start audio before one.
pub struct SoundBoard {
    enabled: bool,
    context: Option<AudioContext>,
    spin_ticks: Option<Interval>,
}

impl SoundBoard {
    pub fn restore() -> Self {
        Self {
            enabled: load_sound_enabled(),
            context: None,
            spin_ticks: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Create the AudioContext on first use and wake it if suspended.
    pub fn ensure_context(&mut self) -> Option<&AudioContext> {
        if !self.enabled {
            return None;
        }
        if self.context.is_none() {
            match AudioContext::new() {
                Ok(ctx) => self.context = Some(ctx),
                Err(e) => {
                    log::info!("AudioContext not supported: {:?}", e);
                    return None;
                }
            }
        }
        let ctx = self.context.as_ref()?;
        if ctx.state() == AudioContextState::Suspended {
            let _ = ctx.resume();
        }
        Some(ctx)
    }

    /// Flip mute, persist it, and give audible feedback when unmuting.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        save_sound_enabled(self.enabled);
        if self.enabled {
            if self.ensure_context().is_some() {
                // short delay so the context has resumed
                let ctx = self.context.clone();
                Timeout::new(100, move || {
                    if let Some(ctx) = ctx {
                        play_fanfare(&ctx);
                    }
                })
                .forget();
            }
        } else {
            self.stop_spin_ticks();
        }
        self.enabled
    }

    pub fn start_spin_ticks(&mut self) {
        self.stop_spin_ticks();
        if !self.enabled {
            return;
        }
        if let Some(ctx) = self.context.clone() {
            self.spin_ticks = Some(Interval::new(SPIN_TICK_INTERVAL_MS, move || {
                let freq = 200.0 + rand::random::<f32>() * 100.0;
                if let Err(e) = play_tone(&ctx, freq, 0.1, TICK_SECONDS) {
                    log::debug!("Audio error: {:?}", e);
                }
            }));
        }
    }

    pub fn stop_spin_ticks(&mut self) {
        // dropping the interval cancels it
        self.spin_ticks.take();
    }

    pub fn play_win(&mut self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }
        let ctx = self
            .ensure_context()
            .cloned()
            .ok_or_else(|| "no audio context".to_string())?;
        play_fanfare(&ctx);
        Ok(())
    }
}

fn play_fanfare(ctx: &AudioContext) {
    for (i, &freq) in FANFARE_NOTES.iter().enumerate() {
        let ctx = ctx.clone();
        Timeout::new(i as u32 * FANFARE_NOTE_SPACING_MS, move || {
            if let Err(e) = play_tone(&ctx, freq, 0.2, FANFARE_NOTE_SECONDS) {
                log::debug!("Audio error: {:?}", e);
            }
        })
        .forget();
    }
}

/// One sine note whose gain decays exponentially over `seconds`.
fn play_tone(ctx: &AudioContext, freq: f32, gain: f32, seconds: f64) -> Result<(), JsValue> {
    if ctx.state() == AudioContextState::Suspended {
        let _ = ctx.resume()?;
    }
    let oscillator = ctx.create_oscillator()?;
    let gain_node = ctx.create_gain()?;

    oscillator.connect_with_audio_node(&gain_node)?;
    gain_node.connect_with_audio_node(&ctx.destination())?;

    oscillator.frequency().set_value(freq);
    oscillator.set_type(OscillatorType::Sine);

    let now = ctx.current_time();
    gain_node.gain().set_value_at_time(gain, now)?;
    gain_node.gain().exponential_ramp_to_value_at_time(0.01, now + seconds)?;

    oscillator.start()?;
    oscillator.stop_with_when(now + seconds)?;
    Ok(())
}
