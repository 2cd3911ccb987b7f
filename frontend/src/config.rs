use web_sys::{window, Storage};
use wheel_shared::constants::SOUND_PREF_KEY;
use wheel_shared::Clock;

fn local_storage() -> Option<Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

// Sound is on unless the user explicitly muted it earlier
pub fn load_sound_enabled() -> bool {
    local_storage()
        .and_then(|s| s.get_item(SOUND_PREF_KEY).ok().flatten())
        .map(|saved| saved == "true")
        .unwrap_or(true)
}

pub fn save_sound_enabled(enabled: bool) {
    if let Some(storage) = local_storage() {
        if storage
            .set_item(SOUND_PREF_KEY, if enabled { "true" } else { "false" })
            .is_err()
        {
            log::warn!("Could not persist sound preference");
        }
    }
}

/// `performance.now()`, the same time base requestAnimationFrame uses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0)
    }
}
