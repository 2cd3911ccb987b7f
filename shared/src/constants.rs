use std::f64::consts::{FRAC_PI_2, TAU};

pub const FULL_TURN: f64 = TAU;

/// Screen-space angle of the pointer: 12 o'clock, with 0 along +x and
/// angles growing clockwise (canvas convention).
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

pub const EXTRA_FULL_ROTATIONS: u32 = 6;
pub const SPIN_DURATION_MS: f64 = 3000.0;

// Canvas layout, as fractions of the wheel radius unless noted
// leaves room above the rim for the pointer
pub const WHEEL_MARGIN_PX: f64 = 50.0;
pub const LABEL_RADIUS_RATIO: f64 = 0.70;
pub const CENTER_BUTTON_RATIO: f64 = 0.25;
pub const POINTER_TIP_OFFSET_PX: f64 = 10.0;
pub const POINTER_BASE_OFFSET_PX: f64 = 45.0;
pub const POINTER_HALF_WIDTH_PX: f64 = 18.0;

// Presentation timing
pub const SPIN_TICK_INTERVAL_MS: u32 = 100;
pub const FANFARE_NOTE_SPACING_MS: u32 = 100;
pub const CONFETTI_DURATION_MS: f64 = 4000.0;
pub const CONFETTI_PARTICLE_COUNT: usize = 150;

pub const SOUND_PREF_KEY: &str = "wheelSoundEnabled";

pub const NO_VALID_SLOT_MESSAGE: &str = "Không có ô hợp lệ (tất cả weight = 0).";
pub const RESULT_PREFIX: &str = "Kết quả: ";
pub const CENTER_BUTTON_LABEL: &str = "QUAY";
