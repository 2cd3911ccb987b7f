use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::{EXTRA_FULL_ROTATIONS, SPIN_DURATION_MS};
use crate::error::WheelResult;
use crate::slices::{Slice, DEFAULT_SLICES};

/// Everything fixed at wheel construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct WheelConfig {
    #[validate(length(min = 1, message = "slice table is empty"), custom = "validate_labels")]
    pub slices: Vec<Slice>,
    #[validate(range(max = 100, message = "too many extra rotations"))]
    pub extra_full_rotations: u32,
    #[validate(
        range(min = 1.0, max = 60_000.0, message = "duration must be between 1 ms and 60 s"),
        custom = "validate_duration"
    )]
    pub duration_ms: f64,
}

fn validate_labels(slices: &[Slice]) -> Result<(), ValidationError> {
    if slices.iter().any(|s| s.label.trim().is_empty()) {
        return Err(ValidationError::new("empty_label"));
    }
    Ok(())
}

// NaN slips through range comparisons
fn validate_duration(duration_ms: f64) -> Result<(), ValidationError> {
    if !duration_ms.is_finite() {
        return Err(ValidationError::new("non_finite_duration"));
    }
    Ok(())
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            slices: DEFAULT_SLICES.clone(),
            extra_full_rotations: EXTRA_FULL_ROTATIONS,
            duration_ms: SPIN_DURATION_MS,
        }
    }
}

impl WheelConfig {
    pub fn with_slices(slices: Vec<Slice>) -> Self {
        Self {
            slices,
            ..Self::default()
        }
    }

    pub fn checked(self) -> WheelResult<Self> {
        self.validate()?;
        Ok(self)
    }

    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }
}
