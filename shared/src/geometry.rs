//! Pointer alignment math.
//!
//! The solver (index -> wheel angle) and the projection (wheel angle -> index)
//! both live here and share [`POINTER_ANGLE`] and the clockwise-positive
//! convention, so one is always the inverse of the other.

use crate::constants::{FULL_TURN, POINTER_ANGLE};

/// Reduce an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negative inputs up to exactly 2π
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

pub fn slice_angle(slice_count: usize) -> f64 {
    FULL_TURN / slice_count as f64
}

/// Wheel rotation (mod 2π) that puts the center of `index` under the pointer.
pub fn aligned_angle(index: usize, slice_count: usize) -> f64 {
    let slice = slice_angle(slice_count);
    POINTER_ANGLE - (index as f64 * slice + slice / 2.0)
}

/// Absolute angle at which a spin starting from `current_angle` should stop.
///
/// The forward distance to the aligned position is always in `[0, 2π)`, and
/// `extra_full_rotations` whole turns are added on top, so the result is
/// never behind `current_angle`.
pub fn target_angle(
    index: usize,
    slice_count: usize,
    current_angle: f64,
    extra_full_rotations: u32,
) -> f64 {
    let forward = normalize_angle(aligned_angle(index, slice_count) - current_angle);
    current_angle + forward + extra_full_rotations as f64 * FULL_TURN
}

/// Index of the slice currently under the pointer.
///
/// Exact slice boundaries resolve with floor, then clamp into range.
pub fn selected_index(current_angle: f64, slice_count: usize) -> usize {
    if slice_count == 0 {
        return 0;
    }
    let rel = normalize_angle(POINTER_ANGLE - current_angle);
    let idx = (rel / slice_angle(slice_count)).floor();
    if idx < 0.0 {
        0
    } else {
        (idx as usize).min(slice_count - 1)
    }
}
