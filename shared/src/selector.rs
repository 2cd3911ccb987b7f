use rand::Rng;

use crate::error::{WheelError, WheelResult};
use crate::slices::{total_weight, Slice};

/// Draws a slice index with probability proportional to its weight.
pub fn select<R: Rng>(slices: &[Slice], rng: &mut R) -> WheelResult<usize> {
    select_with(slices, |total| rng.gen_range(1..=total))
}

/// Cumulative-weight sampling with the draw supplied by the caller.
///
/// `draw` receives the total weight and must return an integer in
/// `[1, total]`. Slices are walked in table order and the first one whose
/// running sum reaches the draw wins, so zero-weight slices are never picked.
pub fn select_with<F>(slices: &[Slice], draw: F) -> WheelResult<usize>
where
    F: FnOnce(u64) -> u64,
{
    let total = total_weight(slices);
    if total == 0 {
        return Err(WheelError::NoValidSlot);
    }

    let roll = draw(total).clamp(1, total);
    let mut acc = 0u64;
    for (index, slice) in slices.iter().enumerate() {
        acc += slice.effective_weight();
        if roll <= acc {
            return Ok(index);
        }
    }
    Err(WheelError::NoValidSlot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slices::DEFAULT_SLICES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn table(weights: &[i32]) -> Vec<Slice> {
        weights
            .iter()
            .enumerate()
            .map(|(i, &w)| Slice::new(format!("slot {}", i), w, "#000000"))
            .collect()
    }

    #[test]
    fn test_max_draw_lands_on_last_nonzero_slice() {
        assert_eq!(select_with(&DEFAULT_SLICES, |total| total), Ok(9));
    }

    #[test]
    fn test_min_draw_lands_on_first_nonzero_slice() {
        let slices = table(&[0, 0, 4, 1]);
        assert_eq!(select_with(&slices, |_| 1), Ok(2));
    }

    #[test]
    fn test_cumulative_boundaries() {
        let slices = table(&[2, 0, 3]);
        assert_eq!(select_with(&slices, |_| 2), Ok(0));
        assert_eq!(select_with(&slices, |_| 3), Ok(2));
        assert_eq!(select_with(&slices, |_| 5), Ok(2));
    }

    #[test]
    fn test_all_zero_weights_is_no_valid_slot() {
        let slices = table(&[0, 0, 0]);
        assert_eq!(select_with(&slices, |_| 1), Err(WheelError::NoValidSlot));
        assert_eq!(select(&[], &mut StdRng::seed_from_u64(1)), Err(WheelError::NoValidSlot));
    }

    #[test]
    fn test_negative_weights_never_selected() {
        let slices = table(&[-10, 5]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            assert_eq!(select(&slices, &mut rng), Ok(1));
        }
    }

    #[test]
    fn test_frequencies_follow_weights() {
        let weights = [1, 2, 3, 0, 4];
        let slices = table(&weights);
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let trials = 100_000;
        let mut counts = [0usize; 5];
        for _ in 0..trials {
            counts[select(&slices, &mut rng).unwrap()] += 1;
        }

        assert_eq!(counts[3], 0);
        let total: i32 = weights.iter().sum();
        for (i, &w) in weights.iter().enumerate() {
            let expected = w as f64 / total as f64;
            let observed = counts[i] as f64 / trials as f64;
            assert!((observed - expected).abs() < 0.01, "slot {}: {} vs {}", i, observed, expected);
        }
    }
}
