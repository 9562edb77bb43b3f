//! Discrete weight adjustment for directional (keyboard) input.

use crate::ranking::weights::{MatchWeights, WeightAxis};

/// Percentage points moved per directional step.
pub const STEP_INCREMENT: i32 = 5;

/// Moves `axis` by `delta` percentage points and gives the opposite change to
/// the other two axes in proportion to their current share. Both others at
/// zero split it evenly. The last axis absorbs the rounding residual so the
/// result always sums to exactly 100.
pub fn step_weights(weights: &MatchWeights, axis: WeightAxis, delta: i32) -> MatchWeights {
    let current = weights.to_percentages();
    let moved = axis.index();
    let target = (current[moved] as i32).saturating_add(delta).clamp(0, 100) as u32;
    let remaining = 100 - target;

    let others: Vec<usize> = (0..3).filter(|i| *i != moved).collect();
    let (first, last) = (others[0], others[1]);
    let pool = current[first] + current[last];

    let first_share = if pool == 0 {
        remaining / 2
    } else {
        let scaled = current[first] as f64 * remaining as f64 / pool as f64;
        (scaled.round() as u32).min(remaining)
    };

    let mut result = [0u32; 3];
    result[moved] = target;
    result[first] = first_share;
    result[last] = remaining - first_share;
    MatchWeights::from_percentages(result)
}
