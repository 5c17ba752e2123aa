//! Nearest-match lookup over small sorted tables.

/// Canonical `duration-*` steps in milliseconds.
pub const DURATIONS: &[u32] = &[75, 100, 150, 200, 300, 500, 700, 1000];

/// Canonical `opacity-*` steps in percent.
pub const OPACITIES: &[u32] = &[0, 5, 10, 20, 25, 30, 40, 50, 60, 70, 75, 80, 90, 95, 100];

/// The candidate closest to `target`, preferring the lower one on a tie.
///
/// `candidates` must be sorted ascending. Returns `None` only when empty.
pub fn nearest(candidates: &[u32], target: f64) -> Option<u32> {
    let split = candidates.partition_point(|&c| f64::from(c) < target);
    let below = split.checked_sub(1).map(|i| candidates[i]);
    let above = candidates.get(split).copied();

    match (below, above) {
        (Some(lo), Some(hi)) => {
            if target - f64::from(lo) <= f64::from(hi) - target {
                Some(lo)
            } else {
                Some(hi)
            }
        }
        (lo, hi) => lo.or(hi),
    }
}
