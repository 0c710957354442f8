//! Volume normalization helpers.

use crate::models::volume::VolumeRange;

/// Normalize a raw level to a 0-100 percentage of `range`.
///
/// Computed as `offset / span * 100` in floating point and rounded half to
/// even. A degenerate range (`max == min`) yields 0. Differences are taken in
/// `i128` so extreme driver ranges cannot overflow.
pub fn percentage(raw: i64, range: VolumeRange) -> i64 {
    let span = i128::from(range.max) - i128::from(range.min);
    if span == 0 {
        return 0;
    }
    let offset = i128::from(raw) - i128::from(range.min);
    (offset as f64 / span as f64 * 100.0).round_ties_even() as i64
}
