//! Angle continuity across period wraps.
//!
//! Strategies return angles in one period, but the rotary axis is a
//! continuous coordinate: a raw sequence `170, -170` must become
//! `170, 190`, not a 340-degree swing. Unwrapping searches shifted
//! candidates of each raw angle for the one nearest the running value.

use std::f64::consts::PI;

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Unwrap raw angles (radians) into a continuous degree sequence.
///
/// `angles[0]` is the continuous angle carried from the previous move and
/// passes through unchanged. Every following element picks, among its
/// `raw + 2*pi*k` candidates for `k` in `[-10, 10]` (rounded to 4
/// decimals), the candidate closest to the previous continuous value.
/// The result is converted to degrees rounded to 2 decimals; within the
/// ten-turn search range consecutive values never differ by more than 180.
pub fn unwrap_angles(angles: &[f64]) -> Vec<f64> {
    if angles.is_empty() {
        return Vec::new();
    }

    let mut continuous = Vec::with_capacity(angles.len());
    continuous.push(angles[0]);
    for &raw in &angles[1..] {
        let prev = continuous[continuous.len() - 1];
        let mut best = raw;
        let mut best_dist = f64::INFINITY;
        for k in -10..=10 {
            let candidate = round_to(raw + f64::from(k) * 2.0 * PI, 4);
            let dist = (candidate - prev).abs();
            if dist < best_dist {
                best_dist = dist;
                best = candidate;
            }
        }
        continuous.push(best);
    }

    continuous
        .into_iter()
        .map(|rad| round_to(rad.to_degrees(), 2))
        .collect()
}
