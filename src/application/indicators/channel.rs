use super::rolling::{dense, rolling};

/// Midpoint of the rolling high/low of closes, as in the Ichimoku lines.
pub fn midpoint(values: &[f64], period: usize) -> Vec<Option<f64>> {
    rolling(&dense(values), period, |window| {
        let max = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = window.iter().copied().fold(f64::INFINITY, f64::min);
        Some((max + min) / 2.0)
    })
}
