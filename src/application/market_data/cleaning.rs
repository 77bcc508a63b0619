//! Close-price outlier removal with the 1.5×IQR fence.

use crate::domain::market::PriceSeries;
use tracing::info;

pub const IQR_MULTIPLIER: f64 = 1.5;

/// Quantile with linear interpolation between closest ranks.
///
/// `values` must be sorted ascending and non-empty.
fn quantile_sorted(values: &[f64], q: f64) -> f64 {
    let pos = q.clamp(0.0, 1.0) * (values.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let frac = pos - lower as f64;
    values[lower] + (values[upper] - values[lower]) * frac
}

/// Inclusive `[low, high]` fence for the given values.
pub fn iqr_fence(values: &[f64]) -> Option<(f64, f64)> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1 = quantile_sorted(&sorted, 0.25);
    let q3 = quantile_sorted(&sorted, 0.75);
    let iqr = q3 - q1;
    Some((q1 - IQR_MULTIPLIER * iqr, q3 + IQR_MULTIPLIER * iqr))
}

/// `true` for every value inside the fence.
pub fn outlier_mask(values: &[f64]) -> Vec<bool> {
    match iqr_fence(values) {
        Some((low, high)) => values.iter().map(|v| *v >= low && *v <= high).collect(),
        None => vec![true; values.len()],
    }
}

/// Drops whole rows whose close falls outside the fence.
///
/// Returns the cleaned series and the number of rows removed.
pub fn remove_close_outliers(series: &PriceSeries) -> (PriceSeries, usize) {
    let mask = outlier_mask(&series.closes());
    let cleaned = series.retain_mask(&mask);
    let removed = series.len() - cleaned.len();

    if removed > 0 {
        info!(
            "Removed {} close-price outliers ({} rows kept)",
            removed,
            cleaned.len()
        );
    }
    (cleaned, removed)
}
