use super::rolling::rolling_pair;
use statrs::statistics::Statistics;

/// Rolling Pearson correlation over aligned windows.
///
/// Undefined when either side is constant inside the window.
pub fn rolling_correlation(
    xs: &[Option<f64>],
    ys: &[Option<f64>],
    period: usize,
) -> Vec<Option<f64>> {
    rolling_pair(xs, ys, period, |x, y| pearson(x, y))
}

fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    if x.len() < 2 {
        return None;
    }
    let cov = x.covariance(y);
    let sx = x.std_dev();
    let sy = y.std_dev();

    if sx.is_finite() && sy.is_finite() && sx > 1e-12 && sy > 1e-12 {
        Some((cov / (sx * sy)).clamp(-1.0, 1.0))
    } else {
        None
    }
}

/// Standard score against the mean and sample deviation of the whole series.
pub fn zscore(values: &[Option<f64>]) -> Vec<Option<f64>> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.len() < 2 {
        return vec![None; values.len()];
    }

    let mean = present.iter().mean();
    let std = present.iter().std_dev();
    if !std.is_finite() || std <= 1e-12 {
        return vec![None; values.len()];
    }

    values.iter().map(|v| v.map(|v| (v - mean) / std)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::indicators::rolling::dense;

    #[test]
    fn test_correlation_of_linear_relation() {
        let xs = dense(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let ys = dense(&[2.0, 4.0, 6.0, 8.0, 10.0]);
        let inv = dense(&[5.0, 4.0, 3.0, 2.0, 1.0]);

        let corr = rolling_correlation(&xs, &ys, 3);
        assert!(corr[1].is_none());
        assert!((corr[4].unwrap() - 1.0).abs() < 1e-9);

        let corr = rolling_correlation(&xs, &inv, 5);
        assert!((corr[4].unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_correlation_constant_side_undefined() {
        let xs = dense(&[1.0, 2.0, 3.0]);
        let ys = dense(&[7.0, 7.0, 7.0]);
        assert!(rolling_correlation(&xs, &ys, 3)[2].is_none());
    }

    #[test]
    fn test_zscore_keeps_gaps() {
        let out = zscore(&[Some(1.0), None, Some(3.0)]);
        assert_eq!(out[1], None);
        assert!((out[0].unwrap() + out[2].unwrap()).abs() < 1e-12);
    }
}
