use super::rolling::{dense, rolling};
use statrs::statistics::Statistics;

/// `C[i] / C[i-1] - 1`, undefined for the first row.
pub fn simple_returns(values: &[f64]) -> Vec<Option<f64>> {
    step(values, |prev, now| (prev != 0.0).then(|| now / prev - 1.0))
}

/// `ln(C[i] / C[i-1])`, undefined for the first row.
pub fn log_returns(values: &[f64]) -> Vec<Option<f64>> {
    step(values, |prev, now| {
        (prev > 0.0 && now > 0.0).then(|| (now / prev).ln())
    })
}

fn step<F>(values: &[f64], f: F) -> Vec<Option<f64>>
where
    F: Fn(f64, f64) -> Option<f64>,
{
    let mut out = Vec::with_capacity(values.len());
    if !values.is_empty() {
        out.push(None);
    }
    out.extend(values.windows(2).map(|w| f(w[0], w[1])));
    out
}

/// Sample standard deviation (n - 1) over a rolling window.
pub fn rolling_std(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    rolling(values, period, |window| {
        if window.len() < 2 {
            return None;
        }
        let std = window.std_dev();
        std.is_finite().then_some(std)
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BollingerSeries {
    pub middle: Vec<Option<f64>>,
    pub upper: Vec<Option<f64>>,
    pub lower: Vec<Option<f64>>,
    /// `(upper - lower) / middle`
    pub width: Vec<Option<f64>>,
}

/// SMA(period) plus and minus `multiplier` sample standard deviations.
pub fn bollinger(values: &[f64], period: usize, multiplier: f64) -> BollingerSeries {
    let middle = super::trend::sma(values, period);
    let std = rolling_std(&dense(values), period);

    let mut bands = BollingerSeries {
        middle: middle.clone(),
        ..Default::default()
    };
    for (m, s) in middle.iter().zip(std.iter()) {
        match (m, s) {
            (Some(m), Some(s)) => {
                let upper = m + multiplier * s;
                let lower = m - multiplier * s;
                bands.upper.push(Some(upper));
                bands.lower.push(Some(lower));
                bands.width.push((*m != 0.0).then(|| (upper - lower) / m));
            }
            _ => {
                bands.upper.push(None);
                bands.lower.push(None);
                bands.width.push(None);
            }
        }
    }
    bands
}

/// True range, defined from the second row when high and low are present.
pub fn true_range(
    highs: &[Option<f64>],
    lows: &[Option<f64>],
    closes: &[f64],
) -> Vec<Option<f64>> {
    (0..closes.len())
        .map(|i| {
            if i == 0 {
                return None;
            }
            let (high, low) = (highs.get(i).copied()??, lows.get(i).copied()??);
            let prev_close = closes[i - 1];

            let tr1 = high - low;
            let tr2 = (high - prev_close).abs();
            let tr3 = (low - prev_close).abs();
            Some(tr1.max(tr2).max(tr3))
        })
        .collect()
}

/// Simple rolling mean of the true range.
pub fn atr(true_range: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    rolling(true_range, period, |window| Some(window.mean()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_first_row_undefined() {
        let r = simple_returns(&[100.0, 110.0]);
        assert_eq!(r[0], None);
        assert!((r[1].unwrap() - 0.1).abs() < 1e-12);

        let l = log_returns(&[100.0, 110.0]);
        assert!((l[1].unwrap() - 1.1_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_rolling_std_is_sample_estimator() {
        let values = dense(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let out = rolling_std(&values, 8);
        // population std is 2.0; sample std is sqrt(32 / 7)
        assert!((out[7].unwrap() - (32.0_f64 / 7.0).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_bollinger_ordering_and_width() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i % 4) as f64).collect();
        let bands = bollinger(&closes, 20, 2.0);

        assert!(bands.upper[18].is_none());
        for i in 19..closes.len() {
            let (u, m, l) = (
                bands.upper[i].unwrap(),
                bands.middle[i].unwrap(),
                bands.lower[i].unwrap(),
            );
            assert!(u > m && m > l);
            assert!((bands.width[i].unwrap() - (u - l) / m).abs() < 1e-12);
        }
    }

    #[test]
    fn test_true_range_uses_previous_close() {
        let highs = vec![Some(11.0), Some(12.0), Some(10.5)];
        let lows = vec![Some(9.0), Some(10.0), Some(9.5)];
        let closes = vec![10.0, 11.5, 10.0];

        let tr = true_range(&highs, &lows, &closes);
        assert_eq!(tr[0], None);
        assert_eq!(tr[1], Some(2.0));
        // gap below the previous close dominates the bar range
        assert_eq!(tr[2], Some(2.0));

        let atr = atr(&tr, 2);
        assert_eq!(atr[1], None);
        assert_eq!(atr[2], Some(2.0));
    }

    #[test]
    fn test_true_range_without_ranges() {
        let tr = true_range(&[None, None], &[None, None], &[1.0, 2.0]);
        assert!(tr.iter().all(Option::is_none));
    }

    #[test]
    fn test_bollinger_bands_are_two_sample_sigmas() {
        // every 20-row window holds each of 100..=103 five times
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + (i % 4) as f64).collect();
        let bands = bollinger(&closes, 20, 2.0);

        let sigma = (25.0_f64 / 19.0).sqrt();
        for i in [19, 27, 39] {
            assert!((bands.middle[i].unwrap() - 101.5).abs() < 1e-9);
            assert!((bands.upper[i].unwrap() - (101.5 + 2.0 * sigma)).abs() < 1e-9);
            assert!((bands.lower[i].unwrap() - (101.5 - 2.0 * sigma)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_volatility_of_alternating_returns() {
        // returns +10%, -10%, +10%
        let closes = [100.0, 110.0, 99.0, 108.9];
        let vol = rolling_std(&simple_returns(&closes), 3);

        assert_eq!(vol[2], None);
        assert!((vol[3].unwrap() - (1.0_f64 / 75.0).sqrt()).abs() < 1e-9);
    }
}
