use ta::Next;
use ta::indicators::{
    ExponentialMovingAverage, MovingAverageConvergenceDivergence, SimpleMovingAverage,
};
use tracing::warn;

/// Simple moving average of the last `period` values.
///
/// `ta`'s SMA reports partial means while it warms up; those are masked so the
/// value is only defined once the window is full.
pub fn sma(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut indicator = match SimpleMovingAverage::new(period) {
        Ok(indicator) => indicator,
        Err(e) => {
            warn!("SMA({}) unavailable: {}", period, e);
            return vec![None; values.len()];
        }
    };

    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let out = indicator.next(v);
            (i + 1 >= period).then_some(out)
        })
        .collect()
}

/// Exponential moving average with factor 2/(period+1), seeded with the first value.
pub fn ema(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut indicator = match ExponentialMovingAverage::new(period) {
        Ok(indicator) => indicator,
        Err(e) => {
            warn!("EMA({}) unavailable: {}", period, e);
            return vec![None; values.len()];
        }
    };

    values.iter().map(|&v| Some(indicator.next(v))).collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// MACD line, signal line and histogram, defined from the first row.
pub fn macd(values: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let n = values.len();
    let mut indicator = match MovingAverageConvergenceDivergence::new(fast, slow, signal) {
        Ok(indicator) => indicator,
        Err(e) => {
            warn!("MACD({}, {}, {}) unavailable: {}", fast, slow, signal, e);
            return MacdSeries {
                macd: vec![None; n],
                signal: vec![None; n],
                histogram: vec![None; n],
            };
        }
    };

    let mut series = MacdSeries {
        macd: Vec::with_capacity(n),
        signal: Vec::with_capacity(n),
        histogram: Vec::with_capacity(n),
    };
    for &v in values {
        let out = indicator.next(v);
        series.macd.push(Some(out.macd));
        series.signal.push(Some(out.signal));
        series.histogram.push(Some(out.histogram));
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma_matches_window_mean() {
        let closes: Vec<f64> = (1..=30).map(|i| (i as f64).sqrt() * 10.0).collect();
        let out = sma(&closes, 5);

        assert!(out[..4].iter().all(Option::is_none));
        for i in 4..closes.len() {
            let expected = closes[i - 4..=i].iter().sum::<f64>() / 5.0;
            assert!((out[i].unwrap() - expected).abs() < 1e-9, "index {i}");
        }
    }

    #[test]
    fn test_ema_seeded_with_first_value() {
        let out = ema(&[10.0, 20.0], 3);
        assert_eq!(out[0], Some(10.0));
        // k = 2 / (3 + 1) = 0.5
        assert!((out[1].unwrap() - 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_macd_histogram_is_difference() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + (i as f64 / 5.0).sin() * 3.0).collect();
        let out = macd(&closes, 12, 26, 9);

        assert_eq!(out.macd[0], Some(0.0));
        for i in 0..closes.len() {
            let m = out.macd[i].unwrap();
            let s = out.signal[i].unwrap();
            let h = out.histogram[i].unwrap();
            assert!((h - (m - s)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_period_yields_nothing() {
        assert!(sma(&[1.0, 2.0], 0).iter().all(Option::is_none));
    }
}
