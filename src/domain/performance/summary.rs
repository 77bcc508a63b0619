use crate::domain::market::PriceSeries;
use crate::domain::performance::stats::{Histogram, Stats};
use chrono::NaiveDate;

pub const HISTOGRAM_BINS: usize = 50;

/// Headline numbers for the loaded close series.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    pub last_close: f64,
    pub day_change_pct: Option<f64>,
    pub period_change_pct: f64,
    pub period_days: usize,
    pub total_return_pct: f64,
    pub max_drawdown_pct: f64,
    pub annualized_volatility_pct: f64,
    pub sharpe_ratio: f64,
    pub min_close: f64,
    pub max_close: f64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub observations: usize,
    pub return_histogram: Histogram,
}

impl PerformanceSummary {
    /// `None` for an empty series.
    pub fn from_series(series: &PriceSeries, period_days: usize) -> Option<Self> {
        let first = series.first()?;
        let last = series.last()?;
        let closes = series.closes();
        let returns = Stats::calculate_returns(&closes);

        let min_close = closes.iter().copied().fold(f64::INFINITY, f64::min);
        let max_close = closes.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            last_close: last.close,
            day_change_pct: returns.last().map(|r| r * 100.0),
            period_change_pct: Stats::period_change_pct(&closes, period_days),
            period_days,
            total_return_pct: Stats::total_return_pct(&closes),
            max_drawdown_pct: Stats::max_drawdown_pct(&closes),
            annualized_volatility_pct: Stats::annualized_volatility_pct(&returns),
            sharpe_ratio: Stats::sharpe_ratio(&returns),
            min_close,
            max_close,
            first_date: first.date,
            last_date: last.date,
            observations: closes.len(),
            return_histogram: Stats::histogram(
                &returns.iter().map(|r| r * 100.0).collect::<Vec<_>>(),
                HISTOGRAM_BINS,
            ),
        })
    }

    pub fn span_days(&self) -> i64 {
        (self.last_date - self.first_date).num_days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::PriceRecord;

    fn series(closes: &[f64]) -> PriceSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records = closes
            .iter()
            .enumerate()
            .map(|(i, c)| PriceRecord::new(start + chrono::Duration::days(i as i64), *c))
            .collect();
        PriceSeries::from_records(records).0
    }

    #[test]
    fn test_summary_of_short_series() {
        let s = series(&[100.0, 102.0, 101.0, 105.0]);
        let summary = PerformanceSummary::from_series(&s, 30).unwrap();

        assert_eq!(summary.last_close, 105.0);
        assert_eq!(summary.min_close, 100.0);
        assert_eq!(summary.max_close, 105.0);
        assert!((summary.total_return_pct - 5.0).abs() < 1e-9);
        // window longer than the series covers all of it
        assert!((summary.period_change_pct - 5.0).abs() < 1e-9);
        assert_eq!(summary.span_days(), 3);
        assert_eq!(summary.return_histogram.total(), 3);
    }

    #[test]
    fn test_empty_series_has_no_summary() {
        let s = series(&[]);
        assert!(PerformanceSummary::from_series(&s, 30).is_none());
    }
}
