use statrs::statistics::Statistics;

const TRADING_DAYS: f64 = 252.0;

/// Shared statistics utilities over daily close series.
pub struct Stats;

impl Stats {
    /// Simple one-step returns. Non-positive previous prices are skipped.
    pub fn calculate_returns(prices: &[f64]) -> Vec<f64> {
        prices
            .windows(2)
            .filter(|w| w[0] > 0.0)
            .map(|w| w[1] / w[0] - 1.0)
            .collect()
    }

    /// Percentage change between the first and last price.
    pub fn total_return_pct(prices: &[f64]) -> f64 {
        match (prices.first(), prices.last()) {
            (Some(&first), Some(&last)) if first > 0.0 => (last / first - 1.0) * 100.0,
            _ => 0.0,
        }
    }

    /// Percentage change over the last `window` rows (or the whole series if shorter).
    pub fn period_change_pct(prices: &[f64], window: usize) -> f64 {
        let start = prices.len().saturating_sub(window.max(1));
        Self::total_return_pct(&prices[start..])
    }

    /// Peak-to-trough decline of the running maximum, as a non-positive percentage.
    pub fn max_drawdown_pct(prices: &[f64]) -> f64 {
        let mut max_dd = 0.0_f64;
        let mut peak = f64::MIN;

        for &price in prices {
            if price > peak {
                peak = price;
            }
            if peak > 0.0 {
                let drawdown_pct = (price - peak) / peak * 100.0;
                if drawdown_pct < max_dd {
                    max_dd = drawdown_pct;
                }
            }
        }

        max_dd
    }

    /// Sample standard deviation of daily returns, annualized and in percent.
    pub fn annualized_volatility_pct(returns: &[f64]) -> f64 {
        if returns.len() < 2 {
            return 0.0;
        }
        let std = returns.iter().std_dev();
        if std.is_finite() {
            std * TRADING_DAYS.sqrt() * 100.0
        } else {
            0.0
        }
    }

    /// Annualized Sharpe ratio with a zero risk-free rate.
    ///
    /// Zero when the returns have no dispersion.
    pub fn sharpe_ratio(returns: &[f64]) -> f64 {
        if returns.len() < 2 {
            return 0.0;
        }

        let mean = returns.iter().mean();
        let std = returns.iter().std_dev();

        if std.is_finite() && std > 1e-12 {
            (mean * TRADING_DAYS) / (std * TRADING_DAYS.sqrt())
        } else {
            0.0
        }
    }

    /// Equal-width histogram over `[min, max]`.
    pub fn histogram(values: &[f64], bins: usize) -> Histogram {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        if finite.is_empty() || bins == 0 {
            return Histogram::default();
        }

        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let width = if max > min {
            (max - min) / bins as f64
        } else {
            1.0
        };

        let mut counts = vec![0usize; bins];
        for v in finite {
            let idx = (((v - min) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Histogram { min, width, counts }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Center of bin `i`.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.min + (i as f64 + 0.5) * self.width
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sharpe_ratio() {
        let returns = vec![0.01, 0.02, 0.01, 0.02];
        assert!(Stats::sharpe_ratio(&returns) > 0.0);

        let flat = vec![0.01, 0.01, 0.01];
        assert_eq!(Stats::sharpe_ratio(&flat), 0.0);
    }

    #[test]
    fn test_max_drawdown() {
        let prices = vec![100.0, 120.0, 90.0, 130.0, 117.0];
        let dd = Stats::max_drawdown_pct(&prices);
        assert!((dd - (-25.0)).abs() < 1e-9);

        assert_eq!(Stats::max_drawdown_pct(&[1.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_returns_and_total_return() {
        let prices = vec![100.0, 110.0, 99.0];
        let returns = Stats::calculate_returns(&prices);
        assert!((returns[0] - 0.10).abs() < 1e-12);
        assert!((returns[1] + 0.10).abs() < 1e-12);
        assert!((Stats::total_return_pct(&prices) + 1.0).abs() < 1e-9);
        assert!((Stats::period_change_pct(&prices, 2) + 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_histogram_counts_everything() {
        let values: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
        let hist = Stats::histogram(&values, 50);
        assert_eq!(hist.counts.len(), 50);
        assert_eq!(hist.total(), 100);
        // the maximum lands in the last bin
        assert!(hist.counts[49] > 0);
    }

    #[test]
    fn test_annualized_volatility_short_series() {
        assert_eq!(Stats::annualized_volatility_pct(&[0.01]), 0.0);
    }
}
