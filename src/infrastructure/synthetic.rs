use crate::domain::market::{PriceRecord, PriceSeries};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters of a synthetic daily series.
#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    pub rows: usize,
    pub start_date: NaiveDate,
    pub start_price: f64,
    /// Mean daily return, as a fraction
    pub drift: f64,
    /// Half-width of the uniform daily shock, as a fraction
    pub noise: f64,
    pub seed: u64,
    pub with_aux: bool,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            rows: 500,
            start_date: NaiveDate::from_ymd_opt(2022, 1, 3).unwrap_or_default(),
            start_price: 100_000.0,
            drift: 0.0004,
            noise: 0.015,
            seed: 42,
            with_aux: true,
        }
    }
}

fn next_weekday(date: NaiveDate) -> NaiveDate {
    let mut next = date + Duration::days(1);
    while matches!(next.weekday(), Weekday::Sat | Weekday::Sun) {
        next += Duration::days(1);
    }
    next
}

/// Deterministic random-walk series; the same config always yields the same rows.
pub fn generate(config: &SyntheticConfig) -> PriceSeries {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut records = Vec::with_capacity(config.rows);

    let mut date = config.start_date;
    let mut close = config.start_price;
    let mut usd = 5.0;
    let mut selic = 10.75;

    for i in 0..config.rows {
        if i > 0 {
            date = next_weekday(date);
        }

        let open = close;
        let shock = if config.noise > 0.0 {
            rng.random_range(-config.noise..=config.noise)
        } else {
            0.0
        };
        close = (open * (1.0 + config.drift + shock)).max(0.01);

        let wick = open.max(close) * config.noise * 0.3 * rng.random::<f64>();
        let high = open.max(close) + wick;
        let low = (open.min(close) - wick).max(0.01);

        let mut record = PriceRecord::new(date, close).with_ohlc(open, high, low);
        if config.with_aux {
            usd *= 1.0 - shock * 0.3 + rng.random_range(-0.002..=0.002);
            if i % 30 == 29 {
                selic += rng.random_range(-0.25..=0.25);
            }
            record = record.with_aux(Some(usd), Some(selic));
        }
        records.push(record);
    }

    PriceSeries::from_records(records).0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let config = SyntheticConfig {
            rows: 50,
            ..Default::default()
        };
        assert_eq!(generate(&config), generate(&config));

        let other = generate(&SyntheticConfig {
            seed: 7,
            ..config.clone()
        });
        assert_ne!(generate(&config), other);
    }

    #[test]
    fn test_rows_are_valid_weekdays() {
        let series = generate(&SyntheticConfig {
            rows: 30,
            ..Default::default()
        });
        assert_eq!(series.len(), 30);
        for r in series.records() {
            assert!(!matches!(r.date.weekday(), Weekday::Sat | Weekday::Sun));
            let (high, low) = r.range().unwrap();
            assert!(high >= r.close && low <= r.close);
        }
    }

    #[test]
    fn test_noiseless_drift() {
        let series = generate(&SyntheticConfig {
            rows: 3,
            start_price: 100.0,
            drift: 0.01,
            noise: 0.0,
            with_aux: false,
            ..Default::default()
        });
        let closes = series.closes();
        assert!((closes[2] - 100.0 * 1.01_f64.powi(3)).abs() < 1e-9);
    }
}
