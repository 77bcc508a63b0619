use chrono::NaiveDate;
use trendcast::application::indicators::momentum::rsi;
use trendcast::application::indicators::trend::{macd, sma};
use trendcast::application::market_data::cleaning::{iqr_fence, remove_close_outliers};
use trendcast::domain::market::{PriceRecord, PriceSeries};
use trendcast::infrastructure::synthetic::{SyntheticConfig, generate};

fn random_closes(seed: u64, rows: usize) -> Vec<f64> {
    generate(&SyntheticConfig {
        rows,
        seed,
        with_aux: false,
        ..SyntheticConfig::default()
    })
    .closes()
}

#[test]
fn test_sma_is_mean_of_trailing_window() {
    let closes = random_closes(7, 120);

    for window in [5usize, 10, 20, 50] {
        let ma = sma(&closes, window);
        for (i, value) in ma.iter().enumerate() {
            if i + 1 < window {
                assert!(value.is_none(), "ma{} defined at {}", window, i);
                continue;
            }
            let expected = closes[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
            let got = value.unwrap();
            assert!(
                (got - expected).abs() < 1e-6 * expected.abs(),
                "ma{} at {}: {} vs {}",
                window,
                i,
                got,
                expected
            );
        }
    }
}

#[test]
fn test_rsi_stays_in_bounds() {
    for seed in [1u64, 2, 3, 4, 5] {
        let closes = random_closes(seed, 300);
        for value in rsi(&closes, 14).into_iter().flatten() {
            assert!((0.0..=100.0).contains(&value), "seed {}: rsi {}", seed, value);
        }
    }
}

#[test]
fn test_rsi_extremes_on_monotonic_runs() {
    let rising: Vec<f64> = (0..60).map(|i| 100.0 + i as f64 * 1.5).collect();
    let falling: Vec<f64> = rising.iter().rev().copied().collect();

    let up = rsi(&rising, 14);
    let down = rsi(&falling, 14);

    assert_eq!(up.last().copied().flatten(), Some(100.0));
    assert_eq!(down.last().copied().flatten(), Some(0.0));
    assert!(up[13].is_none() && up[14].is_some());
}

#[test]
fn test_macd_histogram_flips_at_crossovers() {
    let closes = random_closes(11, 250);
    let series = macd(&closes, 12, 26, 9);

    for i in 1..closes.len() {
        let previous = (series.macd[i - 1], series.signal[i - 1], series.histogram[i - 1]);
        let current = (series.macd[i], series.signal[i], series.histogram[i]);
        let (Some(m0), Some(s0), Some(h0)) = previous else {
            continue;
        };
        let (Some(m1), Some(s1), Some(h1)) = current else {
            continue;
        };

        assert!((h1 - (m1 - s1)).abs() < 1e-9);
        let crossed = (m0 - s0).signum() != (m1 - s1).signum();
        let flipped = h0.signum() != h1.signum();
        assert_eq!(crossed, flipped, "row {}", i);
    }
}

#[test]
fn test_outlier_removal_on_well_behaved_data() {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let closes = random_closes(21, 400);
    let records: Vec<PriceRecord> = closes
        .iter()
        .enumerate()
        .map(|(i, c)| {
            PriceRecord::new(start + chrono::Duration::days(i as i64), *c)
                .with_ohlc(*c, c * 1.01, c * 0.99)
        })
        .collect();
    let (series, _) = PriceSeries::from_records(records);

    let (cleaned, removed) = remove_close_outliers(&series);
    assert!(removed * 2 <= series.len());
    assert_eq!(cleaned.len() + removed, series.len());

    // every kept row is untouched and inside the fence
    let (lo, hi) = iqr_fence(&closes).unwrap();
    for record in cleaned.records() {
        assert!(record.close >= lo && record.close <= hi);
        assert_eq!(record.high, Some(record.close * 1.01));
        assert_eq!(record.low, Some(record.close * 0.99));
    }
}
