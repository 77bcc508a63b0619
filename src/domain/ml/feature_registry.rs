use crate::domain::errors::PredictionError;
use crate::domain::features::FeatureRow;

/// Every feature the engine can compute, by canonical name.
///
/// Model sidecars refer to these names (or to an alias below). The order here
/// is only the display order; the model's input order always comes from its
/// sidecar.
pub const FEATURE_NAMES: &[&str] = &[
    "close",
    "open",
    "high",
    "low",
    "usd_close",
    "selic",
    "returns",
    "log_return",
    "volatility",
    "ma5",
    "ma10",
    "ma20",
    "ma50",
    "ma200",
    "rsi",
    "ema12",
    "ema26",
    "macd",
    "macd_signal",
    "macd_hist",
    "momentum",
    "roc",
    "bb_middle",
    "bb_upper",
    "bb_lower",
    "bb_width",
    "tr",
    "atr",
    "price_range",
    "hl_ratio",
    "co_ratio",
    "tenkan",
    "kijun",
    "usd_ma5",
    "selic_ma5",
    "corr_usd",
    "corr_selic",
    "close_usd_ratio",
    "selic_normalized",
];

/// Alternative spellings found in older sidecars.
const ALIASES: &[(&str, &str)] = &[
    ("signal", "macd_signal"),
    ("signal_line", "macd_signal"),
    ("volume_change", "returns"),
];

/// Resolves a sidecar name to its canonical feature name.
pub fn canonical_name(name: &str) -> Option<&'static str> {
    let trimmed = name.trim();
    FEATURE_NAMES
        .iter()
        .find(|known| **known == trimmed)
        .copied()
        .or_else(|| {
            ALIASES
                .iter()
                .find(|(alias, _)| *alias == trimmed)
                .map(|(_, canonical)| *canonical)
        })
}

/// Resolves every sidecar name, failing with the full list of unknown ones.
pub fn resolve_columns(columns: &[String]) -> Result<Vec<&'static str>, PredictionError> {
    let mut resolved = Vec::with_capacity(columns.len());
    let mut missing = Vec::new();

    for column in columns {
        match canonical_name(column) {
            Some(canonical) => resolved.push(canonical),
            None => missing.push(column.clone()),
        }
    }

    if missing.is_empty() {
        Ok(resolved)
    } else {
        Err(PredictionError::FeatureMismatch { missing })
    }
}

/// Builds the model input in sidecar order. `None` if any value is undefined.
pub fn features_to_vector(row: &FeatureRow, canonical: &[&str]) -> Option<Vec<f64>> {
    canonical.iter().map(|name| row.value(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_name_is_readable() {
        // A row with no values still answers for every registered name
        let row = FeatureRow::default();
        for name in FEATURE_NAMES {
            assert_eq!(row.value(name), None, "{name} should be a known field");
        }
    }

    #[test]
    fn test_aliases_resolve() {
        assert_eq!(canonical_name("signal_line"), Some("macd_signal"));
        assert_eq!(canonical_name(" signal "), Some("macd_signal"));
        assert_eq!(canonical_name("rsi"), Some("rsi"));
        assert_eq!(canonical_name("hurst"), None);
    }

    #[test]
    fn test_resolve_reports_all_missing() {
        let columns = vec!["rsi".to_string(), "foo".to_string(), "bar".to_string()];
        let err = resolve_columns(&columns).unwrap_err();
        assert_eq!(
            err,
            PredictionError::FeatureMismatch {
                missing: vec!["foo".to_string(), "bar".to_string()]
            }
        );
    }

    #[test]
    fn test_feature_vector_order_follows_sidecar() {
        let row = FeatureRow {
            rsi: Some(70.0),
            macd: Some(-2.0),
            ..Default::default()
        };

        let vec = features_to_vector(&row, &["macd", "rsi"]).unwrap();
        assert_eq!(vec, vec![-2.0, 70.0]);

        assert!(features_to_vector(&row, &["macd", "atr"]).is_none());
    }
}
