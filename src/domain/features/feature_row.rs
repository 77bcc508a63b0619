use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Technical indicators for one trading day.
///
/// Every derived field is `None` until enough prior rows exist to fill its
/// window, or when the inputs it needs (high/low, auxiliary series) are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRow {
    pub date: Option<NaiveDate>,

    // Inputs
    pub close: Option<f64>,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub usd_close: Option<f64>,
    pub selic: Option<f64>,

    // Returns
    pub returns: Option<f64>,
    pub log_return: Option<f64>,
    pub volatility: Option<f64>,

    // Moving averages
    pub ma5: Option<f64>,
    pub ma10: Option<f64>,
    pub ma20: Option<f64>,
    pub ma50: Option<f64>,
    pub ma200: Option<f64>,

    // Oscillators
    pub rsi: Option<f64>,
    pub ema12: Option<f64>,
    pub ema26: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,
    pub momentum: Option<f64>,
    pub roc: Option<f64>,

    // Bands and ranges
    pub bb_middle: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_lower: Option<f64>,
    pub bb_width: Option<f64>,
    pub tr: Option<f64>,
    pub atr: Option<f64>,
    pub price_range: Option<f64>,
    pub hl_ratio: Option<f64>,
    pub co_ratio: Option<f64>,
    pub tenkan: Option<f64>,
    pub kijun: Option<f64>,

    // Auxiliary series
    pub usd_ma5: Option<f64>,
    pub selic_ma5: Option<f64>,
    pub corr_usd: Option<f64>,
    pub corr_selic: Option<f64>,
    pub close_usd_ratio: Option<f64>,
    pub selic_normalized: Option<f64>,
}

impl FeatureRow {
    /// Value of a feature by its canonical name (see `feature_registry`).
    /// Unknown names yield `None`, same as undefined values.
    pub fn value(&self, canonical: &str) -> Option<f64> {
        match canonical {
            "close" => self.close,
            "open" => self.open,
            "high" => self.high,
            "low" => self.low,
            "usd_close" => self.usd_close,
            "selic" => self.selic,
            "returns" => self.returns,
            "log_return" => self.log_return,
            "volatility" => self.volatility,
            "ma5" => self.ma5,
            "ma10" => self.ma10,
            "ma20" => self.ma20,
            "ma50" => self.ma50,
            "ma200" => self.ma200,
            "rsi" => self.rsi,
            "ema12" => self.ema12,
            "ema26" => self.ema26,
            "macd" => self.macd,
            "macd_signal" => self.macd_signal,
            "macd_hist" => self.macd_hist,
            "momentum" => self.momentum,
            "roc" => self.roc,
            "bb_middle" => self.bb_middle,
            "bb_upper" => self.bb_upper,
            "bb_lower" => self.bb_lower,
            "bb_width" => self.bb_width,
            "tr" => self.tr,
            "atr" => self.atr,
            "price_range" => self.price_range,
            "hl_ratio" => self.hl_ratio,
            "co_ratio" => self.co_ratio,
            "tenkan" => self.tenkan,
            "kijun" => self.kijun,
            "usd_ma5" => self.usd_ma5,
            "selic_ma5" => self.selic_ma5,
            "corr_usd" => self.corr_usd,
            "corr_selic" => self.corr_selic,
            "close_usd_ratio" => self.close_usd_ratio,
            "selic_normalized" => self.selic_normalized,
            _ => None,
        }
    }
}

/// Feature rows aligned one-to-one with the price series they came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureFrame {
    rows: Vec<FeatureRow>,
}

impl FeatureFrame {
    pub fn new(rows: Vec<FeatureRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&FeatureRow> {
        self.rows.last()
    }

    /// Column view by canonical name.
    pub fn column(&self, canonical: &str) -> Vec<Option<f64>> {
        self.rows.iter().map(|r| r.value(canonical)).collect()
    }

    /// Most recent row for which every listed feature is defined.
    pub fn last_complete(&self, canonical: &[&str]) -> Option<&FeatureRow> {
        self.rows
            .iter()
            .rev()
            .find(|row| canonical.iter().all(|name| row.value(name).is_some()))
    }

    /// Last `n` rows.
    pub fn tail(&self, n: usize) -> &[FeatureRow] {
        let start = self.rows.len().saturating_sub(n);
        &self.rows[start..]
    }
}
