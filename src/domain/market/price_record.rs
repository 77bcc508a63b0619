use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of the loaded table.
///
/// Only `date` and `close` are mandatory; the localized export often carries
/// nothing but the last traded price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: f64,
    /// FX rate of the local currency against the dollar
    pub usd_close: Option<f64>,
    /// Benchmark interest rate
    pub selic: Option<f64>,
}

impl PriceRecord {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            open: None,
            high: None,
            low: None,
            close,
            usd_close: None,
            selic: None,
        }
    }

    pub fn with_ohlc(mut self, open: f64, high: f64, low: f64) -> Self {
        self.open = Some(open);
        self.high = Some(high);
        self.low = Some(low);
        self
    }

    pub fn with_aux(mut self, usd_close: Option<f64>, selic: Option<f64>) -> Self {
        self.usd_close = usd_close;
        self.selic = selic;
        self
    }

    /// High and low together, as needed by range-based indicators.
    pub fn range(&self) -> Option<(f64, f64)> {
        Some((self.high?, self.low?))
    }
}
