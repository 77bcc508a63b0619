use crate::domain::errors::LoadError;
use crate::domain::features::FeatureFrame;
use crate::domain::market::PriceSeries;

/// Where price history comes from.
pub trait PriceSource: Send + Sync {
    /// Loads, validates and sorts the series. Missing required columns are fatal.
    fn load(&self) -> Result<LoadedSeries, LoadError>;

    /// Identifies the source for caching and log messages.
    fn source_id(&self) -> String;
}

/// A loaded series and what happened to the input on the way.
#[derive(Debug, Clone)]
pub struct LoadedSeries {
    pub series: PriceSeries,
    pub report: LoadReport,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows_read: usize,
    pub rows_dropped: usize,
    pub duplicates: usize,
    pub outliers_removed: usize,
}

/// Turns a price series into one feature row per record.
pub trait FeatureEngineeringService: Send + Sync {
    fn compute(&self, series: &PriceSeries) -> FeatureFrame;
}
