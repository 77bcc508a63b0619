use crate::domain::analysis::TechnicalReading;
use crate::domain::features::FeatureFrame;
use crate::domain::market::PriceSeries;
use crate::domain::ml::{ModelInfo, PredictionOutcome};
use crate::domain::performance::PerformanceSummary;
use crate::domain::ports::LoadReport;
use chrono::{DateTime, Utc};

/// Everything a render needs, computed once per load.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub source_id: String,
    pub series: PriceSeries,
    pub report: LoadReport,
    pub frame: FeatureFrame,
    pub prediction: PredictionOutcome,
    /// Latest indicator values; `None` only for an empty frame
    pub reading: Option<TechnicalReading>,
    pub summary: Option<PerformanceSummary>,
    pub model_name: Option<String>,
    pub model_info: ModelInfo,
    pub feature_columns: Vec<String>,
    pub loaded_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    pub fn is_prediction_available(&self) -> bool {
        self.prediction.report().is_some()
    }

    pub fn age_secs(&self) -> i64 {
        (Utc::now() - self.loaded_at).num_seconds()
    }
}
