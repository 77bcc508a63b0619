use super::snapshot::DashboardSnapshot;
use crate::application::market_data::loader::load_clean_series;
use crate::application::ml::PredictionService;
use crate::domain::analysis::TechnicalReading;
use crate::domain::errors::LoadError;
use crate::domain::ml::{ModelInfo, PredictionOutcome};
use crate::domain::performance::PerformanceSummary;
use crate::domain::ports::{FeatureEngineeringService, PriceSource};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{debug, info};

/// Options that shape a snapshot.
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    pub remove_outliers: bool,
    pub cache_ttl_secs: u64,
    /// Window used for the period-change statistic
    pub window_days: usize,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            remove_outliers: true,
            cache_ttl_secs: 3600,
            window_days: 30,
        }
    }
}

/// Composes load, features, prediction and statistics into one snapshot,
/// memoized per data source for the configured TTL.
pub struct DashboardService {
    source: Arc<dyn PriceSource>,
    features: Arc<dyn FeatureEngineeringService>,
    predictor: Result<PredictionService, String>,
    model_info: ModelInfo,
    options: DashboardOptions,
    cache: RwLock<HashMap<String, Arc<DashboardSnapshot>>>,
}

impl std::fmt::Debug for DashboardService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardService")
            .field("source", &self.source.source_id())
            .field("options", &self.options)
            .field("cache", &"<RwLock>")
            .finish()
    }
}

impl DashboardService {
    /// `predictor` carries the reason when the model could not be loaded; the
    /// snapshot then reports the prediction as unavailable.
    pub fn new(
        source: Arc<dyn PriceSource>,
        features: Arc<dyn FeatureEngineeringService>,
        predictor: Result<PredictionService, String>,
        model_info: ModelInfo,
        options: DashboardOptions,
    ) -> Self {
        Self {
            source,
            features,
            predictor,
            model_info,
            options,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn options(&self) -> &DashboardOptions {
        &self.options
    }

    /// Cached snapshot, rebuilt when missing or older than the TTL.
    pub fn snapshot(&self) -> Result<Arc<DashboardSnapshot>, LoadError> {
        let key = self.source.source_id();

        if let Some(cached) = self.cached(&key) {
            debug!("Snapshot cache hit for {} ({}s old)", key, cached.age_secs());
            return Ok(cached);
        }

        let snapshot = Arc::new(self.build(key.clone())?);
        match self.cache.write() {
            Ok(mut guard) => {
                guard.insert(key, snapshot.clone());
            }
            Err(poisoned) => {
                tracing::error!("DashboardService: cache lock poisoned during write, recovering");
                poisoned.into_inner().insert(key, snapshot.clone());
            }
        }
        Ok(snapshot)
    }

    /// Drops every cached snapshot so the next call reloads from disk.
    pub fn invalidate(&self) {
        match self.cache.write() {
            Ok(mut guard) => guard.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
        info!("Snapshot cache cleared");
    }

    fn cached(&self, key: &str) -> Option<Arc<DashboardSnapshot>> {
        let guard = match self.cache.read() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        let snapshot = guard.get(key)?;
        let fresh = snapshot.age_secs() < self.options.cache_ttl_secs as i64;
        fresh.then(|| snapshot.clone())
    }

    fn build(&self, source_id: String) -> Result<DashboardSnapshot, LoadError> {
        let loaded = load_clean_series(self.source.as_ref(), self.options.remove_outliers)?;
        let frame = self.features.compute(&loaded.series);

        let (prediction, model_name, feature_columns) = match &self.predictor {
            Ok(svc) => (
                svc.outcome(&frame),
                Some(svc.model_name().to_string()),
                svc.feature_columns().to_vec(),
            ),
            Err(reason) => (
                PredictionOutcome::Unavailable(reason.clone()),
                None,
                Vec::new(),
            ),
        };

        let reading = frame.last().map(TechnicalReading::from_row);
        let summary = PerformanceSummary::from_series(&loaded.series, self.options.window_days);

        Ok(DashboardSnapshot {
            source_id,
            series: loaded.series,
            report: loaded.report,
            frame,
            prediction,
            reading,
            summary,
            model_name,
            model_info: self.model_info.clone(),
            feature_columns,
            loaded_at: Utc::now(),
        })
    }
}
