use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::dashboard::{DashboardOptions, DashboardService};
use crate::application::feature_engineering_service::TechnicalFeatureEngineeringService;
use crate::application::ml::{DirectionClassifier, PredictionService};
use crate::config::Config;
use crate::domain::ml::ModelInfo;
use crate::domain::ports::{FeatureEngineeringService, PriceSource};
use crate::infrastructure::csv_source::CsvPriceSource;
use crate::infrastructure::model_store::ModelStore;

/// Wires the configured data source, feature pipeline and model into a dashboard service.
pub struct Application {
    pub config: Config,
    pub source: Arc<dyn PriceSource>,
    pub features: Arc<dyn FeatureEngineeringService>,
    pub predictor: Result<PredictionService, String>,
    pub model_info: ModelInfo,
}

impl Application {
    /// A missing or invalid model is not fatal: predictions are reported as unavailable.
    pub fn build(config: Config) -> Result<Self> {
        info!(
            "Building Trendcast (data: {}, layout: {})",
            config.data_path.display(),
            config.csv_layout.name
        );

        config.indicators.validate()?;

        let source: Arc<dyn PriceSource> = Arc::new(CsvPriceSource::new(
            &config.data_path,
            config.csv_layout.clone(),
        ));
        let features: Arc<dyn FeatureEngineeringService> = Arc::new(
            TechnicalFeatureEngineeringService::new(config.indicators.clone()),
        );

        let store = ModelStore::new(
            config.model_path.clone(),
            config.feature_columns_path.clone(),
            config.model_info_path.clone(),
        );
        let (predictor, model_info) = match store.load() {
            Ok(loaded) => {
                let model: Arc<dyn DirectionClassifier> = Arc::new(loaded.artifact);
                (
                    Ok(PredictionService::new(model, loaded.feature_columns)),
                    loaded.info,
                )
            }
            Err(e) => {
                warn!("Model unavailable, predictions disabled: {}", e);
                (Err(e.to_string()), ModelInfo::default())
            }
        };

        Ok(Self {
            config,
            source,
            features,
            predictor,
            model_info,
        })
    }

    pub fn dashboard_options(&self) -> DashboardOptions {
        DashboardOptions {
            remove_outliers: self.config.remove_outliers,
            cache_ttl_secs: self.config.cache_ttl_secs,
            window_days: self.config.default_window_days,
        }
    }

    /// Consumes the application into the shared dashboard service.
    pub fn into_dashboard(self) -> DashboardService {
        let options = self.dashboard_options();
        DashboardService::new(
            self.source,
            self.features,
            self.predictor,
            self.model_info,
            options,
        )
    }
}
