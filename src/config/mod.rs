//! Configuration module for Trendcast.
//!
//! This module provides structured configuration loading from environment variables,
//! organized by concern: Data, Model, Dashboard, and Indicators.

mod dashboard_config;
mod data_config;
mod indicator_config;
mod model_config;

pub use dashboard_config::DashboardEnvConfig;
pub use data_config::{DataEnvConfig, layout_from_env};
pub use indicator_config::{IndicatorConfig, MaWindows};
pub use model_config::ModelEnvConfig;

use crate::infrastructure::csv_source::CsvLayout;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    // Data
    pub data_path: PathBuf,
    pub csv_layout: CsvLayout,
    pub remove_outliers: bool,

    // Model
    pub model_path: PathBuf,
    pub feature_columns_path: PathBuf,
    pub model_info_path: Option<PathBuf>,

    // Dashboard
    pub cache_ttl_secs: u64,
    pub default_window_days: usize,
    pub chart_sampling_rate: usize,

    // Indicators
    pub indicators: IndicatorConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let data = DataEnvConfig::from_env().context("Failed to load data config")?;
        let model = ModelEnvConfig::from_env();
        let dashboard = DashboardEnvConfig::from_env().context("Failed to load dashboard config")?;

        let indicators = match env::var("INDICATOR_CONFIG") {
            Ok(path) if !path.trim().is_empty() => {
                IndicatorConfig::from_toml_file(&PathBuf::from(path.trim()))?
            }
            _ => IndicatorConfig::default(),
        };

        Ok(Self {
            data_path: data.data_path,
            csv_layout: data.layout,
            remove_outliers: data.remove_outliers,

            model_path: model.model_path,
            feature_columns_path: model.feature_columns_path,
            model_info_path: model.model_info_path,

            cache_ttl_secs: dashboard.cache_ttl_secs,
            default_window_days: dashboard.default_window_days,
            chart_sampling_rate: dashboard.chart_sampling_rate,

            indicators,
        })
    }
}
