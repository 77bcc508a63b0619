//! Model artifact locations.

use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ModelEnvConfig {
    pub model_path: PathBuf,
    pub feature_columns_path: PathBuf,
    /// Optional training metadata
    pub model_info_path: Option<PathBuf>,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("assets/model/model.json"),
            feature_columns_path: PathBuf::from("assets/model/feature_columns.json"),
            model_info_path: Some(PathBuf::from("assets/model/model_info.json")),
        }
    }
}

impl ModelEnvConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            feature_columns_path: env::var("FEATURE_COLUMNS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.feature_columns_path),
            model_info_path: match env::var("MODEL_INFO_PATH") {
                Ok(path) if path.trim().is_empty() => None,
                Ok(path) => Some(PathBuf::from(path)),
                Err(_) => defaults.model_info_path,
            },
        }
    }
}
