//! Read-only access to the published model files.

use crate::application::ml::ModelArtifact;
use crate::domain::errors::ModelError;
use crate::domain::ml::ModelInfo;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Paths of the model artifact and its sidecars.
#[derive(Debug, Clone)]
pub struct ModelStore {
    model_path: PathBuf,
    feature_columns_path: PathBuf,
    model_info_path: Option<PathBuf>,
}

/// Everything needed to run and describe the classifier.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub artifact: ModelArtifact,
    pub feature_columns: Vec<String>,
    pub info: ModelInfo,
}

impl ModelStore {
    pub fn new(
        model_path: PathBuf,
        feature_columns_path: PathBuf,
        model_info_path: Option<PathBuf>,
    ) -> Self {
        Self {
            model_path,
            feature_columns_path,
            model_info_path,
        }
    }

    pub fn load(&self) -> Result<LoadedModel, ModelError> {
        let artifact = load_artifact(&self.model_path)?;
        let feature_columns = load_feature_columns(&self.feature_columns_path)?;
        let info = self
            .model_info_path
            .as_deref()
            .map(load_model_info)
            .unwrap_or_default();

        info!(
            "Loaded {} model from {} ({} features)",
            artifact_name(&artifact),
            self.model_path.display(),
            feature_columns.len()
        );
        Ok(LoadedModel {
            artifact,
            feature_columns,
            info,
        })
    }
}

fn artifact_name(artifact: &ModelArtifact) -> &'static str {
    match artifact {
        ModelArtifact::Logistic(_) => "logistic",
        ModelArtifact::Forest(_) => "forest",
    }
}

fn read_file(path: &Path) -> Result<String, ModelError> {
    if !path.exists() {
        return Err(ModelError::NotFound {
            path: path.display().to_string(),
        });
    }
    std::fs::read_to_string(path).map_err(|e| ModelError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

pub fn load_artifact(path: &Path) -> Result<ModelArtifact, ModelError> {
    let content = read_file(path)?;
    let artifact = ModelArtifact::from_json(&content).map_err(|e| ModelError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    artifact.validate()?;
    Ok(artifact)
}

/// Feature names in model order.
///
/// The sidecar is either a JSON list of names or an object whose keys, in file
/// order, are the names.
pub fn load_feature_columns(path: &Path) -> Result<Vec<String>, ModelError> {
    let content = read_file(path)?;
    parse_feature_columns(&content).map_err(|reason| ModelError::Parse {
        path: path.display().to_string(),
        reason,
    })
}

pub fn parse_feature_columns(content: &str) -> Result<Vec<String>, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let columns: Vec<String> = match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(name) => Ok(name),
                other => Err(format!("feature name must be a string, got {}", other)),
            })
            .collect::<Result<_, _>>()?,
        Value::Object(map) => map.into_iter().map(|(name, _)| name).collect(),
        other => return Err(format!("expected a list or an object, got {}", other)),
    };

    if columns.is_empty() {
        return Err("no feature names".to_string());
    }
    Ok(columns)
}

/// Missing or malformed model info is not fatal; every field shows as n/a.
pub fn load_model_info(path: &Path) -> ModelInfo {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            warn!("Model info unavailable at {}: {}", path.display(), e);
            return ModelInfo::default();
        }
    };
    serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!("Ignoring malformed model info {}: {}", path.display(), e);
        ModelInfo::default()
    })
}
