use super::forest::ForestModel;
use super::logistic::LogisticModel;
use super::predictor::DirectionClassifier;
use crate::domain::errors::{ModelError, PredictionError};
use crate::domain::ml::Prediction;
use serde::{Deserialize, Serialize};

/// Serialized classifier, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Logistic(LogisticModel),
    Forest(ForestModel),
}

impl ModelArtifact {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            ModelArtifact::Logistic(m) => m.validate(),
            ModelArtifact::Forest(m) => m.validate(),
        }
    }

    fn inner(&self) -> &dyn DirectionClassifier {
        match self {
            ModelArtifact::Logistic(m) => m,
            ModelArtifact::Forest(m) => m,
        }
    }
}

impl DirectionClassifier for ModelArtifact {
    fn predict(&self, features: &[f64]) -> Result<Prediction, PredictionError> {
        self.inner().predict(features)
    }

    fn n_features(&self) -> usize {
        self.inner().n_features()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logistic_artifact_roundtrip_through_kind_tag() {
        let json = r#"{
            "kind": "logistic",
            "coefficients": [0.5, -0.25],
            "intercept": 0.1
        }"#;
        let artifact = ModelArtifact::from_json(json).unwrap();
        assert!(artifact.validate().is_ok());
        assert_eq!(artifact.n_features(), 2);
        assert_eq!(artifact.name(), "LogisticRegression");
    }

    #[test]
    fn test_unknown_kind_rejected() {
        assert!(ModelArtifact::from_json(r#"{"kind": "svm"}"#).is_err());
    }
}
