use super::predictor::{DirectionClassifier, check_dimension, check_probabilities};
use crate::domain::errors::{ModelError, PredictionError};
use crate::domain::ml::Prediction;
use serde::{Deserialize, Serialize};

/// Per-feature standardization applied before the linear term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Binary logistic regression: P(up) = sigmoid(w·x + b).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
}

impl LogisticModel {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.coefficients.is_empty() {
            return Err(ModelError::Invalid {
                reason: "logistic model has no coefficients".to_string(),
            });
        }
        if let Some(scaler) = &self.scaler {
            let n = self.coefficients.len();
            if scaler.mean.len() != n || scaler.scale.len() != n {
                return Err(ModelError::Invalid {
                    reason: format!(
                        "scaler has {}/{} entries for {} coefficients",
                        scaler.mean.len(),
                        scaler.scale.len(),
                        n
                    ),
                });
            }
        }
        Ok(())
    }

    fn logit(&self, features: &[f64]) -> f64 {
        let scaled = features.iter().enumerate().map(|(i, x)| match &self.scaler {
            Some(s) if s.scale[i] != 0.0 => (x - s.mean[i]) / s.scale[i],
            Some(s) => x - s.mean[i],
            None => *x,
        });
        self.intercept
            + scaled
                .zip(self.coefficients.iter())
                .map(|(x, w)| x * w)
                .sum::<f64>()
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

impl DirectionClassifier for LogisticModel {
    fn predict(&self, features: &[f64]) -> Result<Prediction, PredictionError> {
        check_dimension(self.coefficients.len(), features)?;

        let p_up = sigmoid(self.logit(features));
        let p_down = 1.0 - p_up;
        check_probabilities(p_down, p_up)?;

        Ok(Prediction::from_probabilities(p_down, p_up))
    }

    fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    fn name(&self) -> &str {
        "LogisticRegression"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ml::Direction;

    #[test]
    fn test_zero_logit_is_even() {
        let model = LogisticModel {
            coefficients: vec![1.0, -1.0],
            intercept: 0.0,
            scaler: None,
        };
        let p = model.predict(&[2.0, 2.0]).unwrap();
        assert!((p.probabilities[1] - 0.5).abs() < 1e-12);
        assert!((p.confidence() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_scaler_applied() {
        let model = LogisticModel {
            coefficients: vec![2.0],
            intercept: 0.0,
            scaler: Some(StandardScaler {
                mean: vec![10.0],
                scale: vec![5.0],
            }),
        };
        // (15 - 10) / 5 = 1 -> logit 2
        let p = model.predict(&[15.0]).unwrap();
        assert_eq!(p.direction, Direction::Up);
        assert!((p.probabilities[1] - sigmoid(2.0)).abs() < 1e-12);
    }

    #[test]
    fn test_dimension_mismatch() {
        let model = LogisticModel {
            coefficients: vec![1.0, 1.0],
            intercept: 0.0,
            scaler: None,
        };
        assert_eq!(
            model.predict(&[1.0]).unwrap_err(),
            PredictionError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_scaler_length_checked() {
        let model = LogisticModel {
            coefficients: vec![1.0, 1.0],
            intercept: 0.0,
            scaler: Some(StandardScaler {
                mean: vec![0.0],
                scale: vec![1.0],
            }),
        };
        assert!(model.validate().is_err());
    }
}
