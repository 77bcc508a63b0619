use crate::domain::errors::PredictionError;
use crate::domain::ml::Prediction;

/// Interface for pre-trained direction classifiers
pub trait DirectionClassifier: Send + Sync {
    /// Class probabilities for one feature vector, in sidecar order
    fn predict(&self, features: &[f64]) -> Result<Prediction, PredictionError>;

    /// Number of inputs the model was trained on
    fn n_features(&self) -> usize;

    /// Get model name/type
    fn name(&self) -> &str;
}

/// Rejects vectors whose length differs from what the model expects.
pub(crate) fn check_dimension(expected: usize, features: &[f64]) -> Result<(), PredictionError> {
    if features.len() != expected {
        return Err(PredictionError::DimensionMismatch {
            expected,
            actual: features.len(),
        });
    }
    Ok(())
}

/// Rejects probability pairs that are not a distribution.
pub(crate) fn check_probabilities(p_down: f64, p_up: f64) -> Result<(), PredictionError> {
    let valid = |p: f64| p.is_finite() && (0.0..=1.0).contains(&p);
    if !valid(p_down) || !valid(p_up) || ((p_down + p_up) - 1.0).abs() > 1e-6 {
        return Err(PredictionError::InvalidOutput {
            reason: format!("probabilities [{}, {}] do not sum to 1", p_down, p_up),
        });
    }
    Ok(())
}
