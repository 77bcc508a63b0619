use super::predictor::DirectionClassifier;
use crate::domain::analysis::TechnicalReading;
use crate::domain::errors::PredictionError;
use crate::domain::features::FeatureFrame;
use crate::domain::ml::feature_registry::{features_to_vector, resolve_columns};
use crate::domain::ml::{PredictionOutcome, PredictionReport};
use std::sync::Arc;
use tracing::{info, warn};

/// Applies a classifier to the most recent complete feature row.
pub struct PredictionService {
    model: Arc<dyn DirectionClassifier>,
    feature_columns: Vec<String>,
}

impl PredictionService {
    pub fn new(model: Arc<dyn DirectionClassifier>, feature_columns: Vec<String>) -> Self {
        Self {
            model,
            feature_columns,
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    pub fn feature_columns(&self) -> &[String] {
        &self.feature_columns
    }

    /// Predicts the next-period direction.
    ///
    /// The model only sees the latest row where every sidecar feature is
    /// defined; the explanation always describes the latest row.
    pub fn predict_latest(
        &self,
        frame: &FeatureFrame,
    ) -> Result<PredictionReport, PredictionError> {
        let columns = resolve_columns(&self.feature_columns)?;
        if columns.len() != self.model.n_features() {
            return Err(PredictionError::DimensionMismatch {
                expected: self.model.n_features(),
                actual: columns.len(),
            });
        }

        let row = frame
            .last_complete(&columns)
            .ok_or(PredictionError::NoCompleteRow {
                required: columns.len(),
            })?;
        let vector = features_to_vector(row, &columns).ok_or(PredictionError::NoCompleteRow {
            required: columns.len(),
        })?;

        let prediction = self.model.predict(&vector)?;
        let confidence = prediction.confidence();

        let reasons = frame
            .last()
            .map(|latest| TechnicalReading::from_row(latest).reasons())
            .unwrap_or_default();

        info!(
            "Prediction for {:?}: {} ({:.1}% confidence, model {})",
            row.date,
            prediction.direction,
            confidence,
            self.model.name()
        );

        Ok(PredictionReport {
            date: row.date,
            prediction,
            confidence,
            reasons,
        })
    }

    /// Same as [`predict_latest`](Self::predict_latest), with failures
    /// recovered into an unavailable outcome.
    pub fn outcome(&self, frame: &FeatureFrame) -> PredictionOutcome {
        match self.predict_latest(frame) {
            Ok(report) => PredictionOutcome::Available(report),
            Err(e) => {
                warn!("Prediction unavailable: {}", e);
                PredictionOutcome::Unavailable(e.to_string())
            }
        }
    }
}
