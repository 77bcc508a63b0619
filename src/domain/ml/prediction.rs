use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicted direction of the next period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Up,
}

impl Direction {
    /// Class index as used by the model artifacts (0 = down, 1 = up).
    pub fn from_label(label: usize) -> Self {
        if label == 1 { Direction::Up } else { Direction::Down }
    }

    pub fn label(&self) -> usize {
        match self {
            Direction::Down => 0,
            Direction::Up => 1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "UP"),
            Direction::Down => write!(f, "DOWN"),
        }
    }
}

/// Raw classifier output for a single feature vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub direction: Direction,
    /// [P(down), P(up)]
    pub probabilities: [f64; 2],
}

impl Prediction {
    /// Argmax over the class probabilities; ties resolve to `Up`.
    pub fn from_probabilities(p_down: f64, p_up: f64) -> Self {
        let direction = if p_up >= p_down {
            Direction::Up
        } else {
            Direction::Down
        };
        Self {
            direction,
            probabilities: [p_down, p_up],
        }
    }

    /// Maximum class probability as a percentage, in [50, 100].
    pub fn confidence(&self) -> f64 {
        self.probabilities[0].max(self.probabilities[1]) * 100.0
    }
}

/// Training metadata published next to the model. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    #[serde(default)]
    pub model_type: Option<String>,
    #[serde(default)]
    pub training_date: Option<String>,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub auc: Option<f64>,
    #[serde(default)]
    pub precision_high: Option<f64>,
    #[serde(default)]
    pub recall_high: Option<f64>,
    #[serde(default)]
    pub f1: Option<f64>,
}

/// A prediction tied to the row it was computed from, with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionReport {
    pub date: Option<NaiveDate>,
    pub prediction: Prediction,
    pub confidence: f64,
    pub reasons: Vec<String>,
}

/// Outcome of the prediction step. Failures are recovered and carried as text.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionOutcome {
    Available(PredictionReport),
    Unavailable(String),
}

impl PredictionOutcome {
    pub fn report(&self) -> Option<&PredictionReport> {
        match self {
            PredictionOutcome::Available(report) => Some(report),
            PredictionOutcome::Unavailable(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_is_argmax_probability() {
        let p = Prediction::from_probabilities(0.3, 0.7);
        assert_eq!(p.direction, Direction::Up);
        assert!((p.confidence() - 70.0).abs() < 1e-9);

        let p = Prediction::from_probabilities(0.8, 0.2);
        assert_eq!(p.direction, Direction::Down);
        assert!((p.confidence() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_model_info_tolerates_partial_json() {
        let info: ModelInfo = serde_json::from_str(r#"{"accuracy": 0.61}"#).unwrap();
        assert_eq!(info.accuracy, Some(0.61));
        assert!(info.model_type.is_none());
    }
}
