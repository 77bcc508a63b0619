pub mod feature_registry;
pub mod prediction;

pub use prediction::{Direction, ModelInfo, Prediction, PredictionOutcome, PredictionReport};
