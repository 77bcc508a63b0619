// Pre-trained direction classifiers and the prediction step
pub mod artifact;
pub mod forest;
pub mod logistic;
pub mod prediction_service;
pub mod predictor;

pub use artifact::ModelArtifact;
pub use prediction_service::PredictionService;
pub use predictor::DirectionClassifier;
