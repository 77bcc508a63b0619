use thiserror::Error;

/// Errors raised while reading and cleaning the price table.
///
/// Every variant is fatal for a render: the caller must surface it to the user.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Required column '{column}' not found in {source_name} (available: {available})")]
    MissingColumn {
        column: String,
        source_name: String,
        available: String,
    },

    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Malformed CSV in {path}: {reason}")]
    Csv { path: String, reason: String },

    #[error("No usable rows left in {source_name} after cleaning ({rows_read} read)")]
    EmptySeries {
        source_name: String,
        rows_read: usize,
    },

    #[error("Unknown CSV layout '{0}'. Must be 'unified' or 'localized'")]
    UnknownLayout(String),
}

/// Errors raised while turning the latest feature row into a prediction.
///
/// These are recoverable: the dashboard shows "prediction unavailable" and keeps rendering.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PredictionError {
    #[error("Model expects features that are not computed: {}", missing.join(", "))]
    FeatureMismatch { missing: Vec<String> },

    #[error("No row has all {required} model features defined")]
    NoCompleteRow { required: usize },

    #[error("Model expects {expected} inputs, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Model produced an invalid output: {reason}")]
    InvalidOutput { reason: String },
}

/// Errors raised while loading the model artifact and its sidecars.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model file not found at {path}")]
    NotFound { path: String },

    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Invalid model artifact: {reason}")]
    Invalid { reason: String },
}
