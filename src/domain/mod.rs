// Indicator readings and their explanation
pub mod analysis;

// Domain-specific error types
pub mod errors;

// Derived per-row features
pub mod features;

// Price records and series
pub mod market;

// Prediction types and the feature registry
pub mod ml;

// Return and risk statistics
pub mod performance;

// Port interfaces
pub mod ports;

// Input validation
pub mod validation;
