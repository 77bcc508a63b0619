// Snapshot composition and chart windowing for the dashboard
pub mod dashboard;

// Price table -> indicator frame
pub mod feature_engineering_service;
pub mod indicators;

// Loading and cleaning of the price series
pub mod market_data;

// Direction classifiers and the prediction step
pub mod ml;

// Wiring from configuration
pub mod system;
