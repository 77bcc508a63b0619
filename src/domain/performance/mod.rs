// Return and risk statistics over the price series
pub mod stats;
pub mod summary;

pub use stats::{Histogram, Stats};
pub use summary::PerformanceSummary;
