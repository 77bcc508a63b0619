pub mod feature_row;

pub use feature_row::{FeatureFrame, FeatureRow};
