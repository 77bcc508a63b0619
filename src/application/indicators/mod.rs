//! Fixed-window indicator functions over daily series.
//!
//! Every function returns one `Option<f64>` per input row; `None` marks rows
//! where the window is not yet full or an input is missing.

pub mod channel;
pub mod correlation;
pub mod momentum;
pub mod rolling;
pub mod trend;
pub mod volatility;
