pub mod csv_source;
pub mod export;
pub mod model_store;
pub mod synthetic;

pub use csv_source::{CsvLayout, CsvPriceSource};
pub use model_store::ModelStore;
