pub mod price_record;
pub mod price_series;

pub use price_record::PriceRecord;
pub use price_series::{PriceSeries, SeriesReport};
