pub mod signals;

pub use signals::{
    MaTrend, MacdBias, RSI_OVERBOUGHT, RSI_OVERSOLD, RsiZone, TechnicalReading, VolatilityRegime,
};
