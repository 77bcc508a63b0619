//! Threshold-based reading of the latest indicators.
//!
//! These are the fixed rules the dashboard uses to explain a prediction:
//! - RSI above 70 is overbought, below 30 oversold
//! - MACD above its signal line is bullish
//! - MA10 > MA20 > MA50 is an uptrend, the reverse a downtrend
//! - daily volatility above 2% is high, below 0.5% low

use crate::domain::features::FeatureRow;
use serde::Serialize;

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;
pub const VOLATILITY_HIGH_PCT: f64 = 2.0;
pub const VOLATILITY_LOW_PCT: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RsiZone {
    Overbought,
    Oversold,
    Neutral,
}

impl RsiZone {
    /// An undefined RSI (flat window) reads as neutral.
    pub fn classify(rsi: Option<f64>) -> Self {
        match rsi {
            Some(v) if v > RSI_OVERBOUGHT => RsiZone::Overbought,
            Some(v) if v < RSI_OVERSOLD => RsiZone::Oversold,
            _ => RsiZone::Neutral,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MacdBias {
    Bullish,
    Bearish,
}

impl MacdBias {
    pub fn classify(macd: f64, signal: f64) -> Self {
        if macd > signal {
            MacdBias::Bullish
        } else {
            MacdBias::Bearish
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaTrend {
    Up,
    Down,
    Mixed,
}

impl MaTrend {
    pub fn classify(fast: f64, mid: f64, slow: f64) -> Self {
        if fast > mid && mid > slow {
            MaTrend::Up
        } else if fast < mid && mid < slow {
            MaTrend::Down
        } else {
            MaTrend::Mixed
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VolatilityRegime {
    High,
    Moderate,
    Low,
}

impl VolatilityRegime {
    pub fn classify(volatility_pct: f64) -> Self {
        if volatility_pct > VOLATILITY_HIGH_PCT {
            VolatilityRegime::High
        } else if volatility_pct < VOLATILITY_LOW_PCT {
            VolatilityRegime::Low
        } else {
            VolatilityRegime::Moderate
        }
    }
}

/// Snapshot of the latest indicator values plus their classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalReading {
    pub close: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub ma10: Option<f64>,
    pub ma20: Option<f64>,
    pub ma50: Option<f64>,
    /// Daily volatility in percent
    pub volatility_pct: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_lower: Option<f64>,

    pub rsi_zone: RsiZone,
    pub macd_bias: Option<MacdBias>,
    pub ma_trend: Option<MaTrend>,
    pub volatility_regime: Option<VolatilityRegime>,
}

impl TechnicalReading {
    pub fn from_row(row: &FeatureRow) -> Self {
        let volatility_pct = row.volatility.map(|v| v * 100.0);

        let macd_bias = match (row.macd, row.macd_signal) {
            (Some(m), Some(s)) => Some(MacdBias::classify(m, s)),
            _ => None,
        };
        let ma_trend = match (row.ma10, row.ma20, row.ma50) {
            (Some(a), Some(b), Some(c)) => Some(MaTrend::classify(a, b, c)),
            _ => None,
        };

        Self {
            close: row.close,
            rsi: row.rsi,
            macd: row.macd,
            macd_signal: row.macd_signal,
            ma10: row.ma10,
            ma20: row.ma20,
            ma50: row.ma50,
            volatility_pct,
            bb_upper: row.bb_upper,
            bb_lower: row.bb_lower,
            rsi_zone: RsiZone::classify(row.rsi),
            macd_bias,
            ma_trend,
            volatility_regime: volatility_pct.map(VolatilityRegime::classify),
        }
    }

    /// Human-readable reasons, in display order: RSI, MACD, moving averages.
    pub fn reasons(&self) -> Vec<String> {
        let mut reasons = Vec::with_capacity(3);

        let rsi_text = self
            .rsi
            .map(|v| format!("RSI {:.0}", v))
            .unwrap_or_else(|| "RSI n/a".to_string());
        reasons.push(match self.rsi_zone {
            RsiZone::Overbought => format!("{} (overbought - watch for selling)", rsi_text),
            RsiZone::Oversold => format!("{} (oversold - possible buying)", rsi_text),
            RsiZone::Neutral => format!("{} (neutral)", rsi_text),
        });

        match self.macd_bias {
            Some(MacdBias::Bullish) => reasons.push("MACD > Signal (bullish)".to_string()),
            Some(MacdBias::Bearish) => reasons.push("MACD < Signal (bearish)".to_string()),
            None => {}
        }

        match self.ma_trend {
            Some(MaTrend::Up) => reasons.push("MAs rising (10 > 20 > 50)".to_string()),
            Some(MaTrend::Down) => reasons.push("MAs falling (10 < 20 < 50)".to_string()),
            Some(MaTrend::Mixed) => reasons.push("MAs mixed".to_string()),
            None => {}
        }

        reasons
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_zones() {
        assert_eq!(RsiZone::classify(Some(75.0)), RsiZone::Overbought);
        assert_eq!(RsiZone::classify(Some(25.0)), RsiZone::Oversold);
        assert_eq!(RsiZone::classify(Some(70.0)), RsiZone::Neutral);
        assert_eq!(RsiZone::classify(None), RsiZone::Neutral);
    }

    #[test]
    fn test_ma_trend_ordering() {
        assert_eq!(MaTrend::classify(3.0, 2.0, 1.0), MaTrend::Up);
        assert_eq!(MaTrend::classify(1.0, 2.0, 3.0), MaTrend::Down);
        assert_eq!(MaTrend::classify(2.0, 3.0, 1.0), MaTrend::Mixed);
    }

    #[test]
    fn test_volatility_regime_uses_percent() {
        assert_eq!(VolatilityRegime::classify(2.5), VolatilityRegime::High);
        assert_eq!(VolatilityRegime::classify(1.0), VolatilityRegime::Moderate);
        assert_eq!(VolatilityRegime::classify(0.2), VolatilityRegime::Low);
    }

    #[test]
    fn test_reasons_from_row() {
        let row = FeatureRow {
            rsi: Some(82.4),
            macd: Some(10.0),
            macd_signal: Some(12.0),
            ma10: Some(105.0),
            ma20: Some(103.0),
            ma50: Some(100.0),
            volatility: Some(0.012),
            ..Default::default()
        };

        let reading = TechnicalReading::from_row(&row);
        assert_eq!(reading.volatility_regime, Some(VolatilityRegime::Moderate));

        let reasons = reading.reasons();
        assert_eq!(reasons.len(), 3);
        assert!(reasons[0].starts_with("RSI 82"));
        assert!(reasons[0].contains("overbought"));
        assert!(reasons[1].contains("bearish"));
        assert!(reasons[2].contains("rising"));
    }
}
