use crate::application::dashboard::DashboardSnapshot;
use crate::domain::analysis::{MaTrend, MacdBias, RsiZone, VolatilityRegime};
use crate::domain::ml::{Direction, PredictionOutcome};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

pub const NOT_AVAILABLE: &str = "n/a";

pub fn fmt_opt(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format!("{:.*}", decimals, v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn fmt_pct(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:+.2}%", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Model metrics stored as fractions are shown as percentages.
pub fn fmt_ratio_pct(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.1}%", v * 100.0))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub struct HeaderMetrics {
    pub last_close: String,
    pub day_change: String,
    pub day_change_color: egui::Color32,
    pub period_change: String,
    pub period_label: String,
    pub period_change_color: egui::Color32,
    pub volatility: String,
    pub volatility_color: egui::Color32,
    pub last_date: String,
}

pub struct PredictionBanner {
    pub headline: String,
    pub detail: String,
    pub color: egui::Color32,
    pub reasons: Vec<String>,
}

pub struct ReadingPill {
    pub label: &'static str,
    pub value: String,
    pub status: &'static str,
    pub color: egui::Color32,
}

pub struct DashboardViewModel;

impl DashboardViewModel {
    pub fn header(snapshot: &DashboardSnapshot, period_days: Option<usize>) -> HeaderMetrics {
        let closes = snapshot.series.closes();
        let period_change = period_days
            .map(|d| crate::domain::performance::Stats::period_change_pct(&closes, d))
            .or_else(|| snapshot.summary.as_ref().map(|s| s.total_return_pct));
        let day_change = snapshot.summary.as_ref().and_then(|s| s.day_change_pct);
        let volatility = snapshot.reading.as_ref().and_then(|r| r.volatility_pct);

        HeaderMetrics {
            last_close: fmt_opt(snapshot.series.last().map(|r| r.close), 2),
            day_change: fmt_pct(day_change),
            day_change_color: DesignSystem::change_color(day_change.unwrap_or(0.0)),
            period_change: fmt_pct(period_change),
            period_label: period_days
                .map(|d| format!("Last {} days", d))
                .unwrap_or_else(|| "Whole series".to_string()),
            period_change_color: DesignSystem::change_color(period_change.unwrap_or(0.0)),
            volatility: volatility
                .map(|v| format!("{:.2}%", v))
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            volatility_color: match volatility.map(VolatilityRegime::classify) {
                Some(VolatilityRegime::High) => DesignSystem::DOWN,
                Some(VolatilityRegime::Low) => DesignSystem::UP,
                _ => DesignSystem::WARNING,
            },
            last_date: snapshot
                .series
                .last()
                .map(|r| r.date.format("%d/%m/%Y").to_string())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }

    pub fn prediction(snapshot: &DashboardSnapshot) -> PredictionBanner {
        match &snapshot.prediction {
            PredictionOutcome::Available(report) => {
                let (headline, color) = match report.prediction.direction {
                    Direction::Up => ("UP - close expected to rise", DesignSystem::UP),
                    Direction::Down => ("DOWN - close expected to fall", DesignSystem::DOWN),
                };
                let as_of = report
                    .date
                    .map(|d| d.format("%d/%m/%Y").to_string())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string());
                PredictionBanner {
                    headline: headline.to_string(),
                    detail: format!(
                        "Confidence {:.1}% (P(up) {:.2}, as of {})",
                        report.confidence, report.prediction.probabilities[1], as_of
                    ),
                    color,
                    reasons: report.reasons.clone(),
                }
            }
            PredictionOutcome::Unavailable(reason) => PredictionBanner {
                headline: "Prediction unavailable".to_string(),
                detail: reason.clone(),
                color: DesignSystem::WARNING,
                reasons: snapshot
                    .reading
                    .as_ref()
                    .map(|r| r.reasons())
                    .unwrap_or_default(),
            },
        }
    }

    /// Current readings in display order: RSI, MACD, trend, volatility.
    pub fn readings(snapshot: &DashboardSnapshot) -> Vec<ReadingPill> {
        let Some(reading) = snapshot.reading.as_ref() else {
            return Vec::new();
        };

        let (rsi_status, rsi_color) = match reading.rsi_zone {
            RsiZone::Overbought => ("Overbought", DesignSystem::DOWN),
            RsiZone::Oversold => ("Oversold", DesignSystem::UP),
            RsiZone::Neutral => ("Neutral", DesignSystem::NEUTRAL),
        };
        let (macd_status, macd_color) = match reading.macd_bias {
            Some(MacdBias::Bullish) => ("Bullish", DesignSystem::UP),
            Some(MacdBias::Bearish) => ("Bearish", DesignSystem::DOWN),
            None => (NOT_AVAILABLE, DesignSystem::NEUTRAL),
        };
        let (trend_status, trend_color) = match reading.ma_trend {
            Some(MaTrend::Up) => ("Uptrend", DesignSystem::UP),
            Some(MaTrend::Down) => ("Downtrend", DesignSystem::DOWN),
            Some(MaTrend::Mixed) => ("Mixed", DesignSystem::WARNING),
            None => (NOT_AVAILABLE, DesignSystem::NEUTRAL),
        };
        let (vol_status, vol_color) = match reading.volatility_regime {
            Some(VolatilityRegime::High) => ("High", DesignSystem::DOWN),
            Some(VolatilityRegime::Moderate) => ("Moderate", DesignSystem::WARNING),
            Some(VolatilityRegime::Low) => ("Low", DesignSystem::UP),
            None => (NOT_AVAILABLE, DesignSystem::NEUTRAL),
        };

        vec![
            ReadingPill {
                label: "RSI (14)",
                value: fmt_opt(reading.rsi, 2),
                status: rsi_status,
                color: rsi_color,
            },
            ReadingPill {
                label: "MACD",
                value: format!(
                    "{} / {}",
                    fmt_opt(reading.macd, 4),
                    fmt_opt(reading.macd_signal, 4)
                ),
                status: macd_status,
                color: macd_color,
            },
            ReadingPill {
                label: "MA 10/20/50",
                value: format!(
                    "{} / {} / {}",
                    fmt_opt(reading.ma10, 2),
                    fmt_opt(reading.ma20, 2),
                    fmt_opt(reading.ma50, 2)
                ),
                status: trend_status,
                color: trend_color,
            },
            ReadingPill {
                label: "Volatility",
                value: reading
                    .volatility_pct
                    .map(|v| format!("{:.2}%", v))
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                status: vol_status,
                color: vol_color,
            },
        ]
    }
}
