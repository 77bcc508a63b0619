//! Indicator window lengths.
//!
//! Defaults match the windows the model sidecars are trained against. A TOML
//! file named by `INDICATOR_CONFIG` may override any subset of them.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub ma_windows: MaWindows,
    pub volatility_window: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bb_period: usize,
    pub bb_std_dev: f64,
    pub atr_period: usize,
    pub momentum_period: usize,
    pub roc_period: usize,
    pub tenkan_period: usize,
    pub kijun_period: usize,
    pub aux_ma_window: usize,
    pub correlation_window: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaWindows {
    pub ma5: usize,
    pub ma10: usize,
    pub ma20: usize,
    pub ma50: usize,
    pub ma200: usize,
}

impl Default for MaWindows {
    fn default() -> Self {
        Self {
            ma5: 5,
            ma10: 10,
            ma20: 20,
            ma50: 50,
            ma200: 200,
        }
    }
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            ma_windows: MaWindows::default(),
            volatility_window: 20,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bb_period: 20,
            bb_std_dev: 2.0,
            atr_period: 14,
            momentum_period: 10,
            roc_period: 12,
            tenkan_period: 9,
            kijun_period: 26,
            aux_ma_window: 5,
            correlation_window: 20,
        }
    }
}

impl IndicatorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse indicator config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read indicator config {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Every window must be at least 1, and the MACD fast EMA shorter than the slow one.
    pub fn validate(&self) -> Result<()> {
        let windows = [
            ("ma5", self.ma_windows.ma5),
            ("ma10", self.ma_windows.ma10),
            ("ma20", self.ma_windows.ma20),
            ("ma50", self.ma_windows.ma50),
            ("ma200", self.ma_windows.ma200),
            ("volatility_window", self.volatility_window),
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("bb_period", self.bb_period),
            ("atr_period", self.atr_period),
            ("momentum_period", self.momentum_period),
            ("roc_period", self.roc_period),
            ("tenkan_period", self.tenkan_period),
            ("kijun_period", self.kijun_period),
            ("aux_ma_window", self.aux_ma_window),
            ("correlation_window", self.correlation_window),
        ];
        if let Some((name, _)) = windows.iter().find(|(_, w)| *w == 0) {
            anyhow::bail!("Indicator window {} must be at least 1", name);
        }
        if self.macd_fast >= self.macd_slow {
            anyhow::bail!(
                "macd_fast ({}) must be shorter than macd_slow ({})",
                self.macd_fast,
                self.macd_slow
            );
        }
        if !(self.bb_std_dev.is_finite() && self.bb_std_dev > 0.0) {
            anyhow::bail!("bb_std_dev must be positive, got {}", self.bb_std_dev);
        }
        Ok(())
    }
}
