//! Dashboard caching and chart configuration parsing from environment variables.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct DashboardEnvConfig {
    pub cache_ttl_secs: u64,
    pub default_window_days: usize,
    /// Keep every Nth row in charts
    pub chart_sampling_rate: usize,
}

impl DashboardEnvConfig {
    pub fn from_env() -> Result<Self> {
        let chart_sampling_rate = env::var("CHART_SAMPLING_RATE")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<usize>()
            .context("Failed to parse CHART_SAMPLING_RATE")?;
        if chart_sampling_rate == 0 {
            anyhow::bail!("CHART_SAMPLING_RATE must be at least 1");
        }

        Ok(Self {
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse::<u64>()
                .context("Failed to parse CACHE_TTL_SECS")?,
            default_window_days: env::var("DEFAULT_WINDOW_DAYS")
                .unwrap_or_else(|_| "30".to_string())
                .parse::<usize>()
                .context("Failed to parse DEFAULT_WINDOW_DAYS")?,
            chart_sampling_rate,
        })
    }
}
