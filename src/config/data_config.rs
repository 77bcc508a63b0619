//! Price data configuration parsing from environment variables.

use crate::infrastructure::csv_source::CsvLayout;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Where the price table lives and how to read it
#[derive(Debug, Clone)]
pub struct DataEnvConfig {
    pub data_path: PathBuf,
    pub layout: CsvLayout,
    pub remove_outliers: bool,
}

/// Parses a layout preset and applies the `DATE_COLUMN`/`CLOSE_COLUMN` overrides.
pub fn layout_from_env(name: &str) -> Result<CsvLayout> {
    Ok(name
        .parse::<CsvLayout>()?
        .with_columns(env::var("DATE_COLUMN").ok(), env::var("CLOSE_COLUMN").ok()))
}

impl DataEnvConfig {
    pub fn from_env() -> Result<Self> {
        let preset = env::var("CSV_LAYOUT").unwrap_or_else(|_| "unified".to_string());
        let layout = layout_from_env(&preset).context("Failed to parse CSV_LAYOUT")?;

        Ok(Self {
            data_path: PathBuf::from(
                env::var("DATA_PATH").unwrap_or_else(|_| "Unified_Data.csv".to_string()),
            ),
            layout,
            remove_outliers: env::var("REMOVE_OUTLIERS")
                .unwrap_or_else(|_| "true".to_string())
                .parse::<bool>()
                .context("Failed to parse REMOVE_OUTLIERS")?,
        })
    }
}
