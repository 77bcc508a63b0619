use crate::config::{Config, layout_from_env};
use std::env;
use std::io::Write;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const VARS: [&str; 12] = [
    "DATA_PATH",
    "CSV_LAYOUT",
    "REMOVE_OUTLIERS",
    "MODEL_PATH",
    "FEATURE_COLUMNS_PATH",
    "MODEL_INFO_PATH",
    "CACHE_TTL_SECS",
    "DEFAULT_WINDOW_DAYS",
    "CHART_SAMPLING_RATE",
    "INDICATOR_CONFIG",
    "DATE_COLUMN",
    "CLOSE_COLUMN",
];

fn clear_vars() {
    for var in VARS {
        unsafe { env::remove_var(var) };
    }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap_or_else(|p| p.into_inner());
    clear_vars();

    let config = Config::from_env().unwrap();

    assert_eq!(config.data_path.to_str(), Some("Unified_Data.csv"));
    assert_eq!(config.csv_layout.name, "unified");
    assert!(config.remove_outliers);
    assert_eq!(config.cache_ttl_secs, 3600);
    assert_eq!(config.default_window_days, 30);
    assert_eq!(config.chart_sampling_rate, 5);
    assert_eq!(config.indicators.rsi_period, 14);
    assert!(config.model_info_path.is_some());
}

#[test]
fn test_config_overrides() {
    let _guard = get_env_lock().lock().unwrap_or_else(|p| p.into_inner());
    clear_vars();

    unsafe {
        env::set_var("CSV_LAYOUT", "localized");
        env::set_var("CLOSE_COLUMN", "Fechamento");
        env::set_var("REMOVE_OUTLIERS", "false");
        env::set_var("CACHE_TTL_SECS", "60");
        env::set_var("MODEL_INFO_PATH", "");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.csv_layout.name, "localized");
    assert_eq!(config.csv_layout.close, "Fechamento");
    assert_eq!(config.csv_layout.date, "Data");
    assert!(!config.remove_outliers);
    assert_eq!(config.cache_ttl_secs, 60);
    assert!(config.model_info_path.is_none());

    clear_vars();
}

#[test]
fn test_config_invalid_values() {
    let _guard = get_env_lock().lock().unwrap_or_else(|p| p.into_inner());
    clear_vars();

    unsafe { env::set_var("CSV_LAYOUT", "excel") };
    assert!(Config::from_env().is_err());
    clear_vars();

    unsafe { env::set_var("CHART_SAMPLING_RATE", "0") };
    assert!(Config::from_env().is_err());
    clear_vars();

    unsafe { env::set_var("REMOVE_OUTLIERS", "maybe") };
    assert!(Config::from_env().is_err());
    clear_vars();
}

#[test]
fn test_indicator_config_file() {
    let _guard = get_env_lock().lock().unwrap_or_else(|p| p.into_inner());
    clear_vars();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rsi_period = 21\nbb_std_dev = 2.5").unwrap();
    unsafe { env::set_var("INDICATOR_CONFIG", file.path()) };

    let config = Config::from_env().unwrap();
    assert_eq!(config.indicators.rsi_period, 21);
    assert_eq!(config.indicators.bb_std_dev, 2.5);
    assert_eq!(config.indicators.macd_fast, 12);

    clear_vars();
}

#[test]
fn test_layout_switch_keeps_column_overrides() {
    let _guard = get_env_lock().lock().unwrap_or_else(|p| p.into_inner());
    clear_vars();

    unsafe {
        env::set_var("DATE_COLUMN", "Day");
        env::set_var("CLOSE_COLUMN", "Adj Close");
    }

    let layout = layout_from_env("localized").unwrap();
    assert_eq!(layout.name, "localized");
    assert_eq!(layout.date, "Day");
    assert_eq!(layout.close, "Adj Close");
    assert_eq!(layout.date_format, "%d/%m/%Y");

    assert!(layout_from_env("excel").is_err());

    clear_vars();
}
