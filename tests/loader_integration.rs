use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use trendcast::application::market_data::loader::load_clean_series;
use trendcast::domain::errors::LoadError;
use trendcast::domain::ports::PriceSource;
use trendcast::infrastructure::csv_source::{CsvLayout, CsvPriceSource};
use trendcast::infrastructure::export::export_prices;
use trendcast::infrastructure::synthetic::{SyntheticConfig, generate};

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn source(path: &Path, layout: CsvLayout) -> CsvPriceSource {
    CsvPriceSource::new(path, layout)
}

#[test]
fn test_unified_file_is_sorted_deduplicated_and_reported() {
    let file = write_csv(
        " date , close ,open,high,low,usd_close,selic\n\
         2024-01-04,103.0,102,104,101,4.9,11.75\n\
         2024-01-02,101.0,100,102,99,4.8,11.75\n\
         not-a-date,99.0,,,,,\n\
         2024-01-03,102.0,101,103,100,abc,11.75\n\
         2024-01-03,102.5,101,103,100,4.85,11.75\n\
         2024-01-05,,103,105,102,4.9,11.75\n",
    );

    let loaded = source(file.path(), CsvLayout::unified()).load().unwrap();
    let records = loaded.series.records();

    assert_eq!(loaded.report.rows_read, 6);
    assert_eq!(loaded.report.rows_dropped, 2);
    assert_eq!(loaded.report.duplicates, 1);
    assert_eq!(records.len(), 3);

    let dates: Vec<String> = records.iter().map(|r| r.date.to_string()).collect();
    assert_eq!(dates, vec!["2024-01-02", "2024-01-03", "2024-01-04"]);

    // last duplicate wins
    assert_eq!(records[1].close, 102.5);
    assert_eq!(records[1].usd_close, Some(4.85));
    assert_eq!(records[0].high, Some(102.0));
}

#[test]
fn test_localized_file_normalizes_numbers() {
    let file = write_csv(
        "Data,Último,Abertura,Máxima,Mínima,Vol.,Var%\n\
         \"03/01/2024\",\"132.834,92\",\"134.000,00\",\"134.389,00\",\"132.000,12\",\"10,2M\",\"-0,87%\"\n\
         \"02/01/2024\",\"134.000,00\",\"134.185,00\",\"134.392,00\",\"133.000,00\",\"9,1M\",\"-0,14%\"\n",
    );

    let loaded = source(file.path(), CsvLayout::localized()).load().unwrap();
    let records = loaded.series.records();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date.to_string(), "2024-01-02");
    assert!((records[1].close - 132_834.92).abs() < 1e-9);
    assert_eq!(records[1].low, Some(132_000.12));
    assert_eq!(records[1].usd_close, None);
}

#[test]
fn test_missing_close_column_is_fatal() {
    let file = write_csv("date,price\n2024-01-02,100\n");

    let err = source(file.path(), CsvLayout::unified()).load().unwrap_err();
    match err {
        LoadError::MissingColumn {
            column, available, ..
        } => {
            assert_eq!(column, "close");
            assert!(available.contains("price"));
        }
        other => panic!("expected MissingColumn, got {other:?}"),
    }
}

#[test]
fn test_column_overrides() {
    let file = write_csv("Date,Adj Close\n2024-01-02,100.5\n2024-01-03,101.5\n");
    let layout = CsvLayout::unified().with_columns(Some("Date".into()), Some("Adj Close".into()));

    let loaded = source(file.path(), layout).load().unwrap();
    assert_eq!(loaded.series.len(), 2);
    assert_eq!(loaded.series.last().unwrap().close, 101.5);
    assert!(!loaded.series.has_ranges());
}

#[test]
fn test_missing_file_is_io_error() {
    let src = source(Path::new("/definitely/not/here.csv"), CsvLayout::unified());
    assert!(matches!(src.load(), Err(LoadError::Io { .. })));
}

#[test]
fn test_only_unparseable_rows_is_empty_series() {
    let file = write_csv("date,close\nbad,1\n2024-01-02,-5\n");
    let src = source(file.path(), CsvLayout::unified());

    let err = load_clean_series(&src, true).unwrap_err();
    assert!(matches!(err, LoadError::EmptySeries { rows_read: 2, .. }));
}

#[test]
fn test_spike_row_removed_by_loader() {
    let mut csv = String::from("date,close,high,low\n");
    for day in 1..=20 {
        let close = if day == 10 { 1000.0 } else { 100.0 + day as f64 * 0.1 };
        csv.push_str(&format!("2024-02-{:02},{},{},{}\n", day, close, close + 1.0, close - 1.0));
    }
    let file = write_csv(&csv);
    let src = source(file.path(), CsvLayout::unified());

    let cleaned = load_clean_series(&src, true).unwrap();
    assert_eq!(cleaned.report.outliers_removed, 1);
    assert_eq!(cleaned.series.len(), 19);
    assert!(cleaned.series.records().iter().all(|r| r.close < 1000.0));

    let kept = load_clean_series(&src, false).unwrap();
    assert_eq!(kept.series.len(), 20);
    assert_eq!(kept.report.outliers_removed, 0);
}

#[test]
fn test_exported_synthetic_series_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("synthetic.csv");
    let series = generate(&SyntheticConfig {
        rows: 120,
        seed: 3,
        ..SyntheticConfig::default()
    });
    export_prices(&path, &series).unwrap();

    let loaded = source(&path, CsvLayout::unified()).load().unwrap();
    assert_eq!(loaded.series.len(), 120);
    assert_eq!(loaded.report.rows_dropped, 0);
    assert_eq!(loaded.series.first().unwrap().date, series.first().unwrap().date);
    assert_eq!(loaded.series.last().unwrap().close, series.last().unwrap().close);
    assert!(loaded.series.records().iter().all(|r| r.selic.is_some()));
}
