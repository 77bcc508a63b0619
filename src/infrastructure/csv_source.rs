//! CSV price tables.
//!
//! Two header layouts are understood:
//! - `unified`: `date,close,open,high,low,usd_close,selic`, ISO dates, `.` decimals
//! - `localized`: `Data,Último,Abertura,Máxima,Mínima`, `dd/mm/yyyy` dates,
//!   `.` thousands separator and `,` decimals

use crate::domain::errors::LoadError;
use crate::domain::market::{PriceRecord, PriceSeries};
use crate::domain::ports::{LoadReport, LoadedSeries, PriceSource};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// `1234.56`
    Plain,
    /// `1.234,56`
    Localized,
}

impl NumberFormat {
    pub fn parse(&self, raw: &str) -> Option<f64> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let value = match self {
            NumberFormat::Plain => trimmed.parse::<f64>().ok()?,
            NumberFormat::Localized => normalize_localized(trimmed).parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// `"1.234,56"` -> `"1234.56"`
pub fn normalize_localized(raw: &str) -> String {
    raw.trim().replace('.', "").replace(',', ".")
}

/// Column names and formats of a CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvLayout {
    pub name: &'static str,
    pub date: String,
    pub close: String,
    pub open: Option<String>,
    pub high: Option<String>,
    pub low: Option<String>,
    pub usd_close: Option<String>,
    pub selic: Option<String>,
    pub date_format: &'static str,
    pub numbers: NumberFormat,
}

impl CsvLayout {
    pub fn unified() -> Self {
        Self {
            name: "unified",
            date: "date".to_string(),
            close: "close".to_string(),
            open: Some("open".to_string()),
            high: Some("high".to_string()),
            low: Some("low".to_string()),
            usd_close: Some("usd_close".to_string()),
            selic: Some("selic".to_string()),
            date_format: "%Y-%m-%d",
            numbers: NumberFormat::Plain,
        }
    }

    pub fn localized() -> Self {
        Self {
            name: "localized",
            date: "Data".to_string(),
            close: "Último".to_string(),
            open: Some("Abertura".to_string()),
            high: Some("Máxima".to_string()),
            low: Some("Mínima".to_string()),
            usd_close: None,
            selic: None,
            date_format: "%d/%m/%Y",
            numbers: NumberFormat::Localized,
        }
    }

    /// Overrides the required column names, keeping formats.
    pub fn with_columns(mut self, date: Option<String>, close: Option<String>) -> Self {
        if let Some(date) = date {
            self.date = date;
        }
        if let Some(close) = close {
            self.close = close;
        }
        self
    }

    fn parse_date(&self, raw: &str) -> Option<NaiveDate> {
        let trimmed = raw.trim();
        // timestamps such as "2024-01-02 00:00:00" keep only the date part
        let date_part = trimmed.split_whitespace().next()?;
        NaiveDate::parse_from_str(date_part, self.date_format).ok()
    }
}

impl FromStr for CsvLayout {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unified" => Ok(CsvLayout::unified()),
            "localized" => Ok(CsvLayout::localized()),
            other => Err(LoadError::UnknownLayout(other.to_string())),
        }
    }
}

/// Column positions resolved against an actual header row.
struct ColumnIndex {
    date: usize,
    close: usize,
    open: Option<usize>,
    high: Option<usize>,
    low: Option<usize>,
    usd_close: Option<usize>,
    selic: Option<usize>,
}

impl ColumnIndex {
    fn resolve(
        layout: &CsvLayout,
        headers: &[String],
        source_name: &str,
    ) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h == name.trim());
        let require = |name: &str| {
            find(name).ok_or_else(|| LoadError::MissingColumn {
                column: name.to_string(),
                source_name: source_name.to_string(),
                available: headers.join(", "),
            })
        };
        let optional = |name: &Option<String>| name.as_deref().and_then(find);

        Ok(Self {
            date: require(&layout.date)?,
            close: require(&layout.close)?,
            open: optional(&layout.open),
            high: optional(&layout.high),
            low: optional(&layout.low),
            usd_close: optional(&layout.usd_close),
            selic: optional(&layout.selic),
        })
    }
}

/// Reads a price table from CSV text.
///
/// Returns the validated series and the number of raw data rows seen. Rows
/// with an unparseable date or close are dropped; unparseable optional
/// fields become `None`.
pub fn read_prices<R: std::io::Read>(
    reader: R,
    layout: &CsvLayout,
    source_name: &str,
) -> Result<LoadedSeries, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .flexible(true)
        .trim(csv::Trim::Fields)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .byte_headers()
        .map_err(|e| LoadError::Csv {
            path: source_name.to_string(),
            reason: e.to_string(),
        })?
        .iter()
        .map(|h| clean_header(&String::from_utf8_lossy(h)))
        .collect();

    let cols = ColumnIndex::resolve(layout, &headers, source_name)?;
    let numbers = layout.numbers;
    // fields are decoded one at a time so a bad byte in an unused column is harmless
    fn text(record: &csv::ByteRecord, idx: usize) -> Option<&str> {
        record.get(idx).and_then(|raw| std::str::from_utf8(raw).ok())
    }
    let field = |record: &csv::ByteRecord, idx: Option<usize>| {
        idx.and_then(|i| text(record, i)).and_then(|raw| numbers.parse(raw))
    };

    let mut records = Vec::new();
    let mut report = LoadReport::default();

    for result in rdr.byte_records() {
        let record = result.map_err(|e| LoadError::Csv {
            path: source_name.to_string(),
            reason: e.to_string(),
        })?;
        report.rows_read += 1;

        let date = text(&record, cols.date).and_then(|raw| layout.parse_date(raw));
        let close = field(&record, Some(cols.close));
        let (Some(date), Some(close)) = (date, close) else {
            debug!("Dropping row {}: unparseable date or close", report.rows_read);
            report.rows_dropped += 1;
            continue;
        };

        let mut price = PriceRecord::new(date, close)
            .with_aux(field(&record, cols.usd_close), field(&record, cols.selic));
        price.open = field(&record, cols.open);
        price.high = field(&record, cols.high);
        price.low = field(&record, cols.low);
        records.push(price);
    }

    let (series, series_report) = PriceSeries::from_records(records);
    report.rows_dropped += series_report.invalid;
    report.duplicates = series_report.duplicates;

    if report.rows_dropped > 0 || report.duplicates > 0 {
        warn!(
            "{}: dropped {} unparseable/invalid rows, collapsed {} duplicate dates",
            source_name, report.rows_dropped, report.duplicates
        );
    }

    Ok(LoadedSeries { series, report })
}

/// Strips a leading byte-order mark, then surrounding whitespace.
fn clean_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').trim().to_string()
}

/// A CSV file on disk in one of the known layouts.
#[derive(Debug, Clone)]
pub struct CsvPriceSource {
    path: PathBuf,
    layout: CsvLayout,
}

impl CsvPriceSource {
    pub fn new<P: AsRef<Path>>(path: P, layout: CsvLayout) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            layout,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> &CsvLayout {
        &self.layout
    }
}

impl PriceSource for CsvPriceSource {
    fn load(&self) -> Result<LoadedSeries, LoadError> {
        let path = self.path.display().to_string();
        let file = std::fs::File::open(&self.path).map_err(|e| LoadError::Io {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        let loaded = read_prices(std::io::BufReader::new(file), &self.layout, &path)?;
        info!(
            "Loaded {} rows from {} ({} layout)",
            loaded.series.len(),
            path,
            self.layout.name
        );
        Ok(loaded)
    }

    fn source_id(&self) -> String {
        format!("{}#{}", self.path.display(), self.layout.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_number_normalization() {
        assert_eq!(normalize_localized("1.234,56"), "1234.56");
        assert_eq!(NumberFormat::Localized.parse("1.234,56"), Some(1234.56));
        assert_eq!(NumberFormat::Localized.parse("128.001"), Some(128001.0));
        assert_eq!(NumberFormat::Localized.parse(""), None);
        assert_eq!(NumberFormat::Plain.parse(" 12.5 "), Some(12.5));
        assert_eq!(NumberFormat::Plain.parse("n/a"), None);
    }

    #[test]
    fn test_unified_layout() {
        let csv = "date,close,open,high,low,usd_close,selic\n\
                   2024-01-03,101.5,100,102,99.5,4.9,11.75\n\
                   2024-01-02,100.0,99,101,98,,11.75\n";
        let loaded = read_prices(csv.as_bytes(), &CsvLayout::unified(), "mem").unwrap();

        assert_eq!(loaded.series.len(), 2);
        assert_eq!(loaded.report.rows_read, 2);
        let first = &loaded.series.records()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(first.usd_close, None);
        assert_eq!(first.selic, Some(11.75));
    }

    #[test]
    fn test_localized_layout_with_padded_headers() {
        let csv = " Data , Último ,Abertura,Máxima,Mínima\n\
                   \"02/01/2024\",\"1.234,56\",\"1.230,00\",\"1.240,10\",\"1.229,90\"\n\
                   \"03/01/2024\",\"xx\",\"1.230,00\",\"1.240,10\",\"1.229,90\"\n";
        let loaded = read_prices(csv.as_bytes(), &CsvLayout::localized(), "mem").unwrap();

        assert_eq!(loaded.series.len(), 1);
        assert_eq!(loaded.report.rows_dropped, 1);
        let rec = &loaded.series.records()[0];
        assert_eq!(rec.close, 1234.56);
        assert_eq!(rec.high, Some(1240.10));
    }

    #[test]
    fn test_missing_close_column_is_fatal() {
        let csv = "date,price\n2024-01-02,1\n";
        let err = read_prices(csv.as_bytes(), &CsvLayout::unified(), "prices.csv").unwrap_err();
        match err {
            LoadError::MissingColumn { column, available, .. } => {
                assert_eq!(column, "close");
                assert_eq!(available, "date, price");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!("Localized".parse::<CsvLayout>().unwrap().name, "localized");
        assert!(matches!(
            "excel".parse::<CsvLayout>(),
            Err(LoadError::UnknownLayout(_))
        ));
    }

    #[test]
    fn test_column_override() {
        let layout = CsvLayout::unified().with_columns(None, Some("adj_close".to_string()));
        let csv = "date,adj_close\n2024-01-02,10\n";
        let loaded = read_prices(csv.as_bytes(), &layout, "mem").unwrap();
        assert_eq!(loaded.series.records()[0].close, 10.0);
    }

    #[test]
    fn test_invalid_utf8_only_affects_its_row() {
        let mut csv = b"date,close,high,note\n2024-01-02,100.0,101.0,ok\n".to_vec();
        csv.extend_from_slice(b"2024-01-03,101.0,\xC9,\xC9\n");
        csv.extend_from_slice(b"2024-01-04,1\xC902.0,103.0,ok\n");
        csv.extend_from_slice(b"2024-01-05,102.0,103.0,ok\n");

        let loaded = read_prices(csv.as_slice(), &CsvLayout::unified(), "mem").unwrap();
        let records = loaded.series.records();

        assert_eq!(loaded.report.rows_read, 4);
        assert_eq!(loaded.report.rows_dropped, 1);
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].close, 101.0);
        assert_eq!(records[1].high, None);
        assert_eq!(records[2].date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
    }

    #[test]
    fn test_bom_is_stripped_before_trimming() {
        assert_eq!(clean_header("\u{feff} Data "), "Data");
        assert_eq!(clean_header(" close"), "close");

        let csv = "\u{feff} Data,Último\n02/01/2024,\"1.234,56\"\n";
        let loaded = read_prices(csv.as_bytes(), &CsvLayout::localized(), "mem").unwrap();
        assert_eq!(loaded.series.records()[0].close, 1234.56);
    }
}
