use crate::domain::features::FeatureFrame;
use crate::domain::market::PriceSeries;
use crate::domain::ml::feature_registry::FEATURE_NAMES;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

const PRICE_HEADER: [&str; 7] = ["date", "close", "high", "low", "open", "usd_close", "selic"];

fn opt(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Writes the price columns in unified-layout order.
pub fn write_prices<W: Write>(writer: W, series: &PriceSeries) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(PRICE_HEADER)?;
    for r in series.records() {
        wtr.write_record([
            r.date.format("%Y-%m-%d").to_string(),
            r.close.to_string(),
            opt(r.high),
            opt(r.low),
            opt(r.open),
            opt(r.usd_close),
            opt(r.selic),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes every computed feature column; undefined values are empty cells.
pub fn write_features<W: Write>(writer: W, frame: &FeatureFrame) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["date"];
    header.extend_from_slice(FEATURE_NAMES);
    wtr.write_record(&header)?;

    for row in frame.rows() {
        let mut record = Vec::with_capacity(header.len());
        record.push(
            row.date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        record.extend(FEATURE_NAMES.iter().map(|name| opt(row.value(name))));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn export_prices(path: &Path, series: &PriceSeries) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_prices(file, series)?;
    info!("Exported {} rows to {}", series.len(), path.display());
    Ok(())
}

pub fn export_features(path: &Path, frame: &FeatureFrame) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_features(file, frame)?;
    info!("Exported {} feature rows to {}", frame.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::market::PriceRecord;
    use chrono::NaiveDate;

    #[test]
    fn test_price_export_layout() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        let (series, _) = PriceSeries::from_records(vec![
            PriceRecord::new(date, 10.5).with_aux(None, Some(11.25)),
        ]);

        let mut buf = Vec::new();
        write_prices(&mut buf, &series).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("date,close,high,low,open,usd_close,selic"));
        assert_eq!(lines.next(), Some("2024-02-01,10.5,,,,,11.25"));
    }

    #[test]
    fn test_feature_export_has_all_columns() {
        let frame = FeatureFrame::new(vec![Default::default()]);
        let mut buf = Vec::new();
        write_features(&mut buf, &frame).unwrap();
        let text = String::from_utf8(buf).unwrap();

        let header = text.lines().next().unwrap();
        assert_eq!(header.split(',').count(), FEATURE_NAMES.len() + 1);
    }
}
