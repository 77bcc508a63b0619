use super::cleaning::remove_close_outliers;
use crate::domain::errors::LoadError;
use crate::domain::ports::{LoadedSeries, PriceSource};
use tracing::info;

/// Loads a source and applies the optional outlier filter.
///
/// An empty series after cleaning is fatal.
pub fn load_clean_series(
    source: &dyn PriceSource,
    remove_outliers: bool,
) -> Result<LoadedSeries, LoadError> {
    let LoadedSeries { series, mut report } = source.load()?;

    let series = if remove_outliers {
        let (cleaned, removed) = remove_close_outliers(&series);
        report.outliers_removed = removed;
        cleaned
    } else {
        series
    };

    if series.is_empty() {
        return Err(LoadError::EmptySeries {
            source_name: source.source_id(),
            rows_read: report.rows_read,
        });
    }

    info!(
        "Series ready: {} rows ({} read, {} dropped, {} duplicates, {} outliers)",
        series.len(),
        report.rows_read,
        report.rows_dropped,
        report.duplicates,
        report.outliers_removed
    );
    Ok(LoadedSeries { series, report })
}
