use crate::domain::market::PriceRecord;
use tracing::warn;

/// Centralized validator for loaded price rows.
///
/// Rejects rows that are physically impossible. Optional columns that are
/// inconsistent are not fatal for the row: range indicators simply skip them.
pub struct RecordValidator;

impl RecordValidator {
    /// Validates a PriceRecord. Returns true if the row may enter the series.
    pub fn validate(record: &PriceRecord) -> bool {
        if !record.close.is_finite() || record.close <= 0.0 {
            warn!(
                "Validation FAILED: row {} has non-positive close: {}",
                record.date, record.close
            );
            return false;
        }

        if let Some((high, low)) = record.range()
            && low > high
        {
            warn!(
                "Validation WARNING: row {} has low {} > high {}",
                record.date, low, high
            );
        }

        true
    }
}
