use super::price_record::PriceRecord;
use crate::domain::validation::data_quality::RecordValidator;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Counters describing what `PriceSeries::from_records` discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesReport {
    pub invalid: usize,
    pub duplicates: usize,
}

/// A validated daily series: strictly increasing dates, positive closes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    records: Vec<PriceRecord>,
}

impl PriceSeries {
    /// Sorts by date, collapses duplicate dates (last one read wins) and drops
    /// records rejected by the validator.
    pub fn from_records(records: Vec<PriceRecord>) -> (Self, SeriesReport) {
        let mut report = SeriesReport::default();
        let mut by_date: BTreeMap<NaiveDate, PriceRecord> = BTreeMap::new();

        for record in records {
            if !RecordValidator::validate(&record) {
                report.invalid += 1;
                continue;
            }
            if by_date.insert(record.date, record).is_some() {
                report.duplicates += 1;
            }
        }

        let series = Self {
            records: by_date.into_values().collect(),
        };
        (series, report)
    }

    /// Keeps only the rows whose mask entry is true. Used by row filters such
    /// as outlier removal, so every column stays aligned.
    pub fn retain_mask(&self, mask: &[bool]) -> Self {
        let records = self
            .records
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(r, _)| r.clone())
            .collect();
        Self { records }
    }

    pub fn records(&self) -> &[PriceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn first(&self) -> Option<&PriceRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&PriceRecord> {
        self.records.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.close).collect()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.records.iter().map(|r| r.date).collect()
    }

    pub fn has_ranges(&self) -> bool {
        self.records.iter().any(|r| r.range().is_some())
    }

    /// Last `n` records (all of them when `n` exceeds the length).
    pub fn tail(&self, n: usize) -> &[PriceRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_sorts_and_collapses_duplicates() {
        let records = vec![
            PriceRecord::new(day(3), 103.0),
            PriceRecord::new(day(1), 101.0),
            PriceRecord::new(day(2), 102.0),
            PriceRecord::new(day(2), 202.0),
        ];

        let (series, report) = PriceSeries::from_records(records);

        assert_eq!(series.len(), 3);
        assert_eq!(report.duplicates, 1);
        assert_eq!(series.dates(), vec![day(1), day(2), day(3)]);
        // Last read wins
        assert_eq!(series.records()[1].close, 202.0);
    }

    #[test]
    fn test_drops_non_positive_close() {
        let records = vec![
            PriceRecord::new(day(1), 0.0),
            PriceRecord::new(day(2), -5.0),
            PriceRecord::new(day(3), 10.0),
        ];

        let (series, report) = PriceSeries::from_records(records);
        assert_eq!(series.len(), 1);
        assert_eq!(report.invalid, 2);
    }

    #[test]
    fn test_retain_mask_keeps_rows_whole() {
        let records = vec![
            PriceRecord::new(day(1), 1.0).with_aux(Some(5.0), None),
            PriceRecord::new(day(2), 2.0).with_aux(Some(6.0), None),
            PriceRecord::new(day(3), 3.0).with_aux(Some(7.0), None),
        ];
        let (series, _) = PriceSeries::from_records(records);

        let kept = series.retain_mask(&[true, false, true]);
        assert_eq!(kept.closes(), vec![1.0, 3.0]);
        assert_eq!(kept.records()[1].usd_close, Some(7.0));
    }

    #[test]
    fn test_tail_saturates() {
        let (series, _) = PriceSeries::from_records(vec![
            PriceRecord::new(day(1), 1.0),
            PriceRecord::new(day(2), 2.0),
        ]);
        assert_eq!(series.tail(10).len(), 2);
        assert_eq!(series.tail(1)[0].close, 2.0);
    }
}
