use crate::application::dashboard::ChartWindow;
use crate::domain::features::FeatureRow;
use chrono::{Datelike, NaiveDate};
use eframe::egui;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints};
use std::ops::RangeInclusive;

/// X coordinate of a date: days since 0001-01-01.
pub fn date_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

pub fn format_date_axis(mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    NaiveDate::from_num_days_from_ce_opt(mark.value.round() as i32)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Points of one feature over the chart window, skipping undefined values.
pub fn column_points(
    rows: &[FeatureRow],
    window: &ChartWindow,
    value: impl Fn(&FeatureRow) -> Option<f64>,
) -> Vec<[f64; 2]> {
    window
        .select(rows)
        .into_iter()
        .filter_map(|row| Some([date_x(row.date?), value(row)?]))
        .collect()
}

/// A named line in the given color
pub fn series_line(
    name: &str,
    points: Vec<[f64; 2]>,
    color: egui::Color32,
    width: f32,
) -> Line<'static> {
    Line::new(name.to_string(), PlotPoints::from(points))
        .color(color)
        .width(width)
}

/// Time-series plot with a date x axis and the standard styling.
pub fn time_plot(id: &str, height: f32) -> Plot<'static> {
    Plot::new(id.to_string())
        .height(height)
        .legend(Legend::default())
        .show_grid([true, true])
        .x_axis_formatter(format_date_axis)
        .allow_scroll(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard::Period;

    #[test]
    fn test_date_axis_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let x = date_x(date);
        assert_eq!(
            NaiveDate::from_num_days_from_ce_opt(x as i32),
            Some(date)
        );
    }

    #[test]
    fn test_column_points_skip_gaps() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let rows: Vec<FeatureRow> = (0..4)
            .map(|i| FeatureRow {
                date: Some(start + chrono::Duration::days(i)),
                rsi: (i % 2 == 1).then_some(50.0),
                ..Default::default()
            })
            .collect();

        let points = column_points(&rows, &ChartWindow::new(Period::All, 1), |r| r.rsi);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0][0], date_x(start + chrono::Duration::days(1)));
    }
}
