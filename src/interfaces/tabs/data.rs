use crate::application::dashboard::{ChartWindow, DashboardSnapshot};
use crate::infrastructure::export::{export_features, export_prices};
use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::dashboard_view_model::fmt_opt;
use eframe::egui;
use std::path::Path;
use tracing::{error, info};

pub const PRICES_EXPORT_FILE: &str = "trendcast_prices.csv";
pub const FEATURES_EXPORT_FILE: &str = "trendcast_features.csv";

/// Raw rows of the selected period, newest first, with CSV export.
pub fn render_data_tab(
    ui: &mut egui::Ui,
    snapshot: &DashboardSnapshot,
    window: &ChartWindow,
    export_status: &mut Option<(String, bool)>,
) {
    let report = &snapshot.report;
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!(
                "{} rows read, {} dropped, {} duplicates, {} outliers removed",
                report.rows_read, report.rows_dropped, report.duplicates, report.outliers_removed
            ))
            .color(DesignSystem::TEXT_SECONDARY),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Export features").clicked() {
                *export_status = Some(export_result(
                    FEATURES_EXPORT_FILE,
                    export_features(Path::new(FEATURES_EXPORT_FILE), &snapshot.frame),
                ));
            }
            if ui.button("Export prices").clicked() {
                *export_status = Some(export_result(
                    PRICES_EXPORT_FILE,
                    export_prices(Path::new(PRICES_EXPORT_FILE), &snapshot.series),
                ));
            }
        });
    });

    if let Some((message, ok)) = export_status.as_ref() {
        let color = if *ok { DesignSystem::UP } else { DesignSystem::DOWN };
        ui.label(egui::RichText::new(message).size(12.0).color(color));
    }

    ui.add_space(DesignSystem::SPACING_SMALL);

    let rows = snapshot.frame.rows();
    let range = window.bounds(rows.len());

    Card::new().show(ui, |ui| {
        egui::ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                egui::Grid::new("data_grid")
                    .striped(true)
                    .min_col_width(80.0)
                    .spacing([20.0, 6.0])
                    .show(ui, |ui| {
                        for header in
                            ["DATE", "CLOSE", "RETURN %", "MA 20", "RSI", "MACD", "VOL %"]
                        {
                            ui.label(
                                egui::RichText::new(header)
                                    .strong()
                                    .color(DesignSystem::TEXT_SECONDARY),
                            );
                        }
                        ui.end_row();

                        for row in rows[range].iter().rev() {
                            ui.label(
                                row.date
                                    .map(|d| d.format("%Y-%m-%d").to_string())
                                    .unwrap_or_default(),
                            );
                            ui.label(fmt_opt(row.close, 2));
                            let ret = row.returns.map(|r| r * 100.0);
                            ui.label(
                                egui::RichText::new(fmt_opt(ret, 2))
                                    .color(DesignSystem::change_color(ret.unwrap_or(0.0))),
                            );
                            ui.label(fmt_opt(row.ma20, 2));
                            ui.label(fmt_opt(row.rsi, 1));
                            ui.label(fmt_opt(row.macd, 4));
                            ui.label(fmt_opt(row.volatility.map(|v| v * 100.0), 2));
                            ui.end_row();
                        }
                    });
            });
    });
}

fn export_result(file: &str, result: anyhow::Result<()>) -> (String, bool) {
    match result {
        Ok(()) => {
            info!("Exported {}", file);
            (format!("Saved {}", file), true)
        }
        Err(e) => {
            error!("Export to {} failed: {:#}", file, e);
            (format!("Export failed: {:#}", e), false)
        }
    }
}
