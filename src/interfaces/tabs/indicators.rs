use crate::application::dashboard::DashboardSnapshot;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::{render_mini_metric, render_status_pill};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::DashboardViewModel;
use crate::interfaces::view_models::dashboard_view_model::fmt_opt;
use eframe::egui;

pub fn render_indicators_tab(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
    let pills = DashboardViewModel::readings(snapshot);
    if pills.is_empty() {
        ui.label(egui::RichText::new("No indicator values yet.").color(DesignSystem::TEXT_MUTED));
        return;
    }

    ui.columns(pills.len(), |columns| {
        for (col, pill) in columns.iter_mut().zip(pills.iter()) {
            Card::new().title(pill.label).min_height(90.0).show(col, |ui| {
                ui.label(
                    egui::RichText::new(&pill.value)
                        .size(18.0)
                        .strong()
                        .color(DesignSystem::TEXT_PRIMARY),
                );
                ui.add_space(4.0);
                render_status_pill(ui, pill.status, pill.color);
            });
        }
    });

    ui.add_space(DesignSystem::SPACING_LARGE);

    let Some(row) = snapshot.frame.last() else {
        return;
    };

    Card::new().title("Exact values").show(ui, |ui| {
        egui::Grid::new("exact_values_grid")
            .striped(true)
            .num_columns(4)
            .spacing([40.0, 8.0])
            .show(ui, |ui| {
                let values = [
                    ("Close", fmt_opt(row.close, 2)),
                    ("MA 5", fmt_opt(row.ma5, 2)),
                    ("MA 10", fmt_opt(row.ma10, 2)),
                    ("MA 20", fmt_opt(row.ma20, 2)),
                    ("MA 50", fmt_opt(row.ma50, 2)),
                    ("MA 200", fmt_opt(row.ma200, 2)),
                    ("EMA 12", fmt_opt(row.ema12, 2)),
                    ("EMA 26", fmt_opt(row.ema26, 2)),
                    ("RSI", fmt_opt(row.rsi, 2)),
                    ("MACD", fmt_opt(row.macd, 4)),
                    ("MACD signal", fmt_opt(row.macd_signal, 4)),
                    ("MACD hist", fmt_opt(row.macd_hist, 4)),
                    ("BB upper", fmt_opt(row.bb_upper, 2)),
                    ("BB lower", fmt_opt(row.bb_lower, 2)),
                    ("ATR", fmt_opt(row.atr, 2)),
                    ("Momentum", fmt_opt(row.momentum, 2)),
                    ("ROC %", fmt_opt(row.roc, 2)),
                    ("Volatility", fmt_opt(row.volatility, 5)),
                ];

                for pair in values.chunks(2) {
                    for (label, value) in pair {
                        ui.label(egui::RichText::new(*label).color(DesignSystem::TEXT_SECONDARY));
                        ui.label(egui::RichText::new(value).monospace());
                    }
                    ui.end_row();
                }
            });
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    if snapshot.series.has_ranges() || row.usd_close.is_some() {
        ui.horizontal(|ui| {
            render_mini_metric(ui, "Tenkan", &fmt_opt(row.tenkan, 2), DesignSystem::TEXT_PRIMARY);
            ui.add_space(DesignSystem::SPACING_LARGE);
            render_mini_metric(ui, "Kijun", &fmt_opt(row.kijun, 2), DesignSystem::TEXT_PRIMARY);
            ui.add_space(DesignSystem::SPACING_LARGE);
            render_mini_metric(
                ui,
                "Corr USD",
                &fmt_opt(row.corr_usd, 3),
                DesignSystem::TEXT_PRIMARY,
            );
            ui.add_space(DesignSystem::SPACING_LARGE);
            render_mini_metric(
                ui,
                "Corr Selic",
                &fmt_opt(row.corr_selic, 3),
                DesignSystem::TEXT_PRIMARY,
            );
        });
    }
}
