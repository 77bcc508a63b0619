use crate::application::dashboard::DashboardSnapshot;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::render_mini_metric;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::DashboardViewModel;
use crate::interfaces::view_models::dashboard_view_model::fmt_pct;
use eframe::egui;
use egui_plot::{Bar, BarChart, Legend, Plot};

pub fn render_summary_tab(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
    let banner = DashboardViewModel::prediction(snapshot);

    Card::new().title("Executive summary").accent(banner.color).show(ui, |ui| {
        ui.label(
            egui::RichText::new(&banner.headline)
                .size(20.0)
                .strong()
                .color(banner.color),
        );
        ui.label(egui::RichText::new(&banner.detail).color(DesignSystem::TEXT_SECONDARY));
        ui.add_space(DesignSystem::SPACING_SMALL);
        for reason in &banner.reasons {
            ui.label(format!("• {reason}"));
        }
        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.label(
            egui::RichText::new(
                "Technical indicators only. Not a basis for investment decisions on its own.",
            )
            .size(11.0)
            .italics()
            .color(DesignSystem::TEXT_MUTED),
        );
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let Some(summary) = snapshot.summary.as_ref() else {
        ui.label(
            egui::RichText::new("Not enough data for statistics.")
                .color(DesignSystem::TEXT_MUTED),
        );
        return;
    };

    Card::new().title("Performance").show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            let items = [
                (
                    "Total return",
                    fmt_pct(Some(summary.total_return_pct)),
                    DesignSystem::change_color(summary.total_return_pct),
                ),
                (
                    "Max drawdown",
                    format!("{:.2}%", summary.max_drawdown_pct),
                    DesignSystem::DOWN,
                ),
                (
                    "Annualized volatility",
                    format!("{:.2}%", summary.annualized_volatility_pct),
                    DesignSystem::WARNING,
                ),
                (
                    "Sharpe",
                    format!("{:.2}", summary.sharpe_ratio),
                    DesignSystem::change_color(summary.sharpe_ratio),
                ),
                (
                    "Range",
                    format!("{:.2} - {:.2}", summary.min_close, summary.max_close),
                    DesignSystem::TEXT_PRIMARY,
                ),
                (
                    "Observations",
                    format!("{} ({} days)", summary.observations, summary.span_days()),
                    DesignSystem::TEXT_PRIMARY,
                ),
            ];
            for (label, value, color) in items {
                render_mini_metric(ui, label, &value, color);
                ui.add_space(DesignSystem::SPACING_LARGE);
            }
        });
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    Card::new().title("Daily return distribution (%)").show(ui, |ui| {
        let histogram = &summary.return_histogram;
        let bars: Vec<Bar> = histogram
            .counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                Bar::new(histogram.bin_center(i), count as f64)
                    .width(histogram.width)
                    .fill(DesignSystem::change_color(histogram.bin_center(i)).linear_multiply(0.7))
            })
            .collect();

        Plot::new("returns_histogram")
            .height(DesignSystem::SUBCHART_HEIGHT)
            .legend(Legend::default())
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("Days", bars));
            });
    });
}
