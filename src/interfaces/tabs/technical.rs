use crate::application::dashboard::{ChartWindow, DashboardSnapshot};
use crate::domain::analysis::{RSI_OVERBOUGHT, RSI_OVERSOLD};
use crate::interfaces::components::charts::{column_points, date_x, series_line, time_plot};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, HLine};

/// Price with moving averages and bands, then RSI, MACD and volatility.
pub fn render_technical_tab(ui: &mut egui::Ui, snapshot: &DashboardSnapshot, window: &ChartWindow) {
    let rows = snapshot.frame.rows();

    section_heading(ui, "Price and moving averages");
    time_plot("price_chart", DesignSystem::CHART_HEIGHT).show(ui, |plot_ui| {
        if snapshot.series.has_ranges() {
            let candles: Vec<BoxElem> = window
                .select(snapshot.series.records())
                .into_iter()
                .filter_map(|r| {
                    let (open, high, low) = (r.open?, r.high?, r.low?);
                    let color = if r.close >= open {
                        DesignSystem::UP
                    } else {
                        DesignSystem::DOWN
                    };
                    Some(
                        BoxElem::new(
                            date_x(r.date),
                            BoxSpread::new(
                                low,
                                open.min(r.close),
                                (open + r.close) / 2.0,
                                open.max(r.close),
                                high,
                            ),
                        )
                        .fill(color)
                        .stroke(egui::Stroke::new(1.0, color))
                        .box_width(0.6 * window.sampling as f64),
                    )
                })
                .collect();
            plot_ui.box_plot(BoxPlot::new("OHLC", candles));
        }

        plot_ui.line(series_line(
            "Close",
            column_points(rows, window, |r| r.close),
            DesignSystem::SERIES_PRICE,
            1.5,
        ));
        plot_ui.line(series_line(
            "MA 10",
            column_points(rows, window, |r| r.ma10),
            DesignSystem::SERIES_MA_FAST,
            1.0,
        ));
        plot_ui.line(series_line(
            "MA 20",
            column_points(rows, window, |r| r.ma20),
            DesignSystem::SERIES_MA_MID,
            1.0,
        ));
        plot_ui.line(series_line(
            "MA 50",
            column_points(rows, window, |r| r.ma50),
            DesignSystem::SERIES_MA_SLOW,
            1.0,
        ));
        plot_ui.line(
            series_line(
                "BB upper",
                column_points(rows, window, |r| r.bb_upper),
                DesignSystem::SERIES_BAND,
                1.0,
            )
            .style(egui_plot::LineStyle::dashed_loose()),
        );
        plot_ui.line(
            series_line(
                "BB lower",
                column_points(rows, window, |r| r.bb_lower),
                DesignSystem::SERIES_BAND,
                1.0,
            )
            .style(egui_plot::LineStyle::dashed_loose()),
        );
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    section_heading(ui, "RSI (14)");
    time_plot("rsi_chart", DesignSystem::SUBCHART_HEIGHT)
        .include_y(0.0)
        .include_y(100.0)
        .show(ui, |plot_ui| {
            plot_ui.line(series_line(
                "RSI",
                column_points(rows, window, |r| r.rsi),
                DesignSystem::ACCENT_SECONDARY,
                1.5,
            ));
            plot_ui.hline(
                HLine::new("Overbought", RSI_OVERBOUGHT)
                    .color(DesignSystem::DOWN)
                    .style(egui_plot::LineStyle::dashed_dense()),
            );
            plot_ui.hline(
                HLine::new("Oversold", RSI_OVERSOLD)
                    .color(DesignSystem::UP)
                    .style(egui_plot::LineStyle::dashed_dense()),
            );
        });

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    section_heading(ui, "MACD (12, 26, 9)");
    time_plot("macd_chart", DesignSystem::SUBCHART_HEIGHT).show(ui, |plot_ui| {
        let bars: Vec<Bar> = window
            .select(rows)
            .into_iter()
            .filter_map(|r| {
                let hist = r.macd_hist?;
                Some(
                    Bar::new(date_x(r.date?), hist)
                        .width(0.8 * window.sampling as f64)
                        .fill(DesignSystem::change_color(hist).linear_multiply(0.6)),
                )
            })
            .collect();
        plot_ui.bar_chart(BarChart::new("Histogram", bars));
        plot_ui.line(series_line(
            "MACD",
            column_points(rows, window, |r| r.macd),
            DesignSystem::SERIES_MA_FAST,
            1.5,
        ));
        plot_ui.line(series_line(
            "Signal",
            column_points(rows, window, |r| r.macd_signal),
            DesignSystem::SERIES_MA_MID,
            1.5,
        ));
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);
    section_heading(ui, "Volatility (20d, %)");
    time_plot("volatility_chart", DesignSystem::SUBCHART_HEIGHT).show(ui, |plot_ui| {
        plot_ui.line(series_line(
            "Volatility",
            column_points(rows, window, |r| r.volatility.map(|v| v * 100.0)),
            DesignSystem::WARNING,
            1.5,
        ));
    });
}

fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .strong()
            .size(16.0)
            .color(DesignSystem::TEXT_PRIMARY),
    );
    ui.add_space(DesignSystem::SPACING_SMALL / 2.0);
}
