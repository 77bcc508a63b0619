use crate::application::dashboard::{ChartWindow, DashboardService, DashboardSnapshot, Period};
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::{render_metric_card, render_status_pill};
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::tabs::{self, Tab};
use crate::interfaces::view_models::DashboardViewModel;
use crossbeam_channel::Receiver;
use eframe::egui;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{error, info};

const MAX_LOG_LINES: usize = 200;

/// Native dashboard window. Each frame renders the cached snapshot.
pub struct DashboardApp {
    service: Arc<DashboardService>,
    log_rx: Receiver<String>,
    logs: VecDeque<String>,
    snapshot: Option<Arc<DashboardSnapshot>>,
    load_error: Option<String>,
    period: Period,
    sampling: usize,
    tab: Tab,
    export_status: Option<(String, bool)>,
    show_logs: bool,
}

impl DashboardApp {
    pub fn new(service: Arc<DashboardService>, log_rx: Receiver<String>, sampling: usize) -> Self {
        let period = Period::from_days(service.options().window_days);
        let mut app = Self {
            service,
            log_rx,
            logs: VecDeque::with_capacity(MAX_LOG_LINES),
            snapshot: None,
            load_error: None,
            period,
            sampling: sampling.max(1),
            tab: Tab::Technical,
            export_status: None,
            show_logs: false,
        };
        app.request_load(false);
        app
    }

    /// Fetches the snapshot; `force` drops the cached one first.
    fn request_load(&mut self, force: bool) {
        if force {
            self.service.invalidate();
        }

        match self.service.snapshot() {
            Ok(snapshot) => {
                if self
                    .snapshot
                    .as_ref()
                    .is_none_or(|current| !Arc::ptr_eq(current, &snapshot))
                {
                    info!(
                        "Dashboard loaded: {} rows from {}",
                        snapshot.series.len(),
                        snapshot.source_id
                    );
                }
                self.snapshot = Some(snapshot);
                self.load_error = None;
            }
            Err(e) => {
                error!("Dashboard load failed: {}", e);
                self.snapshot = None;
                self.load_error = Some(e.to_string());
            }
        }
    }

    fn drain_logs(&mut self) {
        while let Ok(line) = self.log_rx.try_recv() {
            if self.logs.len() >= MAX_LOG_LINES {
                self.logs.pop_front();
            }
            self.logs.push_back(line.trim_end().to_string());
        }
    }

    fn window(&self) -> ChartWindow {
        ChartWindow::new(self.period, self.sampling)
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel")
            .frame(
                egui::Frame::NONE
                    .fill(DesignSystem::BG_WINDOW)
                    .inner_margin(egui::Margin::symmetric(16, 10)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        egui::RichText::new("📈 Trendcast")
                            .strong()
                            .color(DesignSystem::TEXT_PRIMARY),
                    );
                    ui.separator();

                    egui::ComboBox::from_id_salt("period_selector")
                        .selected_text(self.period.label())
                        .show_ui(ui, |ui| {
                            for period in Period::CHOICES {
                                ui.selectable_value(&mut self.period, period, period.label());
                            }
                        });

                    ui.add(
                        egui::Slider::new(&mut self.sampling, 1..=20).text("chart sampling"),
                    );

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("⟳ Refresh").clicked() {
                            self.request_load(true);
                        }
                        ui.toggle_value(&mut self.show_logs, "Logs");

                        if let Some(snapshot) = &self.snapshot {
                            ui.label(
                                egui::RichText::new(format!(
                                    "Loaded {}s ago",
                                    snapshot.age_secs()
                                ))
                                .size(11.0)
                                .color(DesignSystem::TEXT_MUTED),
                            );
                        }
                    });
                });
            });
    }

    fn render_logs(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .default_height(160.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for line in &self.logs {
                            let color = if line.contains("ERROR") {
                                DesignSystem::DOWN
                            } else if line.contains("WARN") {
                                DesignSystem::WARNING
                            } else {
                                DesignSystem::TEXT_SECONDARY
                            };
                            ui.label(egui::RichText::new(line).monospace().size(11.0).color(color));
                        }
                    });
            });
    }

    fn render_header(&self, ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
        let header = DashboardViewModel::header(snapshot, self.period.days());

        ui.columns(4, |columns| {
            render_metric_card(
                &mut columns[0],
                "Last close",
                &header.last_close,
                DesignSystem::TEXT_PRIMARY,
                Some(&header.last_date),
            );
            render_metric_card(
                &mut columns[1],
                "Day change",
                &header.day_change,
                header.day_change_color,
                None,
            );
            render_metric_card(
                &mut columns[2],
                "Period change",
                &header.period_change,
                header.period_change_color,
                Some(&header.period_label),
            );
            render_metric_card(
                &mut columns[3],
                "Volatility (20d)",
                &header.volatility,
                header.volatility_color,
                None,
            );
        });
    }

    fn render_prediction(&self, ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
        let banner = DashboardViewModel::prediction(snapshot);

        Card::new()
            .title("Model prediction")
            .accent(banner.color)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(&banner.headline)
                            .size(22.0)
                            .strong()
                            .color(banner.color),
                    );
                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    if let Some(name) = &snapshot.model_name {
                        render_status_pill(ui, name, DesignSystem::ACCENT_SECONDARY);
                    }
                });
                ui.label(egui::RichText::new(&banner.detail).color(DesignSystem::TEXT_SECONDARY));

                if !banner.reasons.is_empty() {
                    ui.add_space(DesignSystem::SPACING_SMALL);
                    for reason in &banner.reasons {
                        ui.label(format!("• {reason}"));
                    }
                }
            });
    }

    fn render_error(&self, ui: &mut egui::Ui, message: &str) {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(
                egui::RichText::new("Could not load the price data")
                    .size(22.0)
                    .strong()
                    .color(DesignSystem::DOWN),
            );
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.label(egui::RichText::new(message).color(DesignSystem::TEXT_SECONDARY));
            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.label(
                egui::RichText::new("Check DATA_PATH and CSV_LAYOUT, then refresh.")
                    .size(12.0)
                    .color(DesignSystem::TEXT_MUTED),
            );
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());
        self.drain_logs();
        // Cheap while the cache is fresh; reloads once the TTL expires.
        if self.load_error.is_none() {
            self.request_load(false);
        }

        self.render_top_bar(ctx);
        if self.show_logs {
            self.render_logs(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(message) = self.load_error.clone() {
                self.render_error(ui, &message);
                return;
            }

            let Some(snapshot) = self.snapshot.clone() else {
                return;
            };

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    self.render_header(ui, &snapshot);
                    ui.add_space(DesignSystem::SPACING_MEDIUM);
                    self.render_prediction(ui, &snapshot);
                    ui.add_space(DesignSystem::SPACING_LARGE);

                    ui.horizontal(|ui| {
                        for tab in Tab::ALL {
                            ui.selectable_value(&mut self.tab, tab, tab.label());
                        }
                    });
                    ui.separator();
                    ui.add_space(DesignSystem::SPACING_SMALL);

                    let window = self.window();
                    match self.tab {
                        Tab::Technical => {
                            tabs::technical::render_technical_tab(ui, &snapshot, &window)
                        }
                        Tab::Indicators => tabs::indicators::render_indicators_tab(ui, &snapshot),
                        Tab::Model => tabs::model::render_model_tab(ui, &snapshot),
                        Tab::Summary => tabs::summary::render_summary_tab(ui, &snapshot),
                        Tab::Data => tabs::data::render_data_tab(
                            ui,
                            &snapshot,
                            &window,
                            &mut self.export_status,
                        ),
                    }
                });
        });

        // Log lines arrive between input events.
        ctx.request_repaint_after(std::time::Duration::from_millis(500));
    }
}
