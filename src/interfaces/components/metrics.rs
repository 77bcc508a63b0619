use crate::interfaces::components::card::Card;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A card for one headline number
pub fn render_metric_card(
    ui: &mut egui::Ui,
    title: &str,
    value: &str,
    value_color: egui::Color32,
    context: Option<&str>,
) {
    Card::new().title(title).min_height(96.0).show(ui, |ui| {
        ui.label(
            egui::RichText::new(value)
                .size(26.0)
                .strong()
                .color(value_color),
        );

        if let Some(ctx) = context {
            ui.label(
                egui::RichText::new(ctx)
                    .size(11.0)
                    .color(DesignSystem::TEXT_MUTED),
            );
        }
    });
}

/// Label/value pair used inside grids and compact rows
pub fn render_mini_metric(ui: &mut egui::Ui, label: &str, value: &str, color: egui::Color32) {
    ui.vertical(|ui| {
        ui.label(
            egui::RichText::new(label)
                .size(11.0)
                .color(DesignSystem::TEXT_SECONDARY),
        );
        ui.label(egui::RichText::new(value).size(18.0).strong().color(color));
    });
}

/// A status pill (e.g. overbought, bullish)
pub fn render_status_pill(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::NONE
        .fill(color.linear_multiply(0.15))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).size(12.0).strong().color(color));
        });
}
