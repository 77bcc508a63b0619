use crate::application::dashboard::DashboardSnapshot;
use crate::interfaces::components::card::Card;
use crate::interfaces::components::metrics::render_metric_card;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::view_models::dashboard_view_model::{NOT_AVAILABLE, fmt_opt, fmt_ratio_pct};
use eframe::egui;

pub fn render_model_tab(ui: &mut egui::Ui, snapshot: &DashboardSnapshot) {
    let info = &snapshot.model_info;

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(snapshot.model_name.as_deref().unwrap_or("No model loaded"))
                .size(18.0)
                .strong()
                .color(DesignSystem::TEXT_PRIMARY),
        );
        if let Some(kind) = &info.model_type {
            ui.label(egui::RichText::new(format!("({kind})")).color(DesignSystem::TEXT_SECONDARY));
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!(
                    "Trained: {}",
                    info.training_date.as_deref().unwrap_or(NOT_AVAILABLE)
                ))
                .color(DesignSystem::TEXT_MUTED),
            );
        });
    });

    ui.add_space(DesignSystem::SPACING_MEDIUM);

    ui.columns(3, |columns| {
        render_metric_card(
            &mut columns[0],
            "Accuracy",
            &fmt_ratio_pct(info.accuracy),
            DesignSystem::ACCENT_SECONDARY,
            Some("Held-out test set"),
        );
        render_metric_card(
            &mut columns[1],
            "AUC-ROC",
            &fmt_opt(info.auc, 2),
            DesignSystem::ACCENT_SECONDARY,
            None,
        );
        render_metric_card(
            &mut columns[2],
            "F1",
            &fmt_opt(info.f1, 2),
            DesignSystem::ACCENT_SECONDARY,
            None,
        );
    });

    ui.add_space(DesignSystem::SPACING_SMALL);

    ui.columns(3, |columns| {
        render_metric_card(
            &mut columns[0],
            "Precision (up)",
            &fmt_ratio_pct(info.precision_high),
            DesignSystem::TEXT_PRIMARY,
            None,
        );
        render_metric_card(
            &mut columns[1],
            "Recall (up)",
            &fmt_ratio_pct(info.recall_high),
            DesignSystem::TEXT_PRIMARY,
            None,
        );
        render_metric_card(
            &mut columns[2],
            "Features",
            &snapshot.feature_columns.len().to_string(),
            DesignSystem::TEXT_PRIMARY,
            None,
        );
    });

    ui.add_space(DesignSystem::SPACING_LARGE);

    Card::new().title("Feature columns").show(ui, |ui| {
        if snapshot.feature_columns.is_empty() {
            ui.label(
                egui::RichText::new("No feature list loaded.").color(DesignSystem::TEXT_MUTED),
            );
            return;
        }
        ui.horizontal_wrapped(|ui| {
            for name in &snapshot.feature_columns {
                ui.label(egui::RichText::new(name).monospace().color(DesignSystem::TEXT_SECONDARY));
                ui.add_space(DesignSystem::SPACING_SMALL);
            }
        });
    });
}
