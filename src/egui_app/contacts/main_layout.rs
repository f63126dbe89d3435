//! Main Contacts Layout
//!
//! Sidebar on the left, detail pane on the right.

use eframe::egui;

use super::detail_pane::render_detail_pane;
use super::sidebar::{render_sidebar, SIDEBAR_WIDTH};
use crate::egui_app::state::{AppState, SidebarAction};
use crate::egui_app::theme::styles;

/// Render the two-pane contacts view. Actions are collected, not applied.
pub fn render_contacts_view(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<SidebarAction>) {
    let indicators = state.indicators();
    let available_size = ui.available_size();

    ui.horizontal(|ui| {
        // Left sidebar
        ui.allocate_ui_with_layout(
            egui::vec2(SIDEBAR_WIDTH, available_size.y),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                styles::sidebar_frame().show(ui, |ui| {
                    ui.set_min_height(available_size.y);
                    render_sidebar(ui, state, indicators, actions);
                });
            },
        );

        ui.add(egui::Separator::default().vertical());

        // Right detail pane
        ui.allocate_ui_with_layout(
            egui::vec2(available_size.x - SIDEBAR_WIDTH - 1.0, available_size.y),
            egui::Layout::top_down(egui::Align::LEFT),
            |ui| {
                styles::detail_frame().show(ui, |ui| {
                    ui.set_min_size(ui.available_size());
                    render_detail_pane(ui, &state.router, indicators, actions);
                });
            },
        );
    });
}
