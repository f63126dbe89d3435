use eframe::egui;

use crate::egui_app::contacts::render_contacts_view;
use crate::egui_app::router::NavigationState;
use crate::egui_app::state::{AppState, SidebarAction};
use crate::egui_app::theme::{colors, styles};

/// Browser-style chrome: back/forward and the current address
pub fn render_top_bar(ctx: &egui::Context, state: &AppState, actions: &mut Vec<SidebarAction>) {
    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(state.router.can_go_back(), egui::Button::new("◀"))
                    .on_hover_text("Back")
                    .clicked()
                {
                    actions.push(SidebarAction::Back);
                }
                if ui
                    .add_enabled(state.router.can_go_forward(), egui::Button::new("▶"))
                    .on_hover_text("Forward")
                    .clicked()
                {
                    actions.push(SidebarAction::Forward);
                }

                ui.add_space(8.0);
                ui.colored_label(
                    colors::TEXT_LIGHT,
                    egui::RichText::new(state.router.location().href()).monospace(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let navigation = state.router.navigation();
                    let status = match navigation.state {
                        NavigationState::Idle => None,
                        NavigationState::Loading => Some("Loading"),
                        NavigationState::Submitting => Some("Saving"),
                    };
                    if let Some(status) = status {
                        ui.colored_label(colors::TEXT_SECONDARY, status);
                        ui.spinner();
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState, actions: &mut Vec<SidebarAction>) {
    let frame = egui::Frame::default()
        .fill(colors::SIDEBAR_BG)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default()
        .frame(frame)
        .show(ctx, |ui| render_contacts_view(ui, state, actions));
}
