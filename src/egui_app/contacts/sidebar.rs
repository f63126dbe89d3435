//! Sidebar Component
//!
//! Header with the about link and the New button, the search bar, and the
//! contact list.

use eframe::egui;

use super::components::{contact_list, search_bar};
use super::indicators::LoadingIndicators;
use crate::egui_app::state::{AppState, SidebarAction};
use crate::egui_app::theme::{colors, styles};
use crate::shared::Location;

/// Sidebar width in pixels
pub const SIDEBAR_WIDTH: f32 = 320.0;

/// Render the sidebar
pub fn render_sidebar(
    ui: &mut egui::Ui,
    state: &mut AppState,
    indicators: LoadingIndicators,
    actions: &mut Vec<SidebarAction>,
) {
    ui.set_min_width(SIDEBAR_WIDTH);

    styles::sidebar_header_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width());

        ui.horizontal(|ui| {
            let title = egui::RichText::new("XF Contacts")
                .heading()
                .color(colors::TEXT_LIGHT);
            if ui.link(title).clicked() {
                match Location::path("/about") {
                    Ok(about) => actions.push(SidebarAction::Open(about)),
                    Err(e) => tracing::warn!("[SIDEBAR] About link: {}", e),
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("New").clicked() {
                    actions.push(SidebarAction::NewContact);
                }
            });
        });

        ui.add_space(8.0);
        search_bar::render(ui, &mut state.search, indicators, actions);
    });

    ui.add_space(4.0);

    let navigation = state.router.navigation();
    let data = &state.router.loader_data().sidebar;
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            contact_list::render(
                ui,
                &data.contacts,
                data.q.as_deref(),
                state.router.location(),
                &navigation,
                actions,
            );
        });
}
