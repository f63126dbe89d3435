//! Detail Pane
//!
//! The content outlet next to the sidebar. Renders whatever the detail loader
//! produced for the committed location, or the error boundary when the last
//! navigation failed. Dimmed while a different path is loading.

use eframe::egui;

use super::components::contact_card;
use super::indicators::LoadingIndicators;
use crate::egui_app::router::{DetailData, Router};
use crate::egui_app::state::SidebarAction;
use crate::egui_app::theme::{colors, styles};
use crate::shared::ContactsError;

/// Render the detail pane
pub fn render_detail_pane(
    ui: &mut egui::Ui,
    router: &Router,
    indicators: LoadingIndicators,
    actions: &mut Vec<SidebarAction>,
) {
    if indicators.navigating_elsewhere {
        ui.multiply_opacity(styles::DIMMED_OPACITY);
    }

    if let Some(err) = router.error() {
        render_error_boundary(ui, err, router.is_revalidating(), actions);
        ui.add_space(12.0);
    }

    match &router.loader_data().detail {
        DetailData::Home => render_home(ui),
        DetailData::About => render_about(ui),
        DetailData::Contact(contact) => contact_card::render(ui, contact, actions),
        DetailData::NotFound(message) => render_not_found(ui, message),
    }
}

fn render_error_boundary(
    ui: &mut egui::Ui,
    err: &ContactsError,
    retrying: bool,
    actions: &mut Vec<SidebarAction>,
) {
    styles::error_frame().show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.colored_label(colors::ERROR, format!("Something went wrong: {}", err));
            if retrying {
                ui.spinner();
            } else if ui.button("Retry").clicked() {
                actions.push(SidebarAction::Retry);
            }
        });
    });
}

fn render_home(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.colored_label(colors::TEXT_SECONDARY, "Pick a contact from the list, or create a new one.");
    });
}

fn render_about(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("About XF Contacts")
            .heading()
            .color(colors::TEXT_DARK),
    );
    ui.add_space(8.0);
    ui.colored_label(
        colors::TEXT_DARK,
        "A small address book. Type in the search box to filter the list; the \
         search is part of the address, so back and forward restore it.",
    );
}

fn render_not_found(ui: &mut egui::Ui, message: &str) {
    ui.label(
        egui::RichText::new("Contact not found")
            .heading()
            .color(colors::TEXT_DARK),
    );
    ui.colored_label(colors::TEXT_SECONDARY, message);
}
