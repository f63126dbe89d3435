//! Contact List Component
//!
//! Renders the loader's contacts as links that carry the committed search.

use eframe::egui;

use super::contact_item;
use crate::egui_app::contacts::indicators::{contact_link, LinkState};
use crate::egui_app::router::Navigation;
use crate::egui_app::state::SidebarAction;
use crate::egui_app::theme::colors;
use crate::shared::{Contact, Location};

/// Shown in place of the list when the loader returned nothing
pub const EMPTY_TEXT: &str = "No contacts";

/// Render the contact list
pub fn render(
    ui: &mut egui::Ui,
    contacts: &[Contact],
    q: Option<&str>,
    current: &Location,
    navigation: &Navigation,
    actions: &mut Vec<SidebarAction>,
) {
    if contacts.is_empty() {
        render_empty_state(ui);
        return;
    }

    for contact in contacts {
        let link = match contact_link(contact, q) {
            Ok(link) => link,
            Err(e) => {
                tracing::warn!("[SIDEBAR] Skipping contact {}: {}", contact.id, e);
                continue;
            }
        };
        let state = LinkState::of(&link, current, navigation);
        if contact_item::render(ui, contact, state) {
            actions.push(SidebarAction::Open(link));
        }
        ui.add_space(2.0);
    }
}

/// Render empty state when no contacts
fn render_empty_state(ui: &mut egui::Ui) {
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(EMPTY_TEXT)
                .italics()
                .color(colors::TEXT_SECONDARY),
        );
    });
}
