//! Contact Card Component
//!
//! The detail view of a single contact with its favorite toggle.

use eframe::egui;

use crate::egui_app::state::SidebarAction;
use crate::egui_app::theme::{colors, styles};
use crate::shared::Contact;

/// Render the card for `contact`
pub fn render(ui: &mut egui::Ui, contact: &Contact, actions: &mut Vec<SidebarAction>) {
    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(ui.available_width().min(480.0));

        ui.horizontal(|ui| {
            let name = match contact.display_name() {
                Some(name) => egui::RichText::new(name).heading().strong(),
                None => egui::RichText::new("No Name").heading().italics(),
            };
            ui.label(name.color(colors::TEXT_DARK));

            let (star, hint) = if contact.favorite {
                ("★", "Remove from favorites")
            } else {
                ("☆", "Add to favorites")
            };
            let button = egui::Button::new(egui::RichText::new(star).size(20.0).color(colors::FAVORITE))
                .frame(false);
            if ui.add(button).on_hover_text(hint).clicked() {
                actions.push(SidebarAction::SetFavorite {
                    id: contact.id.clone(),
                    favorite: !contact.favorite,
                });
            }
        });

        if let Some(twitter) = contact.twitter.as_deref().filter(|t| !t.is_empty()) {
            let handle = twitter.trim_start_matches('@');
            ui.hyperlink_to(twitter, format!("https://twitter.com/{}", handle));
        }

        if let Some(avatar) = contact.avatar.as_deref().filter(|a| !a.is_empty()) {
            ui.hyperlink_to("Avatar", avatar);
        }

        if let Some(notes) = contact.notes.as_deref().filter(|n| !n.is_empty()) {
            ui.add_space(8.0);
            ui.label(egui::RichText::new(notes).color(colors::TEXT_DARK));
        }

        ui.add_space(4.0);
        ui.colored_label(
            colors::TEXT_SECONDARY,
            format!("Added {}", contact.created_at.format("%Y-%m-%d")),
        );
    });
}
