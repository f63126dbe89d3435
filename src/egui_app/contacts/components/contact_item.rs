//! Contact Item Component
//!
//! One link in the contact list: the name (or an italic "No Name") and a star
//! for favorites.

use eframe::egui;

use crate::egui_app::contacts::indicators::LinkState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::Contact;

/// Placeholder for a contact with neither name set
pub const NO_NAME: &str = "No Name";

/// Favorite marker
pub const STAR: &str = "★";

/// What a contact link shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemLabel {
    pub text: String,
    /// Set for the "No Name" placeholder
    pub italic: bool,
    pub starred: bool,
}

impl ItemLabel {
    pub fn of(contact: &Contact) -> Self {
        let (text, italic) = match contact.display_name() {
            Some(name) => (name, false),
            None => (NO_NAME.to_string(), true),
        };
        Self {
            text,
            italic,
            starred: contact.favorite,
        }
    }

    fn rich_text(&self, color: egui::Color32) -> egui::RichText {
        let text = egui::RichText::new(&self.text).color(color);
        if self.italic {
            text.italics()
        } else {
            text
        }
    }
}

/// Render a single contact link
/// Returns true if the item was clicked
pub fn render(ui: &mut egui::Ui, contact: &Contact, state: LinkState) -> bool {
    let hover_id = ui.id().with(("contact-hover", &contact.id));
    let was_hovered = ui.data(|d| d.get_temp::<bool>(hover_id).unwrap_or(false));

    let text_color = match state {
        LinkState::Inactive => colors::TEXT_LIGHT,
        LinkState::Active | LinkState::Pending => egui::Color32::WHITE,
    };
    let label = ItemLabel::of(contact);

    let response = styles::contact_item_frame(state, was_hovered).show(ui, |ui| {
        ui.set_min_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(label.rich_text(text_color));

            if label.starred {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(STAR).color(colors::FAVORITE));
                });
            }
        });
    });

    let response = response.response.interact(egui::Sense::click());
    ui.data_mut(|d| d.insert_temp(hover_id, response.hovered()));
    response.clicked()
}
