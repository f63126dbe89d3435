//! Search Bar Component
//!
//! The search field (widget id `q`), the clear button and the spinner slot.

use eframe::egui;

use crate::egui_app::contacts::indicators::LoadingIndicators;
use crate::egui_app::contacts::search_sync::SearchSync;
use crate::egui_app::state::SidebarAction;
use crate::egui_app::theme::colors;

/// Widget id of the search field
pub const SEARCH_INPUT_ID: &str = "q";

/// Placeholder shown in the empty field
pub const HINT: &str = "Search";

/// Clear button label
pub const CLEAR_LABEL: &str = "✕";

/// Which optional parts of the bar are painted this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBarVisibility {
    /// The spinner always takes its slot; this only controls painting
    pub spinner: bool,
    pub clear_button: bool,
}

impl SearchBarVisibility {
    pub fn of(search: &SearchSync, indicators: LoadingIndicators) -> Self {
        Self {
            spinner: indicators.searching,
            clear_button: !search.text().is_empty(),
        }
    }
}

/// Render the search bar
pub fn render(
    ui: &mut egui::Ui,
    search: &mut SearchSync,
    indicators: LoadingIndicators,
    actions: &mut Vec<SidebarAction>,
) {
    let visibility = SearchBarVisibility::of(search, indicators);

    ui.horizontal(|ui| {
        ui.label("🔍");

        // Edit a copy; the real text only changes through SearchSync
        let mut text = search.text().to_string();
        let text_color = if indicators.searching {
            colors::TEXT_SECONDARY
        } else {
            colors::TEXT_DARK
        };
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .id(egui::Id::new(SEARCH_INPUT_ID))
                .hint_text(HINT)
                .text_color(text_color)
                .desired_width(ui.available_width() - 56.0),
        );

        if response.changed() {
            actions.push(SidebarAction::SearchEdited(text));
        }

        if search.take_focus_request() {
            response.request_focus();
        }

        ui.add_visible(visibility.spinner, egui::Spinner::new());

        if visibility.clear_button && ui.small_button(CLEAR_LABEL).clicked() {
            actions.push(SidebarAction::ClearSearch);
        }
    });
}
