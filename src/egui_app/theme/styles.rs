//! Theme Styling Functions
//!
//! Helpers that apply the brown color scheme consistently across the views.

use eframe::egui::{self, CornerRadius, Stroke};

use super::colors;
use crate::egui_app::contacts::indicators::LinkState;

/// Opacity of the detail pane while another path is loading
pub const DIMMED_OPACITY: f32 = 0.25;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.window_fill = colors::DETAIL_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::CARD_BORDER);
    style.visuals.panel_fill = colors::SIDEBAR_BG;

    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_DARK);

    style.visuals.widgets.hovered.bg_fill = colors::CONTACT_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::CONTACT_ACTIVE;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.extreme_bg_color = colors::INPUT_BG;
    style.visuals.selection.bg_fill = colors::CONTACT_ACTIVE;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    ctx.set_style(style);
}

/// Create a frame style for the sidebar
pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SIDEBAR_BG)
        .inner_margin(egui::Margin::same(0))
}

/// Create a frame style for the search/header block of the sidebar
pub fn sidebar_header_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CONTACT_LIST_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame style for the detail pane
pub fn detail_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::DETAIL_BG)
        .inner_margin(egui::Margin::symmetric(32, 24))
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame for a contact link
pub fn contact_item_frame(state: LinkState, is_hovered: bool) -> egui::Frame {
    let bg_color = match state {
        LinkState::Active => colors::CONTACT_ACTIVE,
        LinkState::Pending => colors::CONTACT_PENDING,
        LinkState::Inactive if is_hovered => colors::CONTACT_HOVER,
        LinkState::Inactive => colors::CONTACT_LIST_BG,
    };

    egui::Frame::new()
        .fill(bg_color)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame for the contact card in the detail pane
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::CARD_BG)
        .stroke(Stroke::new(1.0, colors::CARD_BORDER))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(16, 12))
}

/// Create a frame for the error boundary banner
pub fn error_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::ERROR_BG)
        .stroke(Stroke::new(1.0, colors::ERROR_BORDER))
        .inner_margin(egui::Margin::symmetric(10, 8))
}
