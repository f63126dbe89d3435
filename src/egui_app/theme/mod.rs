//! Theme Module
//!
//! Color constants and frame builders for the contacts UI.
//!
//! # Usage
//!
//! ```rust,ignore
//! use xfcontacts::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::sidebar_frame().show(ui, |ui| {
//!     // Sidebar content
//! });
//! ```

pub mod colors;
pub mod styles;
