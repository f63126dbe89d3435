//! Color Constants for the Contacts Theme
//!
//! Warm brown/tan scheme: dark sidebar, light detail pane.

use eframe::egui::Color32;

/// Main sidebar background - Deep brown
pub const SIDEBAR_BG: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Contact list background - Dark brown
pub const CONTACT_LIST_BG: Color32 = Color32::from_rgb(0x3A, 0x27, 0x21);

/// Hovered contact link - Lighter brown
pub const CONTACT_HOVER: Color32 = Color32::from_rgb(0x5C, 0x3A, 0x2C);

/// Active contact link - Accent brown
pub const CONTACT_ACTIVE: Color32 = Color32::from_rgb(0x8A, 0x55, 0x3A);

/// Contact link with a navigation in flight - Muted tan
pub const CONTACT_PENDING: Color32 = Color32::from_rgb(0x6D, 0x5A, 0x4C);

/// Detail pane background - Off-white
pub const DETAIL_BG: Color32 = Color32::from_rgb(0xF7, 0xF2, 0xEC);

/// Card background inside the detail pane - Light tan
pub const CARD_BG: Color32 = Color32::from_rgb(0xEA, 0xDB, 0xC8);

/// Card border - Muted brown
pub const CARD_BORDER: Color32 = Color32::from_rgb(0xC7, 0xB2, 0x9A);

/// Top bar background - Dark brown
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x2A, 0x24);

/// Search input background - Light tan
pub const INPUT_BG: Color32 = Color32::from_rgb(0xE6, 0xD7, 0xC7);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF0, 0xE0, 0xD6);

/// Text on light backgrounds
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2F, 0x1E, 0x1A);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x7B, 0x6B);

/// Favorite star - Gold
pub const FAVORITE: Color32 = Color32::from_rgb(0xEE, 0xB0, 0x04);

/// Error banner text - Dark red
pub const ERROR: Color32 = Color32::from_rgb(0xA0, 0x14, 0x14);

/// Error banner background - Pale red
pub const ERROR_BG: Color32 = Color32::from_rgb(0xFF, 0xEE, 0xEE);

/// Error banner border - Red
pub const ERROR_BORDER: Color32 = Color32::from_rgb(0xC8, 0x50, 0x50);
