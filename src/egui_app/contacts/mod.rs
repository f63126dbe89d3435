//! Contacts Module
//!
//! The sidebar layout: search synchronization, loading indicators and the
//! egui views built on them.

pub mod search_sync;
pub mod indicators;
pub mod main_layout;
pub mod sidebar;
pub mod detail_pane;
pub mod components;

pub use search_sync::{SearchPhase, SearchSync};
pub use indicators::{LinkState, LoadingIndicators};
pub use main_layout::render_contacts_view;
