//! Contacts UI Components
//!
//! Reusable widgets for the sidebar and the detail pane.

pub mod search_bar;
pub mod contact_list;
pub mod contact_item;
pub mod contact_card;
