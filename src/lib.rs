//! XFContacts - Main Library
//!
//! XFContacts is a native two-pane address book built with egui: a sidebar
//! with a search box and a contact list, and a detail pane for the selected
//! contact.
//!
//! # Overview
//!
//! Navigation works like a web app. Every screen is addressed by a location
//! such as `/contacts/7?q=al`, a small client-side router keeps a history
//! stack, and route loaders fetch the data for a location off the UI thread.
//! The search box is bound to the `q` parameter of the current location:
//!
//! - typing submits the search as a navigation (push for the first search,
//!   replace afterwards)
//! - every committed navigation, including back/forward, writes `q` back into
//!   the search box
//! - clearing drops `q` from the location and refocuses the box
//!
//! # Module Structure
//!
//! - **`shared`** - Platform-agnostic types
//!   - Contact records, locations, errors, configuration
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Contact store and route loaders
//!   - History, navigation lifecycle and router
//!   - Search synchronization and loading indicators
//!   - Sidebar, detail pane and theme
//!
//! # Thread Safety
//!
//! - **UI**: egui is single-threaded immediate mode GUI
//! - **Loaders**: run on worker threads against an `Arc<dyn ContactSource>`
//!   and report back over an mpsc channel polled once per frame
/// Shared types and data structures
pub mod shared;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
