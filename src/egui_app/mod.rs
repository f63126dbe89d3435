//! egui Native Desktop App Module
//!
//! The contacts browser: an in-memory contact store, a client-side router and
//! the egui views on top of them.
//!
//! # Architecture
//!
//! - **`config`** - Configuration layering (defaults, TOML file, environment)
//! - **`logging`** - tracing subscriber setup
//! - **`data`** - `ContactSource` trait and the in-memory store
//! - **`router`** - History, navigation lifecycle and route loaders
//! - **`contacts`** - Search synchronization, loading indicators, sidebar and
//!   detail pane
//! - **`state`** - `AppState`, the glue between router, search box and views
//! - **`views`** - Top bar and central panel
//! - **`theme`** - Colors and frame builders
//! - **`main`** - Binary entry point
//!
//! # Frame Loop
//!
//! ```text
//! tick()          poll router, commit, reconcile search box
//! render views    collect SidebarActions
//! apply actions   start navigations
//! ```

pub mod config;
pub mod logging;
pub mod data;
pub mod router;
pub mod contacts;
pub mod state;
pub mod views;
pub mod theme;

pub use config::Config;
pub use state::{AppState, SidebarAction};
