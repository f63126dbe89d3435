//! Loading Indicators
//!
//! Both indicators are recomputed every frame from the in-flight navigation
//! and the committed location.
//!
//! - `searching`: same pathname, target carries `q`. Shows the spinner.
//! - `navigating_elsewhere`: loading a different pathname. Dims the detail pane.
//!
//! A pure search never dims the pane and a path change never shows the
//! spinner.

use crate::egui_app::router::{Navigation, NavigationState};
use crate::shared::{Contact, Location, Result, SEARCH_PARAM};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadingIndicators {
    pub searching: bool,
    pub navigating_elsewhere: bool,
}

impl LoadingIndicators {
    pub fn derive(current: &Location, navigation: &Navigation) -> Self {
        let Some(target) = &navigation.location else {
            return Self::default();
        };
        let same_path = target.pathname() == current.pathname();
        Self {
            searching: same_path && target.has_param(SEARCH_PARAM),
            navigating_elsewhere: navigation.state == NavigationState::Loading && !same_path,
        }
    }
}

/// Styling state of a contact link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Active,
    Pending,
    Inactive,
}

impl LinkState {
    pub fn of(link: &Location, current: &Location, navigation: &Navigation) -> Self {
        if link.pathname() == current.pathname() {
            return LinkState::Active;
        }
        match &navigation.location {
            Some(target) if target.pathname() == link.pathname() => LinkState::Pending,
            _ => LinkState::Inactive,
        }
    }
}

/// Detail link for `contact` that keeps a non-empty search visible
pub fn contact_link(contact: &Contact, q: Option<&str>) -> Result<Location> {
    match q {
        Some(q) if !q.is_empty() => Location::with_query(&contact.path(), q),
        _ => Location::path(&contact.path()),
    }
}
