//! Navigation Lifecycle
//!
//! Describes the one navigation that may be in flight. Views never see
//! [`PendingNavigation`] directly; they read the [`Navigation`] snapshot the
//! router derives from it.

use super::history::HistoryAction;
use crate::shared::Location;

/// Phase of the in-flight navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationState {
    /// Nothing in flight
    #[default]
    Idle,
    /// Loaders are running for a new location
    Loading,
    /// A mutation is running before the follow-up load
    Submitting,
}

/// Snapshot of the in-flight navigation for rendering
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigation {
    pub state: NavigationState,
    /// Where the navigation is headed, `None` when idle
    pub location: Option<Location>,
}

impl Navigation {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.state == NavigationState::Idle
    }
}

/// Bookkeeping for the navigation the router is waiting on
#[derive(Debug, Clone)]
pub struct PendingNavigation {
    /// Matches the id tagged onto the loader result
    pub id: u64,
    pub location: Location,
    pub action: HistoryAction,
    pub state: NavigationState,
    /// Reloading the current location; not reported as a navigation
    pub revalidating: bool,
}

impl PendingNavigation {
    pub fn snapshot(&self) -> Navigation {
        if self.revalidating {
            return Navigation::idle();
        }
        Navigation {
            state: self.state,
            location: Some(self.location.clone()),
        }
    }
}
