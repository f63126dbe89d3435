//! Search Synchronization
//!
//! Keeps the search box text bound to the committed `q` of the current
//! location.
//!
//! Two paths touch the text and they never feed each other:
//!
//! - **write path** ([`SearchSync::edit`], [`SearchSync::clear`]): user input.
//!   Produces a navigation for the router to run.
//! - **binding rule** ([`SearchSync::reconcile`]): runs after every committed
//!   navigation and copies the committed `q` into the text. Produces nothing.
//!
//! `edit` only reports a submission when the field value differs from the
//! local text, so re-rendering a reconciled value can never submit it again.

use crate::egui_app::router::Navigation;
use crate::shared::{Location, Result};

/// Where the search box is in its lifecycle. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Text matches the committed query
    Idle,
    /// Text diverges from the committed query, nothing in flight
    Typing,
    /// A search or clear navigation is in flight
    Submitting,
    /// Some other navigation is in flight
    NavigatingElsewhere,
}

/// A search the router should run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSubmission {
    pub q: String,
    /// Replace the current history entry instead of pushing
    pub replace: bool,
}

/// Navigation produced by the clear button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearNavigation {
    pub to: Location,
    pub replace: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum FocusRequest {
    #[default]
    None,
    /// Focus once the clearing navigation has committed
    AfterSettle,
    /// Focus on the next frame
    Now,
}

/// Local search text plus what it is bound to
#[derive(Debug, Clone, Default)]
pub struct SearchSync {
    text: String,
    committed: Option<String>,
    in_flight: Option<Location>,
    focus: FocusRequest,
}

impl SearchSync {
    /// Start bound to the `q` the first render was loaded with
    pub fn new(committed: Option<String>) -> Self {
        Self {
            text: committed.clone().unwrap_or_default(),
            committed,
            in_flight: None,
            focus: FocusRequest::None,
        }
    }

    /// What the search box displays
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The `q` of the last committed navigation
    pub fn committed(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    /// Local text differs from the committed query
    pub fn is_dirty(&self) -> bool {
        self.text != self.committed.as_deref().unwrap_or_default()
    }

    /// Update the local text. Returns whether it actually changed.
    pub fn keystroke(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text == self.text {
            return false;
        }
        self.text = text;
        true
    }

    /// Form change event: submit the current field value.
    ///
    /// Only the very first search (nothing committed yet) gets its own history
    /// entry; refining a search replaces it.
    pub fn form_changed(&self) -> SearchSubmission {
        SearchSubmission {
            q: self.text.clone(),
            replace: self.committed.is_some(),
        }
    }

    /// Keystroke followed by the form change it triggers
    pub fn edit(&mut self, text: impl Into<String>) -> Option<SearchSubmission> {
        if !self.keystroke(text) {
            return None;
        }
        if self.focus == FocusRequest::AfterSettle {
            self.focus = FocusRequest::None;
        }
        Some(self.form_changed())
    }

    /// Record the target of a submitted search so the phase can recognise it
    pub fn mark_submitted(&mut self, target: Location) {
        self.in_flight = Some(target);
    }

    /// Empty the box and drop `q` from the current location
    pub fn clear(&mut self, current: &Location) -> Result<ClearNavigation> {
        self.text.clear();
        self.focus = FocusRequest::AfterSettle;
        let to = Location::path(current.pathname())?;
        self.in_flight = Some(to.clone());
        Ok(ClearNavigation { to, replace: true })
    }

    /// Binding rule: committed `q` wins. Runs after every committed navigation.
    pub fn reconcile(&mut self, committed: Option<&str>) {
        if self.committed.as_deref() != committed {
            tracing::debug!(
                "[SEARCH] Committed q {:?} -> {:?}",
                self.committed,
                committed
            );
        }
        self.committed = committed.map(str::to_string);
        self.text = committed.unwrap_or_default().to_string();
        self.in_flight = None;

        self.focus = match (self.focus, committed) {
            (FocusRequest::AfterSettle, None) => FocusRequest::Now,
            (FocusRequest::AfterSettle, Some(_)) => FocusRequest::None,
            (focus, _) => focus,
        };
    }

    /// Whether the search box should grab focus this frame. Consumes the request.
    pub fn take_focus_request(&mut self) -> bool {
        if self.focus == FocusRequest::Now {
            self.focus = FocusRequest::None;
            return true;
        }
        false
    }

    /// Current phase given the router's in-flight navigation
    pub fn phase(&self, navigation: &Navigation) -> SearchPhase {
        match &navigation.location {
            Some(target) if self.in_flight.as_ref() == Some(target) => SearchPhase::Submitting,
            Some(_) => SearchPhase::NavigatingElsewhere,
            None if self.is_dirty() => SearchPhase::Typing,
            None => SearchPhase::Idle,
        }
    }
}
