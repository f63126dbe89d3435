//! Client-Side Router
//!
//! Owns the history stack, the committed route data and the single in-flight
//! navigation.
//!
//! # Lifecycle
//!
//! 1. A navigation starts (`navigate`, `submit_search`, `submit`, `back`,
//!    `forward`, `revalidate`). It gets a fresh id and becomes the pending
//!    navigation, superseding whatever was pending before.
//! 2. The loaders run according to [`Dispatch`] and send `(id, result)` back
//!    over a channel.
//! 3. `poll` drains the channel once per frame. A result whose id is not the
//!    pending id is discarded. The pending result commits: the history stack
//!    is updated and the new route data replaces the old.
//!
//! Nothing outside this module writes to the history stack.

pub mod history;
pub mod loader;
pub mod navigation;

use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Duration;

use crate::egui_app::data::{ContactSource, SharedSource};
use crate::shared::{ContactsError, Location, Result};

pub use history::{History, HistoryAction};
pub use loader::{load_route, DetailData, Route, RouteData, SidebarData, SIDEBAR_PATH};
pub use navigation::{Navigation, NavigationState, PendingNavigation};

/// How loader jobs are executed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Run on the calling thread; the result is picked up by the next `poll`
    Inline,
    /// Run on a worker thread after an artificial delay
    Background { delay: Duration },
}

/// Options for [`Router::navigate`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    pub replace: bool,
}

/// Writes performed before the follow-up load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Create an empty contact and open it
    CreateContact,
    /// Star or unstar a contact and reload the current location
    SetFavorite { id: String, favorite: bool },
}

/// Result of a finished loader job
#[derive(Debug)]
struct Loaded {
    location: Location,
    action: HistoryAction,
    data: RouteData,
}

type Job = Box<dyn FnOnce(&dyn ContactSource) -> Result<Loaded> + Send>;

/// A navigation that just committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub location: Location,
    pub action: HistoryAction,
    /// Committed `q` after this navigation
    pub q: Option<String>,
}

/// The in-app router
pub struct Router {
    source: SharedSource,
    dispatch: Dispatch,
    history: History,
    loader_data: RouteData,
    error: Option<ContactsError>,
    pending: Option<PendingNavigation>,
    next_id: u64,
    tx: Sender<(u64, Result<Loaded>)>,
    rx: Receiver<(u64, Result<Loaded>)>,
}

impl Router {
    /// Create a router and load `initial` synchronously
    pub fn new(source: SharedSource, dispatch: Dispatch, initial: Location) -> Result<Self> {
        let loader_data = load_route(source.as_ref(), &initial)?;
        tracing::info!("[ROUTER] Initial location {}", initial);
        let (tx, rx) = channel();
        Ok(Self {
            source,
            dispatch,
            history: History::new(initial),
            loader_data,
            error: None,
            pending: None,
            next_id: 1,
            tx,
            rx,
        })
    }

    /// Committed location
    pub fn location(&self) -> &Location {
        self.history.current()
    }

    /// Route data for the committed location
    pub fn loader_data(&self) -> &RouteData {
        &self.loader_data
    }

    /// Error from the last failed navigation, cleared by the next commit
    pub fn error(&self) -> Option<&ContactsError> {
        self.error.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Snapshot of the in-flight navigation
    pub fn navigation(&self) -> Navigation {
        self.pending
            .as_ref()
            .map(PendingNavigation::snapshot)
            .unwrap_or_default()
    }

    pub fn is_revalidating(&self) -> bool {
        self.pending.as_ref().is_some_and(|p| p.revalidating)
    }

    /// Whether `back` has an entry to go to, counting a pending pop
    pub fn can_go_back(&self) -> bool {
        self.history.peek(self.pending_pop() - 1).is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        self.history.peek(self.pending_pop() + 1).is_some()
    }

    /// Navigate to `to`. Pushing the committed href again becomes a replace.
    pub fn navigate(&mut self, to: Location, options: NavigateOptions) {
        let action = if options.replace || to == *self.location() {
            HistoryAction::Replace
        } else {
            HistoryAction::Push
        };
        self.load(to, action, false);
    }

    /// Submit the search form as a GET to the sidebar path. Returns the target.
    pub fn submit_search(&mut self, q: &str, options: NavigateOptions) -> Result<Location> {
        let target = Location::with_query(SIDEBAR_PATH, q)?;
        tracing::debug!(
            "[SEARCH] Submitting q={:?} ({})",
            q,
            if options.replace { "replace" } else { "push" }
        );
        self.navigate(target.clone(), options);
        Ok(target)
    }

    /// Run a mutation, then load wherever it leads
    pub fn submit(&mut self, mutation: Mutation) {
        let current = self.location().clone();
        tracing::info!("[ROUTER] Submitting {:?}", mutation);
        let job: Job = Box::new(move |source| {
            let (location, action) = match mutation {
                Mutation::CreateContact => {
                    let contact = source.create_contact()?;
                    (Location::path(&contact.path())?, HistoryAction::Push)
                }
                Mutation::SetFavorite { id, favorite } => {
                    source.set_favorite(&id, favorite)?;
                    (current, HistoryAction::Replace)
                }
            };
            let data = load_route(source, &location)?;
            Ok(Loaded { location, action, data })
        });
        let form_action = self.location().clone();
        self.start(form_action, HistoryAction::Replace, NavigationState::Submitting, false, job);
    }

    /// Go one entry back. Returns false when there is nothing to go back to.
    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    /// Go one entry forward. Returns false at the newest entry.
    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Move `delta` entries through the history stack. A pop that is still
    /// pending counts, so two quick backs land two entries back.
    pub fn go(&mut self, delta: isize) -> bool {
        let total = self.pending_pop() + delta;
        let Some(target) = self.history.peek(total).cloned() else {
            return false;
        };
        self.load(target, HistoryAction::Pop(total), false);
        true
    }

    /// Delta of the pending navigation when it is a pop, else 0
    fn pending_pop(&self) -> isize {
        match self.pending.as_ref().map(|p| p.action) {
            Some(HistoryAction::Pop(delta)) => delta,
            _ => 0,
        }
    }

    /// Reload the committed location without reporting a navigation
    pub fn revalidate(&mut self) {
        let current = self.location().clone();
        self.load(current, HistoryAction::Replace, true);
    }

    /// Settle the pending navigation if its loaders have finished.
    ///
    /// `Some(Ok)` carries the commit. `Some(Err)` means the navigation failed
    /// and the committed location and data were kept.
    pub fn poll(&mut self) -> Option<Result<Commit>> {
        let mut settled = None;
        while let Ok((id, result)) = self.rx.try_recv() {
            let pending = match self.pending.take() {
                Some(pending) if pending.id == id => pending,
                other => {
                    tracing::debug!("[ROUTER] Discarding superseded navigation #{}", id);
                    self.pending = other;
                    continue;
                }
            };

            match result {
                Ok(loaded) => {
                    if !self.history.apply(loaded.action, loaded.location.clone()) {
                        tracing::warn!(
                            "[ROUTER] Navigation #{} to {} no longer fits the history stack",
                            id,
                            loaded.location
                        );
                        continue;
                    }
                    tracing::info!(
                        "[ROUTER] Committed #{} {:?} {}",
                        id,
                        loaded.action,
                        loaded.location
                    );
                    self.error = None;
                    self.loader_data = loaded.data;
                    settled = Some(Ok(Commit {
                        location: loaded.location,
                        action: loaded.action,
                        q: self.loader_data.sidebar.q.clone(),
                    }));
                }
                Err(err) => {
                    tracing::error!(
                        "[ROUTER] Navigation #{} to {} failed: {}",
                        id,
                        pending.location,
                        err
                    );
                    self.error = Some(err.clone());
                    settled = Some(Err(err));
                }
            }
        }
        settled
    }

    fn load(&mut self, target: Location, action: HistoryAction, revalidating: bool) {
        let location = target.clone();
        let job: Job = Box::new(move |source| {
            let data = load_route(source, &location)?;
            Ok(Loaded { location, action, data })
        });
        self.start(target, action, NavigationState::Loading, revalidating, job);
    }

    fn start(
        &mut self,
        target: Location,
        action: HistoryAction,
        state: NavigationState,
        revalidating: bool,
        job: Job,
    ) {
        let id = self.next_id;
        self.next_id += 1;

        if let Some(previous) = &self.pending {
            tracing::debug!(
                "[ROUTER] Navigation #{} to {} supersedes #{}",
                id,
                target,
                previous.id
            );
        }
        tracing::debug!("[ROUTER] Navigation #{} {:?} -> {}", id, state, target);

        self.pending = Some(PendingNavigation {
            id,
            location: target,
            action,
            state,
            revalidating,
        });

        let source = self.source.clone();
        let tx = self.tx.clone();
        match self.dispatch {
            Dispatch::Inline => {
                let _ = tx.send((id, job(source.as_ref())));
            }
            Dispatch::Background { delay } => {
                std::thread::spawn(move || {
                    if !delay.is_zero() {
                        std::thread::sleep(delay);
                    }
                    let _ = tx.send((id, job(source.as_ref())));
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::data::MemoryContactStore;
    use crate::shared::Contact;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn router_at(href: &str) -> Router {
        let store = MemoryContactStore::from_contacts(vec![
            Contact::new("7", "Alice", "Liddell"),
            Contact::new("8", "Bob", "Builder"),
        ]);
        Router::new(store.shared(), Dispatch::Inline, Location::parse(href).unwrap()).unwrap()
    }

    fn loc(href: &str) -> Location {
        Location::parse(href).unwrap()
    }

    #[test]
    fn test_initial_load_is_committed() {
        let router = router_at("/?q=al");
        assert_eq!(router.loader_data().sidebar.q.as_deref(), Some("al"));
        assert!(router.navigation().is_idle());
    }

    #[test]
    fn test_navigation_pending_until_poll() {
        let mut router = router_at("/");
        router.navigate(loc("/contacts/7"), NavigateOptions::default());

        let navigation = router.navigation();
        assert_eq!(navigation.state, NavigationState::Loading);
        assert_eq!(navigation.location, Some(loc("/contacts/7")));
        assert_eq!(router.location().href(), "/");

        let commit = router.poll().unwrap().unwrap();
        assert_eq!(commit.action, HistoryAction::Push);
        assert_eq!(router.location().href(), "/contacts/7");
        assert!(router.navigation().is_idle());
        assert_matches!(router.loader_data().detail, DetailData::Contact(_));
    }

    #[test]
    fn test_superseded_navigation_is_discarded() {
        let mut router = router_at("/");
        router.navigate(loc("/contacts/7"), NavigateOptions::default());
        router.navigate(loc("/contacts/8"), NavigateOptions::default());

        let commit = router.poll().unwrap().unwrap();
        assert_eq!(commit.location.href(), "/contacts/8");
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn test_push_to_same_href_replaces() {
        let mut router = router_at("/about");
        router.navigate(loc("/about"), NavigateOptions::default());
        let commit = router.poll().unwrap().unwrap();
        assert_eq!(commit.action, HistoryAction::Replace);
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn test_submit_search_targets_sidebar_path() {
        let mut router = router_at("/contacts/7");
        router
            .submit_search("bo", NavigateOptions { replace: false })
            .unwrap();
        let commit = router.poll().unwrap().unwrap();
        assert_eq!(commit.location.href(), "/?q=bo");
        assert_eq!(commit.q.as_deref(), Some("bo"));
        assert_eq!(router.loader_data().sidebar.contacts.len(), 1);
    }

    #[test]
    fn test_back_and_forward() {
        let mut router = router_at("/");
        router.navigate(loc("/contacts/7"), NavigateOptions::default());
        router.poll();

        assert!(router.back());
        let commit = router.poll().unwrap().unwrap();
        assert_eq!(commit.action, HistoryAction::Pop(-1));
        assert_eq!(router.location().href(), "/");
        assert!(router.can_go_forward());

        assert!(router.forward());
        router.poll();
        assert_eq!(router.location().href(), "/contacts/7");
        assert!(!router.forward());
    }

    #[test]
    fn test_pending_pops_accumulate() {
        let mut router = router_at("/");
        router.navigate(loc("/about"), NavigateOptions::default());
        router.poll();
        router.navigate(loc("/contacts/7"), NavigateOptions::default());
        router.poll();

        assert!(router.back());
        assert!(router.back());
        assert!(!router.can_go_back());
        assert!(!router.back());

        let commit = router.poll().unwrap().unwrap();
        assert_eq!(commit.action, HistoryAction::Pop(-2));
        assert_eq!(router.location().href(), "/");
        assert_eq!(router.history().index(), 0);
    }

    #[test]
    fn test_create_contact_pushes_detail() {
        let mut router = router_at("/?q=al");
        router.submit(Mutation::CreateContact);
        assert_eq!(router.navigation().state, NavigationState::Submitting);

        let commit = router.poll().unwrap().unwrap();
        assert_eq!(commit.action, HistoryAction::Push);
        assert!(commit.location.pathname().starts_with("/contacts/"));
        assert_matches!(router.loader_data().detail, DetailData::Contact(ref c) if c.first.is_none());
    }

    #[test]
    fn test_set_favorite_reloads_current() {
        let mut router = router_at("/contacts/8");
        router.submit(Mutation::SetFavorite {
            id: "8".to_string(),
            favorite: true,
        });
        let commit = router.poll().unwrap().unwrap();
        assert_eq!(commit.action, HistoryAction::Replace);
        assert_matches!(router.loader_data().detail, DetailData::Contact(ref c) if c.favorite);
    }

    #[test]
    fn test_failed_mutation_keeps_location() {
        let mut router = router_at("/contacts/8");
        router.submit(Mutation::SetFavorite {
            id: "404".to_string(),
            favorite: true,
        });
        assert_matches!(router.poll(), Some(Err(ContactsError::NotFound { .. })));
        assert_eq!(router.location().href(), "/contacts/8");
        assert_eq!(router.error(), Some(&ContactsError::not_found("404")));
        assert!(router.navigation().is_idle());
    }

    #[test]
    fn test_revalidate_is_not_a_navigation() {
        let mut router = router_at("/?q=al");
        router.revalidate();
        assert!(router.is_revalidating());
        assert!(router.navigation().is_idle());
        router.poll();
        assert!(!router.is_revalidating());
    }

    #[test]
    fn test_background_dispatch_commits_eventually() {
        let store = MemoryContactStore::with_seed();
        let mut router = Router::new(
            store.shared(),
            Dispatch::Background { delay: Duration::ZERO },
            loc("/"),
        )
        .unwrap();
        router.navigate(loc("/about"), NavigateOptions::default());

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        let mut commit = None;
        while commit.is_none() && std::time::Instant::now() < deadline {
            commit = router.poll().and_then(Result::ok);
            std::thread::sleep(Duration::from_millis(5));
        }
        assert_eq!(commit.map(|c| c.location.href()), Some("/about".to_string()));
    }
}
