//! Central application state shared across egui views.
//!
//! Views never mutate the router or the search box directly. They return
//! [`SidebarAction`]s which are applied after the frame is laid out, and
//! [`AppState::tick`] runs once per frame to commit finished navigations and
//! reconcile the search box.

use crate::egui_app::config::Config;
use crate::egui_app::contacts::indicators::LoadingIndicators;
use crate::egui_app::contacts::search_sync::{SearchPhase, SearchSync};
use crate::egui_app::data::{MemoryContactStore, SharedSource};
use crate::egui_app::router::{Commit, Dispatch, Mutation, NavigateOptions, Router};
use crate::shared::{Location, Result};

/// Everything a view can ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    /// The search field now holds this text
    SearchEdited(String),
    /// Clear button
    ClearSearch,
    /// Follow a link
    Open(Location),
    /// "New" button
    NewContact,
    /// Star toggle in the detail pane
    SetFavorite { id: String, favorite: bool },
    Back,
    Forward,
    /// Error boundary retry
    Retry,
}

pub struct AppState {
    pub config: Config,
    pub router: Router,
    pub search: SearchSync,
}

impl AppState {
    /// Build the store and router described by `config`
    pub fn new(config: Config) -> Result<Self> {
        let store = match config.seed_path() {
            Some(path) => MemoryContactStore::from_json_path(path)?,
            None => MemoryContactStore::with_seed(),
        };
        let dispatch = Dispatch::Background {
            delay: config.loader_delay(),
        };
        Self::with_source(config, store.shared(), dispatch)
    }

    /// Build around an existing contact source
    pub fn with_source(config: Config, source: SharedSource, dispatch: Dispatch) -> Result<Self> {
        let initial = Location::parse(config.initial_url())?;
        let router = Router::new(source, dispatch, initial)?;
        let search = SearchSync::new(router.loader_data().sidebar.q.clone());
        Ok(Self {
            config,
            router,
            search,
        })
    }

    /// Settle a finished navigation, then run the search binding rule.
    ///
    /// A failed navigation keeps the committed data, so the search box is
    /// reconciled against the `q` that is still committed.
    pub fn tick(&mut self) -> Option<Commit> {
        match self.router.poll()? {
            Ok(commit) => {
                self.search.reconcile(commit.q.as_deref());
                Some(commit)
            }
            Err(err) => {
                tracing::debug!("[SEARCH] Reconciling after failed navigation: {}", err);
                let committed = self.router.loader_data().sidebar.q.clone();
                self.search.reconcile(committed.as_deref());
                None
            }
        }
    }

    pub fn apply(&mut self, action: SidebarAction) -> Result<()> {
        match action {
            SidebarAction::SearchEdited(text) => {
                if let Some(submission) = self.search.edit(text) {
                    let target = self.router.submit_search(
                        &submission.q,
                        NavigateOptions {
                            replace: submission.replace,
                        },
                    )?;
                    self.search.mark_submitted(target);
                }
            }
            SidebarAction::ClearSearch => {
                let clear = self.search.clear(self.router.location())?;
                self.router.navigate(
                    clear.to,
                    NavigateOptions {
                        replace: clear.replace,
                    },
                );
            }
            SidebarAction::Open(location) => {
                self.router.navigate(location, NavigateOptions::default());
            }
            SidebarAction::NewContact => self.router.submit(Mutation::CreateContact),
            SidebarAction::SetFavorite { id, favorite } => {
                self.router.submit(Mutation::SetFavorite { id, favorite })
            }
            SidebarAction::Back => {
                self.router.back();
            }
            SidebarAction::Forward => {
                self.router.forward();
            }
            SidebarAction::Retry => self.router.revalidate(),
        }
        Ok(())
    }

    pub fn indicators(&self) -> LoadingIndicators {
        LoadingIndicators::derive(self.router.location(), &self.router.navigation())
    }

    pub fn search_phase(&self) -> SearchPhase {
        self.search.phase(&self.router.navigation())
    }
}
