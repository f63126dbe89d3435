//! # Contact Store
//!
//! The data collaborator behind the sidebar. Route loaders only see the
//! [`ContactSource`] trait; the app ships an in-memory implementation that can
//! be seeded from a JSON file.
//!
//! ## Features
//!
//! - **Search**: case-insensitive substring match on first or last name
//! - **Ordering**: by last name, then by creation time
//! - **Mutations**: create an empty contact, toggle the favorite flag
//!
//! ## Usage
//!
//! ```rust
//! use xfcontacts::egui_app::data::{ContactSource, MemoryContactStore};
//!
//! let store = MemoryContactStore::with_seed();
//! let all = store.get_contacts(None).unwrap();
//! let some = store.get_contacts(Some("al")).unwrap();
//! assert!(some.len() <= all.len());
//! ```

mod seed;

use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::shared::{Contact, ContactsError, Result};

pub use seed::seed_contacts;

/// Shared handle loaders run against
pub type SharedSource = Arc<dyn ContactSource>;

/// Read/write access to the contact collection
pub trait ContactSource: Send + Sync {
    /// Contacts matching `query`, or all contacts when it is `None` or empty
    fn get_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>>;

    /// A single contact by id
    fn get_contact(&self, id: &str) -> Result<Option<Contact>>;

    /// Insert an empty contact and return it
    fn create_contact(&self) -> Result<Contact>;

    /// Set the favorite flag and return the updated contact
    fn set_favorite(&self, id: &str, favorite: bool) -> Result<Contact>;
}

/// In-memory contact store
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    contacts: RwLock<Vec<Contact>>,
}

impl MemoryContactStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `contacts`
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts: RwLock::new(contacts),
        }
    }

    /// Create a store holding the built-in sample contacts
    pub fn with_seed() -> Self {
        Self::from_contacts(seed_contacts())
    }

    /// Create a store from a JSON array of contacts
    pub fn from_json_str(json: &str) -> Result<Self> {
        let contacts: Vec<Contact> = serde_json::from_str(json)?;
        Ok(Self::from_contacts(contacts))
    }

    /// Create a store from a JSON seed file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&json)?;
        tracing::info!("[STORE] Seeded from {}", path.display());
        Ok(store)
    }

    /// Convert into a shared handle for the router
    pub fn shared(self) -> SharedSource {
        Arc::new(self)
    }
}

fn poisoned<T>(_: T) -> ContactsError {
    ContactsError::store("contact store lock poisoned")
}

impl ContactSource for MemoryContactStore {
    fn get_contacts(&self, query: Option<&str>) -> Result<Vec<Contact>> {
        let contacts = self.contacts.read().map_err(poisoned)?;

        let needle = query.map(|q| q.trim().to_lowercase()).unwrap_or_default();
        let mut matched: Vec<Contact> = if needle.is_empty() {
            contacts.clone()
        } else {
            contacts.iter().filter(|c| c.matches(&needle)).cloned().collect()
        };

        matched.sort_by(|a, b| {
            let a_last = a.last.as_deref().unwrap_or_default();
            let b_last = b.last.as_deref().unwrap_or_default();
            a_last
                .cmp(b_last)
                .then_with(|| a.created_at.cmp(&b.created_at))
        });

        tracing::debug!(
            "[STORE] get_contacts({:?}) -> {} of {}",
            query,
            matched.len(),
            contacts.len()
        );
        Ok(matched)
    }

    fn get_contact(&self, id: &str) -> Result<Option<Contact>> {
        let contacts = self.contacts.read().map_err(poisoned)?;
        Ok(contacts.iter().find(|c| c.id == id).cloned())
    }

    fn create_contact(&self) -> Result<Contact> {
        let contact = Contact::empty();
        let mut contacts = self.contacts.write().map_err(poisoned)?;
        contacts.insert(0, contact.clone());
        tracing::info!("[STORE] Created contact {}", contact.id);
        Ok(contact)
    }

    fn set_favorite(&self, id: &str, favorite: bool) -> Result<Contact> {
        let mut contacts = self.contacts.write().map_err(poisoned)?;
        let contact = contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ContactsError::not_found(id))?;
        contact.favorite = favorite;
        Ok(contact.clone())
    }
}
