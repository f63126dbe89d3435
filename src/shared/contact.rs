//! Contact Data Structure
//!
//! Represents one entry of the address book. The sidebar only reads contacts;
//! they are owned by the store in `egui_app::data`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a contact in the address book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique contact ID, used in `/contacts/{id}`
    pub id: String,
    /// Optional first name
    #[serde(default)]
    pub first: Option<String>,
    /// Optional last name
    #[serde(default)]
    pub last: Option<String>,
    /// Whether the contact is starred
    #[serde(default)]
    pub favorite: bool,
    /// Optional avatar URL
    #[serde(default)]
    pub avatar: Option<String>,
    /// Optional twitter handle
    #[serde(default)]
    pub twitter: Option<String>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// When the contact was added
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Create a named contact with a fixed id
    pub fn new(id: impl Into<String>, first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            first: Some(first.into()),
            last: Some(last.into()),
            ..Self::empty_with_id(String::new())
        }
    }

    /// Create an empty contact with a freshly generated id
    pub fn empty() -> Self {
        let id = Uuid::new_v4().simple().to_string();
        Self::empty_with_id(id[..8].to_string())
    }

    fn empty_with_id(id: String) -> Self {
        Self {
            id,
            first: None,
            last: None,
            favorite: false,
            avatar: None,
            twitter: None,
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// Builder-style favorite flag
    pub fn with_favorite(mut self, favorite: bool) -> Self {
        self.favorite = favorite;
        self
    }

    /// "First Last" when at least one name part is set, `None` otherwise
    pub fn display_name(&self) -> Option<String> {
        let first = self.first.as_deref().unwrap_or_default();
        let last = self.last.as_deref().unwrap_or_default();
        if first.is_empty() && last.is_empty() {
            return None;
        }
        Some(format!("{} {}", first, last).trim().to_string())
    }

    /// Detail path for this contact, without search string
    pub fn path(&self) -> String {
        format!("/contacts/{}", self.id)
    }

    /// Case-insensitive substring match on first or last name.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .any(|part| part.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_both_parts() {
        let contact = Contact::new("1", "Ada", "Lovelace");
        assert_eq!(contact.display_name().as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_display_name_single_part() {
        let mut contact = Contact::empty();
        contact.last = Some("Hopper".to_string());
        assert_eq!(contact.display_name().as_deref(), Some("Hopper"));
    }

    #[test]
    fn test_display_name_empty_strings_count_as_missing() {
        let mut contact = Contact::empty();
        contact.first = Some(String::new());
        assert_eq!(contact.display_name(), None);
    }

    #[test]
    fn test_empty_ids_are_unique() {
        assert_ne!(Contact::empty().id, Contact::empty().id);
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let contact = Contact::new("1", "Alice", "Smith");
        assert!(contact.matches("al"));
        assert!(contact.matches("smi"));
        assert!(!contact.matches("bob"));
    }

    #[test]
    fn test_deserialize_minimal_contact() {
        let contact: Contact = serde_json::from_str(r#"{"id":"7"}"#).unwrap();
        assert_eq!(contact.id, "7");
        assert!(!contact.favorite);
        assert_eq!(contact.path(), "/contacts/7");
    }
}
