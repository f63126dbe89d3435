//! Route Loaders
//!
//! Loaders fetch everything a location needs before it is rendered. The
//! sidebar loader runs for every location; the detail loader depends on which
//! route the pathname matches.

use url::Url;

use crate::egui_app::data::ContactSource;
use crate::shared::{Contact, Location, Result, SEARCH_PARAM};

/// Pathname the search form submits to
pub const SIDEBAR_PATH: &str = "/";

/// Route matched from a pathname
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Contact(String),
    NotFound,
}

impl Route {
    pub fn matching(pathname: &str) -> Self {
        match pathname {
            "/" | "" => Route::Home,
            "/about" => Route::About,
            _ => match pathname.strip_prefix("/contacts/") {
                Some(id) if !id.is_empty() && !id.contains('/') => Route::Contact(id.to_string()),
                _ => Route::NotFound,
            },
        }
    }
}

/// What the sidebar renders: the filtered list and the committed query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SidebarData {
    pub contacts: Vec<Contact>,
    /// Raw `q` from the request, `None` when absent
    pub q: Option<String>,
}

/// What the detail pane renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailData {
    Home,
    About,
    Contact(Contact),
    /// Unknown path or contact id
    NotFound(String),
}

/// Everything loaded for one location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteData {
    pub sidebar: SidebarData,
    pub detail: DetailData,
}

/// Read `q` from the request URL and fetch the matching contacts
pub fn sidebar_loader(source: &dyn ContactSource, request: &Url) -> Result<SidebarData> {
    let q = request
        .query_pairs()
        .find(|(key, _)| key == SEARCH_PARAM)
        .map(|(_, value)| value.into_owned());
    let contacts = source.get_contacts(q.as_deref())?;
    Ok(SidebarData { contacts, q })
}

/// Fetch the detail pane content for a matched route
pub fn detail_loader(source: &dyn ContactSource, route: &Route, pathname: &str) -> Result<DetailData> {
    Ok(match route {
        Route::Home => DetailData::Home,
        Route::About => DetailData::About,
        Route::Contact(id) => match source.get_contact(id)? {
            Some(contact) => DetailData::Contact(contact),
            None => DetailData::NotFound(format!("No contact with id \"{}\"", id)),
        },
        Route::NotFound => DetailData::NotFound(format!("Nothing lives at {}", pathname)),
    })
}

/// Run every loader for `location`
pub fn load_route(source: &dyn ContactSource, location: &Location) -> Result<RouteData> {
    let request = location.to_url()?;
    let sidebar = sidebar_loader(source, &request)?;
    let route = Route::matching(location.pathname());
    let detail = detail_loader(source, &route, location.pathname())?;
    Ok(RouteData { sidebar, detail })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::data::MemoryContactStore;
    use assert_matches::assert_matches;

    fn store() -> MemoryContactStore {
        MemoryContactStore::from_contacts(vec![
            Contact::new("7", "Alice", "Liddell"),
            Contact::new("8", "Bob", "Builder"),
        ])
    }

    #[test]
    fn test_route_matching() {
        assert_eq!(Route::matching("/"), Route::Home);
        assert_eq!(Route::matching("/about"), Route::About);
        assert_eq!(Route::matching("/contacts/7"), Route::Contact("7".to_string()));
        assert_eq!(Route::matching("/contacts/"), Route::NotFound);
        assert_eq!(Route::matching("/contacts/7/edit"), Route::NotFound);
        assert_eq!(Route::matching("/nope"), Route::NotFound);
    }

    #[test]
    fn test_sidebar_loader_without_q() {
        let url = Url::parse("http://contacts.local/").unwrap();
        let data = sidebar_loader(&store(), &url).unwrap();
        assert_eq!(data.q, None);
        assert_eq!(data.contacts.len(), 2);
    }

    #[test]
    fn test_sidebar_loader_with_q() {
        let url = Url::parse("http://contacts.local/?q=al").unwrap();
        let data = sidebar_loader(&store(), &url).unwrap();
        assert_eq!(data.q.as_deref(), Some("al"));
        assert_eq!(data.contacts.len(), 1);
        assert_eq!(data.contacts[0].id, "7");
    }

    #[test]
    fn test_sidebar_loader_keeps_empty_q() {
        let url = Url::parse("http://contacts.local/?q=").unwrap();
        let data = sidebar_loader(&store(), &url).unwrap();
        assert_eq!(data.q.as_deref(), Some(""));
        assert_eq!(data.contacts.len(), 2);
    }

    #[test]
    fn test_load_route_contact_detail() {
        let location = Location::parse("/contacts/7?q=al").unwrap();
        let data = load_route(&store(), &location).unwrap();
        assert_matches!(data.detail, DetailData::Contact(ref c) if c.id == "7");
        assert_eq!(data.sidebar.q.as_deref(), Some("al"));
    }

    #[test]
    fn test_load_route_unknown_contact() {
        let location = Location::parse("/contacts/404").unwrap();
        let data = load_route(&store(), &location).unwrap();
        assert_matches!(data.detail, DetailData::NotFound(_));
    }
}
