//! Location Type
//!
//! A `Location` is the in-app equivalent of a browser URL: a pathname plus a
//! raw search string. Parsing and query encoding go through the `url` crate
//! against a fixed base so relative hrefs like `/contacts/7?q=al` resolve the
//! same way a browser would resolve them.

use std::fmt;

use url::{form_urlencoded, Url};

use super::error::Result;

/// Base every in-app href is resolved against
const BASE_URL: &str = "http://contacts.local/";

/// Query parameter that carries the search text
pub const SEARCH_PARAM: &str = "q";

/// A pathname and search string pair
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pathname: String,
    /// Either empty or starting with `?`
    search: String,
}

impl Location {
    /// Parse an href (absolute path, optionally with a search string)
    pub fn parse(href: &str) -> Result<Self> {
        let url = Url::parse(BASE_URL)?.join(href)?;
        Ok(Self::from_url(&url))
    }

    /// Location for a request URL
    pub fn from_url(url: &Url) -> Self {
        let search = match url.query() {
            Some(query) => format!("?{}", query),
            None => String::new(),
        };
        Self {
            pathname: url.path().to_string(),
            search,
        }
    }

    /// Location with no search string
    pub fn path(pathname: &str) -> Result<Self> {
        let mut url = Url::parse(BASE_URL)?.join(pathname)?;
        url.set_query(None);
        Ok(Self::from_url(&url))
    }

    /// Location carrying `q` as its only parameter (`?q=` for an empty string)
    pub fn with_query(pathname: &str, q: &str) -> Result<Self> {
        let mut url = Url::parse(BASE_URL)?.join(pathname)?;
        url.set_query(None);
        url.query_pairs_mut().append_pair(SEARCH_PARAM, q);
        Ok(Self::from_url(&url))
    }

    /// Absolute request URL for this location
    pub fn to_url(&self) -> Result<Url> {
        Ok(Url::parse(BASE_URL)?.join(&self.href())?)
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Pathname plus search string
    pub fn href(&self) -> String {
        format!("{}{}", self.pathname, self.search)
    }

    /// First value of `name` in the search string
    pub fn param(&self, name: &str) -> Option<String> {
        form_urlencoded::parse(self.search.trim_start_matches('?').as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Whether `name` appears in the search string at all
    pub fn has_param(&self, name: &str) -> bool {
        form_urlencoded::parse(self.search.trim_start_matches('?').as_bytes())
            .any(|(key, _)| key == name)
    }

    /// The committed search text, `None` when no `q` is present
    pub fn q(&self) -> Option<String> {
        self.param(SEARCH_PARAM)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.pathname, self.search)
    }
}
