//! Address-bar input handling
//!
//! Everything typed into the address bar goes through [`resolve`]:
//! - [`classify`]: decide whether the text is a URL or search terms
//! - [`normalize`]: give a URL an explicit scheme
//! - [`encode_query`]: turn search terms into a search engine URL
//!
//! None of these functions can fail or perform I/O.

pub mod classify;
pub mod normalize;
pub mod query;

pub use classify::{InputKind, classify, has_web_scheme};
pub use normalize::normalize;
pub use query::{SEARCH_ENDPOINT, encode_query};

use serde::Serialize;
use std::fmt;

/// A fully-qualified URL ready to be handed to a navigator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NavigationTarget(String);

impl NavigationTarget {
    /// Wrap a stored URL as-is, without classification or normalization
    pub fn verbatim(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NavigationTarget {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Whether free text may fall back to a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolveMode {
    /// Classify input and search when it does not look like an address
    #[default]
    Classify,
    /// Treat every input as an address and only add a scheme
    AlwaysUrl,
}

/// Resolve raw address-bar input into a navigation target.
///
/// Returns `None` for empty or whitespace-only input.
pub fn resolve(raw: &str) -> Option<NavigationTarget> {
    resolve_with(raw, ResolveMode::Classify)
}

/// Resolve raw input using an explicit [`ResolveMode`]
pub fn resolve_with(raw: &str, mode: ResolveMode) -> Option<NavigationTarget> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }

    let kind = match mode {
        ResolveMode::Classify => classify(input),
        ResolveMode::AlwaysUrl => InputKind::UrlLike,
    };
    log::debug!("Classified {:?} as {:?}", input, kind);

    let url = match kind {
        InputKind::UrlLike => normalize(input),
        InputKind::SearchLike => encode_query(input),
    };

    Some(NavigationTarget(url))
}
