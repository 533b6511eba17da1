//! Pagination metadata shared by every list response.

use serde::{Deserialize, Serialize};
use url::Url;

/// Link to the first page of a collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListFirstMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Link to the next page of a collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ListNextMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Opaque continuation token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

impl ListNextMetadata {
    /// Continuation token for the next page: `start` when the service sent
    /// it, otherwise the `start` query parameter of `href`.
    pub fn start_token(&self) -> Option<String> {
        if let Some(start) = self.start.as_ref().filter(|s| !s.is_empty()) {
            return Some(start.clone());
        }
        let href = self.href.as_deref()?;
        // Relative links are resolved against a placeholder base; only the
        // query string matters here.
        let url = Url::parse(href)
            .or_else(|_| Url::parse("http://localhost/").and_then(|base| base.join(href)))
            .ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "start")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty())
    }
}

/// Paging parameters accepted by every list operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOptions {
    /// Maximum number of items per page.
    pub limit: Option<i64>,
    /// Continuation token from a previous page.
    pub start: Option<String>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }
}
