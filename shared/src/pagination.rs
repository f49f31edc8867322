//! Pagination metadata
//!
//! Pageable list endpoints describe the neighbouring pages in an RFC 5988
//! `link` header:
//!
//! ```text
//! <http://host/api/employees?page=1&size=20>; rel="next",
//! <http://host/api/employees?page=4&size=20>; rel="last"
//! ```
//!
//! [`parse_links`] turns that into a `rel -> page` map.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Relation name (`first`, `prev`, `next`, `last`) to zero-based page number
pub type PageLinks = HashMap<String, u32>;

/// Header name carrying the pagination links
pub const LINK_HEADER: &str = "link";

/// Header name carrying the total element count
pub const TOTAL_COUNT_HEADER: &str = "x-total-count";

// Link targets are usually absolute, but relative ones are resolved against
// this placeholder so the query string can still be read.
const RELATIVE_BASE: &str = "http://localhost/";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkParseError {
    #[error("link header must not be empty")]
    Empty,

    #[error("link section could not be split on ';': {0}")]
    MalformedSection(String),

    #[error("invalid link target: {0}")]
    InvalidUrl(String),
}

/// Parse a `link` header into a relation to page map
///
/// A section whose target has no numeric `page` parameter is skipped.
pub fn parse_links(header: &str) -> Result<PageLinks, LinkParseError> {
    if header.trim().is_empty() {
        return Err(LinkParseError::Empty);
    }

    let base = Url::parse(RELATIVE_BASE).map_err(|e| LinkParseError::InvalidUrl(e.to_string()))?;
    let mut links = PageLinks::new();

    for part in header.split(',') {
        let mut section = part.split(';');
        let (Some(target), Some(rel), None) = (section.next(), section.next(), section.next())
        else {
            return Err(LinkParseError::MalformedSection(part.trim().to_string()));
        };

        let target = target
            .trim()
            .trim_start_matches('<')
            .trim_end_matches('>');
        let url = base
            .join(target)
            .map_err(|_| LinkParseError::InvalidUrl(target.to_string()))?;

        let name = rel
            .trim()
            .trim_start_matches("rel=")
            .trim_matches('"')
            .to_string();

        let page = url
            .query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse::<u32>().ok());

        if let Some(page) = page {
            links.insert(name, page);
        }
    }

    Ok(links)
}

/// One page of a pageable list response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub links: PageLinks,
    /// Value of `X-Total-Count`, when the backend sent it
    pub total_count: Option<u64>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, links: PageLinks, total_count: Option<u64>) -> Self {
        Self {
            items,
            links,
            total_count,
        }
    }

    /// Page without neighbours (unpaginated endpoints)
    pub fn single(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        Self {
            items,
            links: PageLinks::new(),
            total_count: Some(total),
        }
    }

    /// Page number of the `last` relation, 0 when unknown
    pub fn last_page(&self) -> u32 {
        self.links.get("last").copied().unwrap_or(0)
    }

    pub fn has_next(&self) -> bool {
        self.links.contains_key("next")
    }
}
