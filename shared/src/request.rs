//! List query options
//!
//! Mirrors the `page` / `size` / `sort` parameters the backend's pageable
//! endpoints accept.

use serde::{Deserialize, Serialize};

/// Sort direction for a single sort key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending { Self::Asc } else { Self::Desc }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort keys for a list query ordered by `predicate`
///
/// `id` is appended as a secondary key whenever the predicate is something
/// else, so that rows with equal predicate values keep a stable order across
/// pages.
pub fn sort_keys(predicate: &str, ascending: bool) -> Vec<String> {
    let mut keys = vec![format!("{},{}", predicate, SortOrder::from_ascending(ascending))];
    if predicate != "id" {
        keys.push("id".to_string());
    }
    keys
}

/// Query options for a pageable list endpoint
///
/// `page` is zero-based. Each `sort` entry is `field` or `field,direction`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sort: Vec<String>,
}

impl QueryOptions {
    /// Options without paging or sorting (server defaults apply)
    pub fn all() -> Self {
        Self::default()
    }

    /// Add pagination
    pub fn paginate(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    /// Replace the sort keys
    pub fn sorted_by(mut self, sort: Vec<String>) -> Self {
        self.sort = sort;
        self
    }

    /// Query-string pairs in request order, `sort` repeated once per key
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(2 + self.sort.len());
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size".to_string(), size.to_string()));
        }
        for key in &self.sort {
            pairs.push(("sort".to_string(), key.clone()));
        }
        pairs
    }
}
