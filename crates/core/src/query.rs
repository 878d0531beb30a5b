//! Search and pagination value objects handed across the persistence boundary.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Error};

/// Default page size when the caller does not ask for one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Default sort field.
pub const DEFAULT_SORT: &str = "name";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortDirection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(DomainError::from_error(Error::new(format!(
                "'direction' must be one of: asc, desc (got '{s}')"
            )))),
        }
    }
}

/// Listing request: which page, how big, what to match and how to order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Zero-based page index.
    pub page: u32,
    pub per_page: u32,
    /// Free-text filter; empty matches everything.
    pub terms: String,
    pub sort: String,
    pub direction: SortDirection,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            page: 0,
            per_page: DEFAULT_PER_PAGE,
            terms: String::new(),
            sort: DEFAULT_SORT.to_string(),
            direction: SortDirection::Asc,
        }
    }
}

impl SearchQuery {
    pub fn new(
        page: Option<u32>,
        per_page: Option<u32>,
        terms: Option<String>,
        sort: Option<String>,
        direction: Option<SortDirection>,
    ) -> Self {
        Self {
            page: page.unwrap_or(0),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
            terms: terms.unwrap_or_default(),
            sort: sort
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SORT.to_string()),
            direction: direction.unwrap_or_default(),
        }
    }

    /// Cap `per_page` at `max`; a zero page size falls back to the default.
    pub fn clamped(mut self, max: u32) -> Self {
        if self.per_page == 0 {
            self.per_page = DEFAULT_PER_PAGE;
        }
        self.per_page = self.per_page.min(max.max(1));
        self
    }

    /// Number of items to skip before this page starts.
    pub fn offset(&self) -> usize {
        self.page as usize * self.per_page as usize
    }
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination<T> {
    pub current_page: u32,
    pub per_page: u32,
    /// Number of matching items across all pages.
    pub total: u64,
    pub items: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(current_page: u32, per_page: u32, total: u64, items: Vec<T>) -> Self {
        Self {
            current_page,
            per_page,
            total,
            items,
        }
    }

    /// Transform the items, keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Pagination<U> {
        Pagination {
            current_page: self.current_page,
            per_page: self.per_page,
            total: self.total,
            items: self.items.into_iter().map(f).collect(),
        }
    }

    pub fn has_more(&self) -> bool {
        (self.current_page as u64 + 1) * (self.per_page as u64) < self.total
    }
}
