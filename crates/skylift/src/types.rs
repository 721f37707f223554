//! Wire types shared by list endpoints.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by list endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Pagination {
    /// Page to retrieve, starting at 1.
    pub page: i32,
    /// Number of items per page.
    #[serde(rename = "perPage")]
    pub per_page: i32,
}

impl Pagination {
    /// Create pagination parameters for the given page and page size.
    pub fn new(page: i32, per_page: i32) -> Self {
        Self { page, per_page }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 1000,
        }
    }
}

/// Paginated reply wrapper returned by list endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ListReply<T> {
    /// Items on the current page.
    pub items: Vec<T>,
    /// Page the reply covers.
    pub current_page: Option<i32>,
    /// Total number of items across all pages.
    pub total_items: Option<i32>,
    /// Whether further pages exist.
    pub has_more_items: Option<bool>,
}

impl<T> Default for ListReply<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current_page: None,
            total_items: None,
            has_more_items: None,
        }
    }
}
