//! Pagination request and response envelope.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Page size used when the query string omits one.
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Upper bound on the page size a client may request.
pub const MAX_PAGE_SIZE: u64 = 100;

/// Zero-based page index and size, taken from the query string.
#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
pub struct PageRequest {
    /// Zero-based page index.
    #[serde(default)]
    pub page: u64,
    /// Requested rows per page.
    #[serde(default = "default_size")]
    pub size: u64,
}

fn default_size() -> u64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Effective page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn capped_size(&self) -> u64 {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }

    /// SQL LIMIT for this page.
    pub fn limit(&self) -> i64 {
        self.capped_size() as i64
    }

    /// SQL OFFSET for this page.
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.capped_size()) as i64
    }
}

/// One page of results plus paging metadata.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub size: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Builds a page from fetched rows and the total active-row count.
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        let size = request.capped_size();
        Self {
            items,
            page: request.page,
            size,
            total_items,
            total_pages: total_items.div_ceil(size),
        }
    }

    /// An empty page for the given request.
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Maps the items, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}
