//! Pagination DTOs - page window requests and paged results

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PAGE_NUMBER: i64 = 1;
pub const DEFAULT_DOCS_PER_PAGE: i64 = 10;

/// Largest skip the store accepts, offsets are encoded as signed 64-bit integers
pub const MAX_OFFSET: u64 = i64::MAX as u64;

pub(crate) fn default_page_number() -> i64 {
    DEFAULT_PAGE_NUMBER
}

pub(crate) fn default_docs_per_page() -> i64 {
    DEFAULT_DOCS_PER_PAGE
}

/// Requested page window, page numbers are 1-based
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Validate)]
pub struct PaginationRequest {
    #[serde(default = "default_page_number")]
    pub page_number: i64,
    #[serde(default = "default_docs_per_page")]
    #[validate(range(min = 1, message = "docs_per_page must be at least 1"))]
    pub docs_per_page: i64,
}

impl Default for PaginationRequest {
    fn default() -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            docs_per_page: DEFAULT_DOCS_PER_PAGE,
        }
    }
}

impl PaginationRequest {
    pub fn new(page_number: i64, docs_per_page: i64) -> Self {
        Self {
            page_number,
            docs_per_page,
        }
    }

    /// Page actually served: zero and negative page numbers are clamped to the first page
    pub fn page(&self) -> u64 {
        self.page_number.max(1) as u64
    }

    pub fn limit(&self) -> u64 {
        self.docs_per_page.max(1) as u64
    }

    /// Number of documents to skip, never negative and bounded by what the store can encode
    pub fn skip(&self) -> u64 {
        (self.page() - 1)
            .saturating_mul(self.limit())
            .min(MAX_OFFSET)
    }
}

/// One page of results with the metadata of the whole match set
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub page_number: u64,
    pub docs_per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub items: Vec<T>,
}

/// Packages an already windowed batch; the caller is responsible for applying skip/limit
pub fn paginate<T>(
    page_number: u64,
    docs_per_page: u64,
    total_items: u64,
    items: Vec<T>,
) -> PageResult<T> {
    let total_pages = if docs_per_page == 0 {
        0
    } else {
        total_items.div_ceil(docs_per_page)
    };
    PageResult {
        page_number,
        docs_per_page,
        total_items,
        total_pages,
        items,
    }
}
