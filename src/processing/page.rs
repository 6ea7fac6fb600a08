use serde::Serialize;

use crate::error::QueryError;
use crate::types::{RowsRef, Table};

/// Page number used when the caller omits one.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the caller omits one.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Largest accepted page size.
pub const MAX_PAGE_SIZE: usize = 1000;

/// A validated pagination request (`page >= 1`, `1 <= page_size <= MAX_PAGE_SIZE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    page_size: usize,
}

impl PageRequest {
    /// Validate a 1-based page number and a page size.
    pub fn new(page: usize, page_size: usize) -> Result<Self, QueryError> {
        if page < 1 {
            return Err(QueryError::InvalidPageRequest {
                message: format!("page must be >= 1, got {page}"),
            });
        }
        if !(1..=MAX_PAGE_SIZE).contains(&page_size) {
            return Err(QueryError::InvalidPageRequest {
                message: format!(
                    "page_size must be between 1 and {MAX_PAGE_SIZE}, got {page_size}"
                ),
            });
        }
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index of the first row on this page. Saturates instead of overflowing.
    pub fn start_index(&self) -> usize {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One page of rows plus pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page<'a> {
    pub page: usize,
    pub page_size: usize,
    pub total_records: usize,
    pub total_pages: usize,
    pub data: RowsRef<'a>,
}

/// Slice `table` according to `req`.
///
/// Returns [`QueryError::PageOutOfRange`] if the page starts at or past the last row.
pub fn paginate(table: &Table, req: PageRequest) -> Result<Page<'_>, QueryError> {
    let total_records = table.row_count();
    let start = req.start_index();
    if start >= total_records {
        return Err(QueryError::PageOutOfRange);
    }
    let end = start.saturating_add(req.page_size);

    Ok(Page {
        page: req.page,
        page_size: req.page_size,
        total_records,
        total_pages: total_pages(total_records, req.page_size),
        data: table.slice(start, end),
    })
}

fn total_pages(total_records: usize, page_size: usize) -> usize {
    total_records / page_size + usize::from(total_records % page_size != 0)
}
