use crate::errors::{AppError, AppResult};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MIN_PAGE_SIZE: usize = 1;
pub const MAX_PAGE_SIZE: usize = 100;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Reject page sizes outside `MIN_PAGE_SIZE..=MAX_PAGE_SIZE`.
pub fn validate_page_size(size: usize) -> AppResult<usize> {
    if (MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(AppError::InvalidPageSize(size, MAX_PAGE_SIZE))
    }
}

/// 1-based page window over `total` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
    pub total: usize,
}

impl Pagination {
    /// The page is clamped into `1..=total_pages()`.
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(MIN_PAGE_SIZE);
        let mut p = Self {
            page,
            page_size,
            total,
        };
        p.page = page.clamp(1, p.total_pages());
        p
    }

    /// Always at least one page, even when empty.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size).max(1)
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn summary(&self) -> String {
        format!(
            "Page {} of {} ({} records)",
            self.page,
            self.total_pages(),
            self.total
        )
    }
}
