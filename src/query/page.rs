//! Pagination math: page/limit normalization and total-page counts.

/// Normalized page request. `limit` is clamped to `[1, 100]`, `page` to
/// `>= 1`. A page beyond the last one is NOT clamped: the store simply
/// returns an empty slice while stats and total pages stay correct.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub page: i64,
    pub limit: i64,
}

impl Page {
    pub fn new(page: Option<i64>, limit: Option<i64>, default_limit: i64) -> Self {
        let limit = limit.unwrap_or(default_limit).clamp(1, 100);
        let page = page.unwrap_or(1).max(1);
        Self { page, limit }
    }

    /// Saturates so an absurdly large page number still yields an empty
    /// slice instead of overflowing.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// `ceil(total / limit)`, with a zero-row result still reporting one
/// (empty) page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    let pages = (total + limit - 1) / limit;
    pages.max(1)
}
