//! Page slicing for question listings

use serde::Deserialize;

/// Questions shown per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-indexed page over a fixed page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: usize,
    /// Items per page
    pub per_page: usize,
}

impl Pagination {
    /// Create pagination; page 0 is clamped to 1, per_page to at least 1.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Slice `items` to this page. Pages past the end are empty.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: QUESTIONS_PER_PAGE,
        }
    }
}

/// `?page=N` query parameters.
///
/// Kept as a raw string so a non-numeric page falls back to page 1 instead of
/// rejecting the request. An all-digit page too large for `usize` saturates,
/// so it still lands past the end.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for Pagination {
    fn from(params: PageParams) -> Self {
        let page = params
            .page
            .and_then(|p| parse_page(p.trim()))
            .unwrap_or(1);
        Self::new(page, QUESTIONS_PER_PAGE)
    }
}

fn parse_page(raw: &str) -> Option<usize> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(raw.parse().unwrap_or(usize::MAX))
}

/// Slice `items` to the given 1-based page of `QUESTIONS_PER_PAGE` items.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    Pagination::new(page, QUESTIONS_PER_PAGE).slice(items)
}
