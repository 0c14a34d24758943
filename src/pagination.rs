use serde::Serialize;

use crate::DEFAULT_ITEMS_PER_PAGE;

/// Maximum number of consecutive page numbers shown around the current page.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Number of pages needed to show `total` items, `per_page` at a time.
pub fn total_pages(total: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    total.div_ceil(per_page)
}

/// Page numbers for a pager: a window of up to [`MAX_VISIBLE_PAGES`] around
/// the current page plus the first and last page. `None` marks a gap.
pub fn page_window(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return vec![];
    }

    let mut start = current_page.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
    if end + 1 - start < MAX_VISIBLE_PAGES {
        start = (end + 1).saturating_sub(MAX_VISIBLE_PAGES).max(1);
    }

    let mut pages = Vec::new();

    if start > 1 {
        pages.push(Some(1));
        if start > 2 {
            pages.push(None);
        }
    }
    pages.extend((start..=end).map(Some));

    if end < total_pages {
        if end + 1 < total_pages {
            pages.push(None);
        }
        pages.push(Some(total_pages));
    }

    pages
}

/// 1-indexed display bounds of the current page, e.g. "Showing 11-20 of 42".
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct PaginationSummary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl PaginationSummary {
    pub fn new(total: usize, current_page: usize, per_page: usize) -> Self {
        if total == 0 || per_page == 0 {
            return Self::default();
        }
        let page = current_page.max(1);
        Self {
            start: (page - 1) * per_page + 1,
            end: (page * per_page).min(total),
            total,
        }
    }
}

/// Current page of items together with everything a pager needs to render.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub summary: PaginationSummary,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total: usize, per_page: usize) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };
        let per_page = if per_page == 0 {
            DEFAULT_ITEMS_PER_PAGE
        } else {
            per_page
        };
        let total_pages = total_pages(total, per_page);

        Self {
            items,
            pages: page_window(total_pages, current_page),
            page: current_page,
            total_pages,
            summary: PaginationSummary::new(total, current_page, per_page),
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}
