//! Page arithmetic for list views.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

/// Position of one page within a result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub page: u32,
    pub total_pages: u32,
    /// 1-based index of the first visible row, 0 when empty.
    pub from: u64,
    /// 1-based index of the last visible row, 0 when empty.
    pub to: u64,
}

impl PageWindow {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// `max(1, ceil(total / size))`. A zero size is treated as one.
pub fn total_pages(total: u64, size: u32) -> u32 {
    let size = u64::from(size.max(1));
    u32::try_from(total.div_ceil(size)).unwrap_or(u32::MAX).max(1)
}

/// Clamp `page` into range and compute the visible row span.
pub fn page_window(page: u32, size: u32, total: u64) -> PageWindow {
    let total_pages = total_pages(total, size);
    let page = page.clamp(1, total_pages);
    if total == 0 {
        return PageWindow { page, total_pages, from: 0, to: 0 };
    }
    let size = u64::from(size.max(1));
    let from = u64::from(page - 1) * size + 1;
    let to = (u64::from(page) * size).min(total);
    PageWindow { page, total_pages, from, to }
}
