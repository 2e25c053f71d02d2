//! Page arithmetic for the projects table.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
            total: 0,
        }
    }

    /// Resets to the first page for a freshly loaded collection.
    pub fn reset(&mut self, total: usize) {
        self.total = total;
        self.page = 0;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Indices of the rows on the current page.
    pub fn range(&self) -> Range<usize> {
        let start = (self.page * self.page_size).min(self.total);
        let end = (start + self.page_size).min(self.total);
        start..end
    }

    /// Rows on the current page, for "Showing N of M entries".
    pub fn showing(&self) -> usize {
        self.range().len()
    }

    /// Jumps to `page`, clamped to the last page. Returns true if it moved.
    pub fn go_to(&mut self, page: usize) -> bool {
        let target = page.min(self.page_count().saturating_sub(1));
        let moved = target != self.page;
        self.page = target;
        moved
    }

    pub fn next(&mut self) -> bool {
        self.go_to(self.page + 1)
    }

    pub fn prev(&mut self) -> bool {
        self.go_to(self.page.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        let mut p = Pagination::new(9);
        assert_eq!(p.page_count(), 0);
        p.reset(9);
        assert_eq!(p.page_count(), 1);
        p.reset(10);
        assert_eq!(p.page_count(), 2);
        p.reset(27);
        assert_eq!(p.page_count(), 3);
    }

    #[test]
    fn test_last_page_is_partial() {
        let mut p = Pagination::new(9);
        p.reset(20);
        assert_eq!(p.range(), 0..9);
        assert!(p.next());
        assert!(p.next());
        assert_eq!(p.range(), 18..20);
        assert_eq!(p.showing(), 2);
        assert!(!p.next());
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn test_prev_clamps_at_first_page() {
        let mut p = Pagination::new(9);
        p.reset(5);
        assert!(!p.prev());
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn test_empty_collection() {
        let p = Pagination::new(9);
        assert_eq!(p.range(), 0..0);
        assert_eq!(p.showing(), 0);
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut p = Pagination::new(2);
        p.reset(6);
        p.go_to(2);
        p.reset(6);
        assert_eq!(p.page(), 0);
    }
}
