//! Page-window math shared by all menus.

/// One page of a list: `start..end` indexes into the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Effective page after clamping.
    pub page: u32,
    pub start: usize,
    pub end: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageWindow {
    /// Window for `requested` page over `total` items. Pages past the end clamp to the last page;
    /// an empty list has a single empty page.
    pub fn new(total: usize, page_size: usize, requested: u32) -> Self {
        let page_size = page_size.max(1);
        let last_page = total.saturating_sub(1) / page_size;
        let page = (requested as usize).min(last_page);
        let start = page * page_size;
        let end = (start + page_size).min(total);
        Self {
            page: page as u32,
            start,
            end,
            has_previous: page > 0,
            has_next: end < total,
        }
    }

    /// Page that contains item `index`.
    pub fn page_of(index: usize, page_size: usize) -> u32 {
        (index / page_size.max(1)) as u32
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_middle_last_pages() {
        let first = PageWindow::new(30, 12, 0);
        assert_eq!((first.start, first.end), (0, 12));
        assert!(!first.has_previous && first.has_next);

        let middle = PageWindow::new(30, 12, 1);
        assert_eq!((middle.start, middle.end), (12, 24));
        assert!(middle.has_previous && middle.has_next);

        let last = PageWindow::new(30, 12, 2);
        assert_eq!((last.start, last.end), (24, 30));
        assert!(last.has_previous && !last.has_next);
        assert_eq!(last.len(), 6);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_page() {
        let second = PageWindow::new(12, 6, 1);
        assert_eq!((second.start, second.end), (6, 12));
        assert!(!second.has_next);
        assert_eq!(PageWindow::new(12, 6, 2), second);
    }

    #[test]
    fn test_out_of_range_page_clamps() {
        let clamped = PageWindow::new(5, 2, 40);
        assert_eq!(clamped.page, 2);
        assert_eq!((clamped.start, clamped.end), (4, 5));

        let empty = PageWindow::new(0, 6, 3);
        assert_eq!(empty.page, 0);
        assert!(empty.is_empty());
        assert!(!empty.has_previous && !empty.has_next);
    }

    #[test]
    fn test_next_and_previous_rules_hold_for_every_page() {
        for total in 0..40usize {
            for size in 1..8usize {
                for requested in 0..10u32 {
                    let w = PageWindow::new(total, size, requested);
                    assert_eq!(w.has_next, w.end < total);
                    assert_eq!(w.has_previous, w.page > 0);
                    assert!(w.len() <= size);
                }
            }
        }
    }

    #[test]
    fn test_page_of() {
        assert_eq!(PageWindow::page_of(0, 12), 0);
        assert_eq!(PageWindow::page_of(11, 12), 0);
        assert_eq!(PageWindow::page_of(12, 12), 1);
    }
}
