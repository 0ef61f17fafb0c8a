use serde::Serialize;

/// The slice of the result list shown on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Index of the first visible item
    pub start: usize,
    /// One past the last visible item
    pub end: usize,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
}

impl PageWindow {
    /// Window of page `page` (1-based) with `page_size` items per page over
    /// `total` items. A page past the end yields an empty window.
    pub fn new(total: usize, page: usize, page_size: usize) -> Self {
        let page = page.max(1);
        let page_count = if page_size == 0 {
            0
        } else {
            total.div_ceil(page_size)
        };
        let start = (page - 1).saturating_mul(page_size).min(total);
        let end = page.saturating_mul(page_size).min(total);

        Self {
            start,
            end,
            total,
            page,
            page_size,
            page_count,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// 1-based position of the first visible item, 0 when nothing is shown
    pub fn first_position(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.start + 1
        }
    }

    /// 1-based position of the last visible item, 0 when nothing is shown
    pub fn last_position(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end
        }
    }

    /// True when the page lies beyond the last page of a non-empty list
    pub fn is_past_end(&self) -> bool {
        self.is_empty() && self.total > 0
    }
}

/// Paginator - Cuts the visible page out of a result list
pub struct Paginator;

impl Paginator {
    pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> (&[T], PageWindow) {
        let window = PageWindow::new(items.len(), page, page_size);
        (&items[window.start..window.end], window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let items: Vec<u32> = (0..45).collect();
        let (page, window) = Paginator::paginate(&items, 1, 20);
        assert_eq!(page.len(), 20);
        assert_eq!(page[0], 0);
        assert_eq!(window.page_count, 3);
        assert_eq!(window.total, 45);
    }

    #[test]
    fn test_last_partial_page() {
        let items: Vec<u32> = (0..45).collect();
        let (page, window) = Paginator::paginate(&items, 3, 20);
        assert_eq!(page, &items[40..45]);
        assert_eq!(window.first_position(), 41);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let items: Vec<u32> = (0..6).collect();
        let (page, window) = Paginator::paginate(&items, 2, 20);
        assert!(page.is_empty());
        assert!(window.is_empty());
        assert_eq!(window.first_position(), 0);
        assert_eq!(window.last_position(), 0);
        assert!(window.is_past_end());
    }

    #[test]
    fn test_positions_of_a_full_page() {
        let window = PageWindow::new(45, 2, 20);
        assert_eq!(window.first_position(), 21);
        assert_eq!(window.last_position(), 40);
        assert!(!window.is_past_end());
    }

    #[test]
    fn test_length_formula() {
        for total in [0usize, 1, 19, 20, 21, 100, 101] {
            let items: Vec<usize> = (0..total).collect();
            for size in [20usize, 50, 100] {
                for page in 1..=4 {
                    let (slice, _) = Paginator::paginate(&items, page, size);
                    let expected = total.saturating_sub((page - 1) * size).min(size);
                    assert_eq!(slice.len(), expected, "N={} p={} s={}", total, page, size);
                }
            }
        }
    }

    #[test]
    fn test_pages_partition_the_list() {
        let items: Vec<usize> = (0..57).collect();
        let size = 20;
        let window = PageWindow::new(items.len(), 1, size);
        let mut joined = Vec::new();
        for page in 1..=window.page_count {
            let (slice, _) = Paginator::paginate(&items, page, size);
            joined.extend_from_slice(slice);
        }
        assert_eq!(joined, items);
    }

    #[test]
    fn test_empty_list() {
        let items: Vec<u32> = Vec::new();
        let (page, window) = Paginator::paginate(&items, 1, 20);
        assert!(page.is_empty());
        assert_eq!(window.page_count, 0);
        assert!(!window.is_past_end());
    }

    #[test]
    fn test_zero_page_size_shows_nothing() {
        let window = PageWindow::new(10, 1, 0);
        assert!(window.is_empty());
        assert_eq!(window.page_count, 0);
    }
}
