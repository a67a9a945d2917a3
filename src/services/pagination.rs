//! Page arithmetic and the numbered page window for the author table.
//!
//! Everything here is a pure function of (total count, page, page size);
//! markup is produced separately in `crate::views`.

use std::ops::Range;

use crate::constants::{
    DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, PAGE_WINDOW_RADIUS,
};

/// Number of authors per page, restricted to the selector's options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u32);

impl PageSize {
    /// Returns `None` unless `value` is one of [`PAGE_SIZE_OPTIONS`].
    pub fn new(value: u32) -> Option<Self> {
        PAGE_SIZE_OPTIONS
            .contains(&value)
            .then_some(PageSize(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(DEFAULT_PAGE_SIZE)
    }
}

/// A 1-based page number paired with a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: PageSize,
}

impl PageRequest {
    /// Page numbers below 1 are raised to 1.
    pub fn new(page: u32, page_size: PageSize) -> Self {
        Self {
            page: page.max(DEFAULT_PAGE_NUMBER),
            page_size,
        }
    }

    /// First page at the given size; used whenever the page size changes.
    pub fn first(page_size: PageSize) -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, page_size)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Index range `[(page-1)*size, page*size)` clipped to `0..total`.
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let size = u64::from(self.page_size.get());
        let start = u64::from(self.page - 1).saturating_mul(size);
        let end = start.saturating_add(size);
        let clip = |index: u64| usize::try_from(index).map_or(total, |index| index.min(total));

        clip(start)..clip(end)
    }

    /// The visible part of `items`; empty when the page is out of range.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.bounds(items.len())]
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(PageSize::default())
    }
}

/// `ceil(total_count / page_size)`.
pub fn total_pages(total_count: usize, page_size: PageSize) -> u32 {
    let pages = (total_count as u64).div_ceil(u64::from(page_size.get()));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// A numbered page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub number: u32,
    pub active: bool,
}

/// One entry of the numbered pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerItem {
    Page(PageLink),
    /// Non-interactive gap marker.
    Ellipsis,
}

/// Prev/Next control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    pub target: u32,
    pub disabled: bool,
}

/// Entry of the per-page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeOption {
    pub value: u32,
    pub selected: bool,
}

/// Numbered controls around `current`.
///
/// Shows the first page, the last page and every page within
/// [`PAGE_WINDOW_RADIUS`] of `current`. A page one step further out that is
/// not already shown becomes an ellipsis, so there is at most one per side.
pub fn page_window(current: u32, total_pages: u32) -> Vec<PagerItem> {
    let current = i64::from(current);

    (1..=total_pages)
        .filter_map(|page| {
            let distance = (i64::from(page) - current).abs();
            if page == 1 || page == total_pages || distance <= PAGE_WINDOW_RADIUS {
                Some(PagerItem::Page(PageLink {
                    number: page,
                    active: distance == 0,
                }))
            } else if distance == PAGE_WINDOW_RADIUS + 1 {
                Some(PagerItem::Ellipsis)
            } else {
                None
            }
        })
        .collect()
}

/// Everything the pagination block displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    pub total_count: usize,
    pub total_pages: u32,
    pub size_options: Vec<PageSizeOption>,
    pub prev: NavControl,
    pub next: NavControl,
    pub items: Vec<PagerItem>,
}

impl PaginationControls {
    pub fn new(total_count: usize, request: PageRequest) -> Self {
        let total_pages = total_pages(total_count, request.page_size());
        let current = request.page();

        let size_options = PAGE_SIZE_OPTIONS
            .iter()
            .map(|&value| PageSizeOption {
                value,
                selected: value == request.page_size().get(),
            })
            .collect();

        Self {
            total_count,
            total_pages,
            size_options,
            prev: NavControl {
                target: current - 1,
                disabled: current <= 1,
            },
            next: NavControl {
                target: current.saturating_add(1),
                disabled: current >= total_pages,
            },
            items: page_window(current, total_pages),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(value: u32) -> PageSize {
        PageSize::new(value).unwrap()
    }

    /// Numbers in the window, with 0 standing for an ellipsis.
    fn window_numbers(current: u32, total: u32) -> Vec<u32> {
        page_window(current, total)
            .into_iter()
            .map(|item| match item {
                PagerItem::Page(link) => link.number,
                PagerItem::Ellipsis => 0,
            })
            .collect()
    }

    #[test]
    fn test_page_size_options() {
        assert_eq!(PageSize::new(10).map(PageSize::get), Some(10));
        assert_eq!(PageSize::new(15).map(PageSize::get), Some(15));
        assert_eq!(PageSize::new(20).map(PageSize::get), Some(20));
        assert_eq!(PageSize::new(0), None);
        assert_eq!(PageSize::new(12), None);
        assert_eq!(PageSize::new(100), None);
        assert_eq!(PageSize::default().get(), 10);
    }

    #[test]
    fn test_page_request_clamps_to_first_page() {
        assert_eq!(PageRequest::new(0, size(10)).page(), 1);
        assert_eq!(PageRequest::new(7, size(10)).page(), 7);
        assert_eq!(PageRequest::default(), PageRequest::first(size(10)));
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, size(10)), 3);
        assert_eq!(total_pages(30, size(10)), 3);
        assert_eq!(total_pages(31, size(15)), 3);
        assert_eq!(total_pages(1, size(20)), 1);
        assert_eq!(total_pages(0, size(10)), 0);
    }

    #[test]
    fn test_slice_row_count_matches_clamp() {
        for n in [0usize, 1, 9, 10, 11, 25, 47] {
            for p in PAGE_SIZE_OPTIONS {
                for k in 1u32..=6 {
                    let request = PageRequest::new(k, size(p));
                    let items: Vec<usize> = (0..n).collect();
                    let expected =
                        (n as i64 - (i64::from(k) - 1) * i64::from(p)).clamp(0, i64::from(p));
                    assert_eq!(
                        request.slice(&items).len() as i64,
                        expected,
                        "n={} p={} k={}",
                        n,
                        p,
                        k
                    );
                }
            }
        }
    }

    #[test]
    fn test_slice_contents() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(PageRequest::new(3, size(10)).slice(&items), &[21, 22, 23, 24, 25]);
        assert_eq!(PageRequest::new(2, size(15)).slice(&items), &items[15..25]);
    }

    #[test]
    fn test_slice_far_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=25).collect();
        assert!(PageRequest::new(u32::MAX, size(20)).slice(&items).is_empty());
        assert_eq!(PageRequest::new(u32::MAX, size(20)).bounds(25), 25..25);
    }

    #[test]
    fn test_window_middle() {
        assert_eq!(window_numbers(5, 10), vec![1, 0, 3, 4, 5, 6, 7, 0, 10]);
    }

    #[test]
    fn test_window_active_page() {
        let active: Vec<u32> = page_window(5, 10)
            .into_iter()
            .filter_map(|item| match item {
                PagerItem::Page(link) if link.active => Some(link.number),
                _ => None,
            })
            .collect();
        assert_eq!(active, vec![5]);
    }

    #[test]
    fn test_window_near_edges() {
        assert_eq!(window_numbers(1, 10), vec![1, 2, 3, 0, 10]);
        assert_eq!(window_numbers(4, 10), vec![1, 2, 3, 4, 5, 6, 0, 10]);
        assert_eq!(window_numbers(10, 10), vec![1, 0, 8, 9, 10]);
        assert_eq!(window_numbers(7, 10), vec![1, 0, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_window_small_totals() {
        assert_eq!(window_numbers(1, 0), Vec::<u32>::new());
        assert_eq!(window_numbers(1, 1), vec![1]);
        assert_eq!(window_numbers(2, 3), vec![1, 2, 3]);
        assert_eq!(window_numbers(3, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_window_current_beyond_last_page() {
        assert_eq!(window_numbers(9, 3), vec![1, 3]);
        assert_eq!(window_numbers(5, 3), vec![1, 0, 3]);
    }

    #[test]
    fn test_prev_next_disabled() {
        let first = PaginationControls::new(25, PageRequest::new(1, size(10)));
        assert!(first.prev.disabled);
        assert!(!first.next.disabled);
        assert_eq!(first.prev.target, 0);
        assert_eq!(first.next.target, 2);

        let middle = PaginationControls::new(25, PageRequest::new(2, size(10)));
        assert!(!middle.prev.disabled);
        assert!(!middle.next.disabled);

        let last = PaginationControls::new(25, PageRequest::new(3, size(10)));
        assert!(!last.prev.disabled);
        assert!(last.next.disabled);
        assert_eq!(last.prev.target, 2);
    }

    #[test]
    fn test_no_authors_disables_both() {
        let controls = PaginationControls::new(0, PageRequest::default());
        assert_eq!(controls.total_pages, 0);
        assert!(controls.prev.disabled);
        assert!(controls.next.disabled);
        assert!(controls.items.is_empty());
    }

    #[test]
    fn test_selected_size_option() {
        let controls = PaginationControls::new(40, PageRequest::new(1, size(15)));
        let selected: Vec<u32> = controls
            .size_options
            .iter()
            .filter(|option| option.selected)
            .map(|option| option.value)
            .collect();
        assert_eq!(selected, vec![15]);
        assert_eq!(controls.size_options.len(), PAGE_SIZE_OPTIONS.len());
        assert_eq!(controls.total_count, 40);
        assert_eq!(controls.total_pages, 3);
    }
}
