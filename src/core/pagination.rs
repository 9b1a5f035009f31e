//! Client-side pagination over in-memory lists.

use std::ops::Range;

use crate::config::paging::MAX_VISIBLE_PAGES;
use crate::core::error::PageError;

/// Current page and page size. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    /// First page with `page_size` rows (at least one).
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Jump to `page`; out-of-range requests leave the state unchanged.
    pub fn go_to(&mut self, page: usize, total: usize) -> Result<(), PageError> {
        let total_pages = self.total_pages(total);
        if page == 0 || page > total_pages {
            return Err(PageError::OutOfRange { page, total_pages });
        }
        self.page = page;
        Ok(())
    }

    pub fn next(&mut self, total: usize) -> Result<(), PageError> {
        self.go_to(self.page + 1, total)
    }

    pub fn previous(&mut self, total: usize) -> Result<(), PageError> {
        self.go_to(self.page.saturating_sub(1), total)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page < self.total_pages(total)
    }

    /// Change the page size and return to the first page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Index range of the current page within `total` rows.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.range(items.len())]
    }

    /// 1-based `(from, to, total)` for the "Showing ..." caption.
    ///
    /// `from` is 0 when there are no rows.
    pub fn showing(&self, total: usize) -> (usize, usize, usize) {
        let range = self.range(total);
        if range.is_empty() {
            (0, range.end, total)
        } else {
            (range.start + 1, range.end, total)
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(crate::config::paging::DEFAULT_PAGE_SIZE)
    }
}

/// One control in the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page { number: usize, active: bool },
    Ellipsis,
}

/// Windowed page list.
///
/// Up to [`MAX_VISIBLE_PAGES`] pages are all shown. Beyond that the first
/// and last pages are always present, the current page is flanked by one
/// neighbour on each side and the gaps collapse into ellipses.
pub fn page_items(current: usize, total_pages: usize) -> Vec<PageItem> {
    let page = |number: usize| PageItem::Page {
        number,
        active: number == current,
    };

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(page).collect();
    }

    let mut items = vec![page(1)];
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }
    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);
    items.extend((start..=end).map(page));
    if current + 2 < total_pages {
        items.push(PageItem::Ellipsis);
    }
    items.push(page(total_pages));
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(items: &[PageItem]) -> Vec<Option<usize>> {
        items
            .iter()
            .map(|i| match i {
                PageItem::Page { number, .. } => Some(*number),
                PageItem::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_twelve_records_page_size_five() {
        let records: Vec<u32> = (1..=12).collect();
        let mut pager = Pagination::new(5);
        assert_eq!(pager.total_pages(records.len()), 3);
        assert_eq!(pager.slice(&records), &[1, 2, 3, 4, 5]);

        pager.go_to(3, records.len()).unwrap();
        assert_eq!(pager.slice(&records), &[11, 12]);

        assert_eq!(
            pager.go_to(0, records.len()),
            Err(PageError::OutOfRange {
                page: 0,
                total_pages: 3,
            })
        );
        assert_eq!(pager.page(), 3);
        assert!(pager.go_to(4, records.len()).is_err());
        assert_eq!(pager.page(), 3);
    }

    #[test]
    fn test_next_previous() {
        let mut pager = Pagination::new(5);
        assert!(pager.previous(12).is_err());
        assert!(!pager.has_previous());
        pager.next(12).unwrap();
        pager.next(12).unwrap();
        assert!(!pager.has_next(12));
        assert!(pager.next(12).is_err());
        pager.previous(12).unwrap();
        assert_eq!(pager.page(), 2);
    }

    #[test]
    fn test_empty_list() {
        let mut pager = Pagination::new(10);
        assert_eq!(pager.total_pages(0), 0);
        assert!(pager.go_to(1, 0).is_err());
        assert_eq!(pager.range(0), 0..0);
        assert_eq!(pager.showing(0), (0, 0, 0));
        assert!(!pager.has_next(0));
    }

    #[test]
    fn test_showing_and_page_size() {
        let mut pager = Pagination::new(10);
        pager.go_to(2, 12).unwrap();
        assert_eq!(pager.showing(12), (11, 12, 12));
        pager.set_page_size(20);
        assert_eq!(pager.page(), 1);
        assert_eq!(pager.showing(12), (1, 12, 12));
        pager.set_page_size(0);
        assert_eq!(pager.page_size(), 1);
    }

    #[test]
    fn test_page_items_small() {
        assert_eq!(numbers(&page_items(1, 0)), vec![]);
        let items = page_items(2, 3);
        assert_eq!(numbers(&items), vec![Some(1), Some(2), Some(3)]);
        let active: Vec<bool> = items
            .iter()
            .map(|i| matches!(i, PageItem::Page { active: true, .. }))
            .collect();
        assert_eq!(active, vec![false, true, false]);
        assert_eq!(numbers(&page_items(1, 5)).len(), 5);
    }

    #[test]
    fn test_page_items_windowed() {
        assert_eq!(
            numbers(&page_items(1, 10)),
            vec![Some(1), Some(2), None, Some(10)]
        );
        assert_eq!(
            numbers(&page_items(3, 10)),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(10)]
        );
        assert_eq!(
            numbers(&page_items(5, 10)),
            vec![Some(1), None, Some(4), Some(5), Some(6), None, Some(10)]
        );
        assert_eq!(
            numbers(&page_items(10, 10)),
            vec![Some(1), None, Some(9), Some(10)]
        );
        assert_eq!(
            numbers(&page_items(8, 10)),
            vec![Some(1), None, Some(7), Some(8), Some(9), Some(10)]
        );
    }
}
