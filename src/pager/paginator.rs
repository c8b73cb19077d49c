use thiserror::Error;

use super::link::{Link, NEXT_LABEL, PREVIOUS_LABEL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PagerError {
    #[error("{0}")]
    InvalidArgument(&'static str),
}

const ZERO_ITEMS: &str = "zero not allowed as number of items.";
const ZERO_PAGE_SIZE: &str = "zero not allowed as page size.";
const NEGATIVE_PAGE_SIZE: &str = "negative number not allowed as page size.";

/// Pagination metadata for one request.
///
/// Only the item count and page size are validated. Negative item counts and
/// page numbers outside `1..=number_of_pages` are accepted and flow through
/// the same formulas, so callers may see a previous control pointing at page
/// zero or a middle block past the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    number_of_items: i64,
    page_size: i64,
    page_number: i64,
}

impl Pager {
    pub fn new(number_of_items: i64, page_size: i64, page_number: i64) -> Result<Self, PagerError> {
        if number_of_items == 0 {
            return Err(PagerError::InvalidArgument(ZERO_ITEMS));
        }
        if page_size == 0 {
            return Err(PagerError::InvalidArgument(ZERO_PAGE_SIZE));
        }
        if page_size < 0 {
            return Err(PagerError::InvalidArgument(NEGATIVE_PAGE_SIZE));
        }

        Ok(Self {
            number_of_items,
            page_size,
            page_number,
        })
    }

    pub fn number_of_items(&self) -> i64 {
        self.number_of_items
    }

    pub fn page_size(&self) -> i64 {
        self.page_size
    }

    pub fn page_number(&self) -> i64 {
        self.page_number
    }

    pub fn number_of_pages(&self) -> i64 {
        let result = self.number_of_items / self.page_size;
        if self.number_of_items % self.page_size == 0 {
            result
        } else {
            result + 1
        }
    }

    pub fn previous_visible(&self) -> bool {
        self.page_number > 1
    }

    pub fn next_visible(&self) -> bool {
        self.page_number < self.number_of_pages()
    }

    /// Ordered controls to render: prev, first page, leading ellipsis, the
    /// middle block, trailing ellipsis, last page, next. Each part is
    /// optional except the middle block.
    pub fn links_to_print(&self) -> Vec<Link> {
        let page = self.page_number;
        let pages = self.number_of_pages();
        let mut links = Vec::with_capacity(9);

        if self.previous_visible() {
            links.push(Link::to(PREVIOUS_LABEL, page.saturating_sub(1)));
        }
        if page > 2 {
            links.push(Link::page(1));
        }
        if page > 3 {
            links.push(Link::ellipsis());
        }

        links.extend(self.middle_block(pages));

        if page < pages.saturating_sub(2) {
            links.push(Link::ellipsis());
        }
        if page < pages.saturating_sub(1) {
            links.push(Link::page(pages));
        }
        if self.next_visible() {
            links.push(Link::to(NEXT_LABEL, page.saturating_add(1)));
        }

        links
    }

    fn middle_block(&self, pages: i64) -> Vec<Link> {
        let page = self.page_number;
        if pages == 1 {
            return vec![Link::current(1)];
        }
        if page == 1 {
            return vec![Link::current(1), Link::page(2)];
        }
        if page == pages {
            return vec![Link::page(pages.saturating_sub(1)), Link::current(pages)];
        }

        vec![
            Link::page(page.saturating_sub(1)),
            Link::current(page),
            Link::page(page.saturating_add(1)),
        ]
    }

    /// 1-based inclusive item positions shown on the current page, when the
    /// page lies inside `1..=number_of_pages`.
    pub fn item_range(&self) -> Option<(i64, i64)> {
        let page = self.page_number;
        if self.number_of_items < 1 || page < 1 || page > self.number_of_pages() {
            return None;
        }
        let first = (page - 1).checked_mul(self.page_size)?.checked_add(1)?;
        let last = page
            .checked_mul(self.page_size)
            .map_or(self.number_of_items, |end| end.min(self.number_of_items));
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(items: i64, size: i64, page: i64) -> Pager {
        Pager::new(items, size, page).expect("valid pager")
    }

    fn labels(items: i64, size: i64, page: i64) -> Vec<String> {
        pager(items, size, page)
            .links_to_print()
            .iter()
            .map(|link| link.label().to_string())
            .collect()
    }

    fn targets(items: i64, size: i64, page: i64) -> Vec<Option<i64>> {
        pager(items, size, page)
            .links_to_print()
            .iter()
            .map(Link::target)
            .collect()
    }

    #[test]
    fn creates_pager() {
        let p = pager(20, 10, 1);
        assert_eq!(p.number_of_items(), 20);
        assert_eq!(p.page_size(), 10);
        assert_eq!(p.page_number(), 1);
    }

    #[test]
    fn counts_pages_with_ceiling_division() {
        for (items, size, expected) in [
            (10, 10, 1),
            (11, 10, 2),
            (9, 10, 1),
            (39, 10, 4),
            (16, 3, 6),
            (17, 16, 2),
            (99, 1, 99),
        ] {
            assert_eq!(
                pager(items, size, 1).number_of_pages(),
                expected,
                "items={} size={}",
                items,
                size
            );
        }
    }

    #[test]
    fn page_count_brackets_item_count() {
        for items in 1..=120 {
            for size in 1..=13 {
                let pages = pager(items, size, 1).number_of_pages();
                assert!(pages * size >= items);
                assert!(items > (pages - 1) * size);
            }
        }
    }

    #[test]
    fn rejects_zero_items() {
        let err = Pager::new(0, 10, 1).unwrap_err();
        assert_eq!(err, PagerError::InvalidArgument(ZERO_ITEMS));
        assert_eq!(err.to_string(), "zero not allowed as number of items.");
    }

    #[test]
    fn rejects_zero_page_size() {
        let err = Pager::new(10, 0, 1).unwrap_err();
        assert_eq!(err.to_string(), "zero not allowed as page size.");
    }

    #[test]
    fn rejects_negative_page_size() {
        let err = Pager::new(10, -5, 1).unwrap_err();
        assert_eq!(err.to_string(), "negative number not allowed as page size.");
    }

    #[test]
    fn item_check_runs_before_page_size_check() {
        let err = Pager::new(0, 0, 1).unwrap_err();
        assert_eq!(err.to_string(), "zero not allowed as number of items.");
    }

    #[test]
    fn navigation_visibility() {
        assert!(!pager(20, 10, 1).previous_visible());
        assert!(pager(20, 10, 2).previous_visible());
        assert!(!pager(20, 10, 2).next_visible());
        assert!(pager(20, 10, 1).next_visible());

        let p = pager(20, 10, 1);
        assert_eq!(p.number_of_pages(), 2);
    }

    #[test]
    fn labels_for_three_pages() {
        assert_eq!(labels(30, 10, 1), ["1", "2", "3", ">"]);
        assert_eq!(labels(30, 10, 2), ["<", "1", "2", "3", ">"]);
        assert_eq!(labels(30, 10, 3), ["<", "1", "2", "3"]);
        assert_eq!(labels(10, 10, 1), ["1"]);
    }

    #[test]
    fn targets_for_three_pages() {
        assert_eq!(targets(30, 10, 1), [None, Some(2), Some(3), Some(2)]);
        assert_eq!(
            targets(30, 10, 2),
            [Some(1), Some(1), None, Some(3), Some(3)]
        );
        assert_eq!(targets(30, 10, 3), [Some(2), Some(1), Some(2), None]);
        assert_eq!(targets(10, 10, 1), [None]);
    }

    #[test]
    fn labels_for_ten_pages() {
        let expected: [&[&str]; 10] = [
            &["1", "2", "...", "10", ">"],
            &["<", "1", "2", "3", "...", "10", ">"],
            &["<", "1", "2", "3", "4", "...", "10", ">"],
            &["<", "1", "...", "3", "4", "5", "...", "10", ">"],
            &["<", "1", "...", "4", "5", "6", "...", "10", ">"],
            &["<", "1", "...", "5", "6", "7", "...", "10", ">"],
            &["<", "1", "...", "6", "7", "8", "...", "10", ">"],
            &["<", "1", "...", "7", "8", "9", "10", ">"],
            &["<", "1", "...", "8", "9", "10", ">"],
            &["<", "1", "...", "9", "10"],
        ];
        for (index, want) in expected.iter().enumerate() {
            let page = index as i64 + 1;
            assert_eq!(labels(100, 10, page), *want, "page {}", page);
        }
    }

    #[test]
    fn targets_for_ten_pages() {
        let n = None;
        let s = Some;
        let expected: [&[Option<i64>]; 10] = [
            &[n, s(2), n, s(10), s(2)],
            &[s(1), s(1), n, s(3), n, s(10), s(3)],
            &[s(2), s(1), s(2), n, s(4), n, s(10), s(4)],
            &[s(3), s(1), n, s(3), n, s(5), n, s(10), s(5)],
            &[s(4), s(1), n, s(4), n, s(6), n, s(10), s(6)],
            &[s(5), s(1), n, s(5), n, s(7), n, s(10), s(7)],
            &[s(6), s(1), n, s(6), n, s(8), n, s(10), s(8)],
            &[s(7), s(1), n, s(7), n, s(9), s(10), s(9)],
            &[s(8), s(1), n, s(8), n, s(10), s(10)],
            &[s(9), s(1), n, s(9), n],
        ];
        for (index, want) in expected.iter().enumerate() {
            let page = index as i64 + 1;
            assert_eq!(targets(100, 10, page), *want, "page {}", page);
        }
    }

    #[test]
    fn links_are_stable_across_calls() {
        let p = pager(100, 10, 5);
        assert_eq!(p.links_to_print(), p.links_to_print());
    }

    #[test]
    fn out_of_range_pages_are_computed_mechanically() {
        let p = pager(100, 10, 0);
        assert!(!p.previous_visible());
        assert!(p.next_visible());
        assert_eq!(
            labels(100, 10, 0),
            ["-1", "0", "1", "...", "10", ">"]
        );

        let p = pager(30, 10, 5);
        assert!(p.previous_visible());
        assert!(!p.next_visible());
        assert_eq!(labels(30, 10, 5), ["<", "1", "...", "4", "5", "6"]);
    }

    #[test]
    fn extreme_inputs_do_not_panic() {
        for (items, size, page) in [
            (i64::MAX, 1, i64::MAX),
            (i64::MAX, 1, i64::MIN),
            (i64::MIN, 1, i64::MIN),
            (i64::MIN, i64::MAX, i64::MAX),
            (-5, 10, -3),
        ] {
            let p = pager(items, size, page);
            let _ = p.links_to_print();
            let _ = p.item_range();
        }
    }

    #[test]
    fn negative_items_are_accepted() {
        let p = pager(-5, 10, 1);
        assert_eq!(p.number_of_pages(), 1);
        assert_eq!(labels(-5, 10, 1), ["1"]);
    }

    #[test]
    fn item_range_of_current_page() {
        assert_eq!(pager(95, 10, 1).item_range(), Some((1, 10)));
        assert_eq!(pager(95, 10, 10).item_range(), Some((91, 95)));
        assert_eq!(pager(95, 10, 11).item_range(), None);
        assert_eq!(pager(95, 10, 0).item_range(), None);
    }
}
