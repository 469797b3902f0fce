//! Page windowing over a fetched lead buffer.
//!
//! Everything here is a pure function of its inputs so the view can re-run it
//! after every fetch or page change without carrying hidden state.

use serde::Serialize;

use crate::domain::types::PageSize;

/// Number of pages needed for `total_count` rows; zero only when there are no rows.
pub fn total_pages(total_count: usize, page_size: PageSize) -> usize {
    total_count.div_ceil(page_size.get())
}

/// Clamps a requested page into `1..=max(total_pages, 1)`.
pub fn clamp_page(page_number: usize, total_pages: usize) -> usize {
    page_number.max(1).min(total_pages.max(1))
}

/// Visible portion of a record buffer for one page.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PageWindow<T> {
    pub page_number: usize,
    pub total_pages: usize,
    pub visible: Vec<T>,
}

impl<T> PageWindow<T> {
    /// Page links for this window, see [`page_links`].
    pub fn links(&self) -> Vec<Option<usize>> {
        page_links(self.total_pages, self.page_number)
    }

    pub fn is_last_page(&self) -> bool {
        self.page_number >= self.total_pages
    }
}

/// Slices the page `page_number` out of a buffer holding every matching record.
///
/// The slice stops at `total_count` even when the buffer is longer, and indices
/// past the end of the buffer are skipped rather than padded.
pub fn window<T: Clone>(
    records: &[T],
    total_count: usize,
    page_number: usize,
    page_size: PageSize,
) -> PageWindow<T> {
    let total_pages = total_pages(total_count, page_size);
    let page_number = clamp_page(page_number, total_pages);

    let start = (page_number - 1) * page_size.get();
    let end = (page_number * page_size.get())
        .min(total_count)
        .min(records.len());

    let visible = if start < end {
        records[start..end].to_vec()
    } else {
        Vec::new()
    };

    PageWindow {
        page_number,
        total_pages,
        visible,
    }
}

/// Shows a buffer that the backend already cut to the requested page.
///
/// No offset is applied to the buffer; it is only truncated to the page size
/// and to the rows the count says remain on the clamped page.
pub fn server_window<T: Clone>(
    records: &[T],
    total_count: usize,
    page_number: usize,
    page_size: PageSize,
) -> PageWindow<T> {
    let total_pages = total_pages(total_count, page_size);
    let page_number = clamp_page(page_number, total_pages);

    let remaining = total_count.saturating_sub((page_number - 1) * page_size.get());
    let visible = records
        .iter()
        .take(page_size.get().min(remaining))
        .cloned()
        .collect();

    PageWindow {
        page_number,
        total_pages,
        visible,
    }
}

fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// Compact list of page links where `None` marks a gap.
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let current_page = if current_page == 0 { 1 } else { current_page };
    get_pages(total_pages, current_page, 2, 2, 4, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(value: usize) -> PageSize {
        PageSize::new(value).expect("valid page size")
    }

    fn buffer(len: usize) -> Vec<usize> {
        (0..len).collect()
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(23, size(10)), 3);
        assert_eq!(total_pages(20, size(10)), 2);
        assert_eq!(total_pages(1, size(50)), 1);
        assert_eq!(total_pages(0, size(5)), 0);
    }

    #[test]
    fn total_pages_is_zero_only_without_rows() {
        for page_size in PageSize::OPTIONS {
            for count in 0..120 {
                let pages = total_pages(count, size(page_size));
                assert_eq!(pages == 0, count == 0);
                assert_eq!(pages, count.div_ceil(page_size));
            }
        }
    }

    #[test]
    fn last_partial_page_is_windowed() {
        let records = buffer(23);

        let page = window(&records, 23, 3, size(10));

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page_number, 3);
        assert_eq!(page.visible, vec![20, 21, 22]);
        assert!(page.is_last_page());
    }

    #[test]
    fn empty_result_clamps_to_first_page() {
        let records: Vec<usize> = Vec::new();

        let page = window(&records, 0, 4, size(10));

        assert_eq!(page.total_pages, 0);
        assert_eq!(page.page_number, 1);
        assert!(page.visible.is_empty());
    }

    #[test]
    fn page_number_is_clamped_into_range() {
        let records = buffer(12);

        assert_eq!(window(&records, 12, 0, size(5)).page_number, 1);
        let past_end = window(&records, 12, 9, size(5));
        assert_eq!(past_end.page_number, 3);
        assert_eq!(past_end.visible, vec![10, 11]);
    }

    #[test]
    fn clamp_keeps_first_page_without_pages() {
        assert_eq!(clamp_page(4, 0), 1);
        assert_eq!(clamp_page(0, 0), 1);
        assert_eq!(clamp_page(3, 2), 2);
        assert_eq!(clamp_page(2, 5), 2);
    }

    #[test]
    fn slice_stops_at_total_count() {
        let records = buffer(30);

        let page = window(&records, 12, 3, size(5));

        assert_eq!(page.visible, vec![10, 11]);
    }

    #[test]
    fn missing_buffer_entries_are_omitted() {
        let records = buffer(22);

        let page = window(&records, 30, 3, size(10));

        assert_eq!(page.visible, vec![20, 21]);
        let beyond = window(&records, 40, 4, size(10));
        assert!(beyond.visible.is_empty());
    }

    #[test]
    fn window_never_exceeds_page_size() {
        let records = buffer(60);
        for page_size in PageSize::OPTIONS {
            for count in 0..=60 {
                for page in 0..15 {
                    let result = window(&records, count, page, size(page_size));
                    assert!(result.visible.len() <= page_size);
                    assert!(result.page_number >= 1);
                    assert!(result.page_number <= result.total_pages.max(1));
                    if count == 0 {
                        assert!(result.visible.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn window_is_idempotent() {
        let records = buffer(37);

        let first = window(&records, 37, 2, size(25));
        let second = window(&records, 37, 2, size(25));

        assert_eq!(first, second);
    }

    #[test]
    fn server_page_is_shown_without_offset() {
        let page_three = vec![20, 21, 22];

        let page = server_window(&page_three, 23, 3, size(10));

        assert_eq!(page.total_pages, 3);
        assert_eq!(page.visible, vec![20, 21, 22]);
    }

    #[test]
    fn server_page_is_truncated_to_page_size() {
        let oversized = buffer(12);

        let page = server_window(&oversized, 40, 1, size(5));

        assert_eq!(page.visible, vec![0, 1, 2, 3, 4]);
        assert!(server_window(&oversized, 0, 1, size(5)).visible.is_empty());
    }

    #[test]
    fn page_links_collapse_gaps() {
        assert_eq!(page_links(0, 1), Vec::<Option<usize>>::new());
        assert_eq!(page_links(3, 1), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(
            page_links(20, 10),
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                Some(13),
                Some(14),
                None,
                Some(19),
                Some(20),
            ]
        );
    }
}
