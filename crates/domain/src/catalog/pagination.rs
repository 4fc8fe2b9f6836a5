use std::fmt;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 9;

/// Width of the consecutive page-number run in the page strip.
const WINDOW: usize = 5;

/// One page of an ordered list plus its metadata.
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_results: bool,
}

/// Slice `items` into the requested 1-indexed page.
///
/// The page number is never clamped: page 0 or a page past the end yields an
/// empty slice. A page size of 0 is treated as 1.
pub fn paginate<T>(items: &[T], current_page: usize, items_per_page: usize) -> Page<'_, T> {
    let per_page = items_per_page.max(1);
    let total_items = items.len();

    let slice = current_page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(per_page))
        .filter(|&start| start < total_items)
        .map(|start| &items[start..start.saturating_add(per_page).min(total_items)])
        .unwrap_or(&[]);

    Page {
        items: slice,
        current_page,
        total_pages: total_pages(total_items, per_page),
        total_items,
        has_results: total_items > 0,
    }
}

pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageButton::Page(n) => write!(f, "{}", n),
            PageButton::Ellipsis => f.write_str("..."),
        }
    }
}

/// Page-number strip for `(current_page, total_pages)`.
///
/// Up to five pages are listed in full. Beyond that the strip is a run of five
/// pages (`1..=5` when `current <= 3`, the last five when
/// `current >= total - 2`, otherwise `current - 2..=current + 2`), preceded by
/// page 1 when `current > 3` and followed by the last page when
/// `current < total - 2`. A leading ellipsis is emitted when `current > 4` and
/// a trailing one when `current < total - 3`, whether or not a page is
/// actually skipped: `(5, 6)` renders `1 ... 2 3 4 5 6`. The first and last
/// page are never listed twice.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageButton> {
    if total_pages <= WINDOW {
        return (1..=total_pages).map(PageButton::Page).collect();
    }

    let (start, end) = if current_page <= 3 {
        (1, WINDOW)
    } else if current_page >= total_pages - 2 {
        (total_pages - WINDOW + 1, total_pages)
    } else {
        (current_page - 2, current_page + 2)
    };

    let leading_first = current_page > 3;
    let trailing_last = current_page < total_pages - 2;

    let mut buttons = Vec::with_capacity(WINDOW + 4);

    if leading_first {
        buttons.push(PageButton::Page(1));
        if current_page > 4 {
            buttons.push(PageButton::Ellipsis);
        }
    }

    buttons.extend(
        (start..=end)
            .filter(|&p| !(p == 1 && leading_first))
            .filter(|&p| !(p == total_pages && trailing_last))
            .map(PageButton::Page),
    );

    if trailing_last {
        if current_page + 3 < total_pages {
            buttons.push(PageButton::Ellipsis);
        }
        buttons.push(PageButton::Page(total_pages));
    }

    buttons
}
