use serde::Serialize;

/// Page size used when the caller does not pick one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

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

    let current_page = current_page.min(last_page);

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = current_page
        .saturating_add(right_current)
        .saturating_add(1)
        .min(last_page + 1);

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

/// One page of a filtered and sorted sequence with its count metadata.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page-number window for pager widgets, `None` marks a gap.
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub per_page: usize,
    /// Number of records that survived filtering.
    pub total: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    /// Slices `[(page - 1) * per_page, page * per_page)` out of `sequence`.
    ///
    /// Page 0 is treated as page 1 and a page size of 0 as 1. Pages past the
    /// end yield no items.
    pub fn from_sequence(sequence: Vec<T>, current_page: usize, per_page: usize) -> Self {
        let current_page = current_page.max(1);
        let per_page = per_page.max(1);
        let total = sequence.len();
        let total_pages = total.div_ceil(per_page);

        let start = (current_page - 1).saturating_mul(per_page).min(total);
        let end = start.saturating_add(per_page).min(total);

        let items = sequence
            .into_iter()
            .skip(start)
            .take(end - start)
            .collect();

        Self {
            items,
            pages: get_pages(total_pages, current_page, 2, 2, 4, 2),
            page: current_page,
            per_page,
            total,
            total_pages,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }

    /// Applies `f` to every item on the page, keeping the metadata.
    pub fn map<U, M>(self, f: M) -> Paginated<U>
    where
        M: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
            has_previous: self.has_previous,
            has_next: self.has_next,
        }
    }
}

impl<T: Clone> Paginated<&T> {
    pub fn cloned(self) -> Paginated<T> {
        self.map(T::clone)
    }
}
