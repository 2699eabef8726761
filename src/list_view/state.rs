//! Immutable filter state driving a list view.

use std::collections::{BTreeMap, BTreeSet};

use crate::list_view::comparator::{Sort, SortDirection};
use crate::list_view::paginator::DEFAULT_ITEMS_PER_PAGE;
use crate::list_view::predicate::{DeletedVisibility, Predicate};

/// Every user-controlled parameter of a list view.
///
/// Setters consume the state and return the updated one. Any setter that
/// changes which records are visible, or their order, moves back to page 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState<F, C> {
    search: String,
    categories: BTreeMap<C, BTreeSet<String>>,
    visibility: DeletedVisibility,
    sort: Option<Sort<F>>,
    page: usize,
    per_page: usize,
}

impl<F, C> Default for FilterState<F, C> {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

impl<F, C> FilterState<F, C> {
    /// Creates an unfiltered, unsorted state on page 1.
    pub fn new(per_page: usize) -> Self {
        Self {
            search: String::new(),
            categories: BTreeMap::new(),
            visibility: DeletedVisibility::Active,
            sort: None,
            page: 1,
            per_page: per_page.max(1),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn categories(&self) -> &BTreeMap<C, BTreeSet<String>> {
        &self.categories
    }

    pub fn visibility(&self) -> DeletedVisibility {
        self.visibility
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self.page = 1;
        self
    }

    #[must_use]
    pub fn with_visibility(mut self, visibility: DeletedVisibility) -> Self {
        self.visibility = visibility;
        self.page = 1;
        self
    }

    /// Flips between showing live and soft-deleted records.
    #[must_use]
    pub fn toggle_deleted(self) -> Self {
        let visibility = self.visibility.toggled();
        self.with_visibility(visibility)
    }

    /// Moves to the given page. Page 0 is treated as page 1.
    #[must_use]
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Changes the page size and returns to page 1.
    #[must_use]
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = per_page.max(1);
        self.page = 1;
        self
    }
}

impl<F: Copy + Eq, C> FilterState<F, C> {
    pub fn sort(&self) -> Option<Sort<F>> {
        self.sort
    }

    /// Sets or clears the sort explicitly.
    #[must_use]
    pub fn with_sort(mut self, sort: Option<Sort<F>>) -> Self {
        self.sort = sort;
        self.page = 1;
        self
    }

    /// Header-click behaviour: the same field again flips the direction, a
    /// different field starts in [`SortDirection::default`] (descending).
    #[must_use]
    pub fn sort_by(self, field: F) -> Self {
        let sort = match self.sort {
            Some(current) if current.field == field => {
                Sort::new(field, current.direction.toggled())
            }
            _ => Sort::new(field, SortDirection::default()),
        };
        self.with_sort(Some(sort))
    }
}

impl<F, C: Copy + Ord> FilterState<F, C> {
    /// Replaces the selected values of one category.
    ///
    /// An empty selection or one containing [`crate::list_view::ALL_SENTINEL`]
    /// leaves the category unrestricted.
    #[must_use]
    pub fn with_category<I, S>(mut self, category: C, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.categories.remove(&category);
        } else {
            self.categories.insert(category, values);
        }
        self.page = 1;
        self
    }

    #[must_use]
    pub fn clear_category(mut self, category: C) -> Self {
        self.categories.remove(&category);
        self.page = 1;
        self
    }

    /// Builds the visibility predicate for this state.
    pub fn predicate(&self) -> Predicate<'_, C> {
        Predicate::new(&self.search, &self.categories, self.visibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_view::fixtures::{RowCategory, RowSort};

    type RowState = FilterState<RowSort, RowCategory>;

    #[test]
    fn filter_changes_reset_page() {
        let state = RowState::new(10).with_page(4);
        assert_eq!(state.page(), 4);

        assert_eq!(state.clone().with_search("ana").page(), 1);
        assert_eq!(state.clone().toggle_deleted().page(), 1);
        assert_eq!(
            state
                .clone()
                .with_category(RowCategory::Status, ["active"])
                .page(),
            1
        );
        assert_eq!(state.clone().sort_by(RowSort::Name).page(), 1);
        assert_eq!(state.with_per_page(25).page(), 1);
    }

    #[test]
    fn page_change_keeps_filters() {
        let state = RowState::default()
            .with_search("ana")
            .with_page(3);

        assert_eq!(state.search(), "ana");
        assert_eq!(state.page(), 3);
        assert_eq!(state.per_page(), DEFAULT_ITEMS_PER_PAGE);
    }

    #[test]
    fn sort_by_same_field_toggles_and_new_field_resets_to_desc() {
        let state = RowState::default().sort_by(RowSort::Date);
        assert_eq!(state.sort(), Some(Sort::desc(RowSort::Date)));

        let state = state.sort_by(RowSort::Date);
        assert_eq!(state.sort(), Some(Sort::asc(RowSort::Date)));

        let state = state.sort_by(RowSort::Name);
        assert_eq!(state.sort(), Some(Sort::desc(RowSort::Name)));
    }

    #[test]
    fn empty_category_selection_clears_filter() {
        let state = RowState::default().with_category(RowCategory::Status, ["retired"]);
        assert_eq!(state.categories().len(), 1);

        let state = state.with_category(RowCategory::Status, Vec::<String>::new());
        assert!(state.categories().is_empty());
    }

    #[test]
    fn zero_sizes_are_clamped() {
        let state = RowState::new(0).with_page(0);
        assert_eq!(state.per_page(), 1);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn toggle_deleted_flips_visibility() {
        let state = RowState::default().toggle_deleted();
        assert_eq!(state.visibility(), DeletedVisibility::Deleted);
        assert_eq!(state.toggle_deleted().visibility(), DeletedVisibility::Active);
    }
}
