//! Visibility test combining deleted toggle, free-text search and categories.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::list_view::Listable;

/// Category value meaning "no restriction".
pub const ALL_SENTINEL: &str = "all";

/// Which side of the soft-delete marker is visible. The two are exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletedVisibility {
    /// Only records without a delete marker.
    #[default]
    Active,
    /// Only records carrying a delete marker.
    Deleted,
}

impl DeletedVisibility {
    pub const fn from_show_deleted(show_deleted: bool) -> Self {
        if show_deleted {
            DeletedVisibility::Deleted
        } else {
            DeletedVisibility::Active
        }
    }

    pub const fn shows_deleted(self) -> bool {
        matches!(self, DeletedVisibility::Deleted)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        Self::from_show_deleted(!self.shows_deleted())
    }
}

/// Returns `true` when a selection restricts the category.
pub fn is_active_selection(values: &BTreeSet<String>) -> bool {
    !values.is_empty() && !values.contains(ALL_SENTINEL)
}

/// Boolean test deciding whether a record is visible.
#[derive(Debug)]
pub struct Predicate<'s, C> {
    needle: String,
    categories: Vec<(C, &'s BTreeSet<String>)>,
    visibility: DeletedVisibility,
}

impl<'s, C: Copy + Ord> Predicate<'s, C> {
    /// Builds the predicate from raw filter inputs.
    ///
    /// The search text is lowercased once here and matched verbatim, so
    /// surrounding whitespace is part of the needle. Inactive category
    /// selections are dropped.
    pub fn new(
        search: &str,
        categories: &'s BTreeMap<C, BTreeSet<String>>,
        visibility: DeletedVisibility,
    ) -> Self {
        Self {
            needle: search.to_lowercase(),
            categories: categories
                .iter()
                .filter(|(_, values)| is_active_selection(values))
                .map(|(category, values)| (*category, values))
                .collect(),
            visibility,
        }
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Listable<Category = C>,
    {
        if record.is_deleted() != self.visibility.shows_deleted() {
            return false;
        }

        if !self.needle.is_empty()
            && !record
                .search_fields()
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&self.needle))
        {
            return false;
        }

        self.categories.iter().all(|(category, selected)| {
            record
                .category_value(*category)
                .is_some_and(|value| selected.contains(value))
        })
    }
}
