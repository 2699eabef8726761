//! Page payload shared by every list view.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;

use crate::list_view::{FilterState, Paginated, SortDirection};

/// Data required to render one page of a table.
#[derive(Debug, Serialize)]
pub struct ListPageData<T> {
    /// Visible page of records with its count metadata.
    pub records: Paginated<T>,
    /// Search query echoed back when present.
    pub search_query: Option<String>,
    /// Active category selections keyed by category name.
    pub categories: BTreeMap<String, Vec<String>>,
    pub show_deleted: bool,
    pub sort: Option<String>,
    pub dir: Option<SortDirection>,
}

impl<T> ListPageData<T> {
    /// Pairs a rendered page with the state that produced it.
    pub fn new<F, C>(records: Paginated<T>, state: &FilterState<F, C>) -> Self
    where
        F: Copy + Eq + Display,
        C: Display,
    {
        let search_query = Some(state.search().trim().to_string()).filter(|s| !s.is_empty());
        let categories = state
            .categories()
            .iter()
            .map(|(category, values)| (category.to_string(), values.iter().cloned().collect()))
            .collect();
        let sort = state.sort();

        Self {
            records,
            search_query,
            categories,
            show_deleted: state.visibility().shows_deleted(),
            sort: sort.map(|s| s.field.to_string()),
            dir: sort.map(|s| s.direction),
        }
    }
}
