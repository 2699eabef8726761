//! Client-side list view engine shared by every table in the dashboard.
//!
//! A snapshot of records is narrowed by a [`predicate::Predicate`], ordered by
//! a [`comparator::Sort`] and sliced by the [`paginator`]. The
//! [`controller::ListView`] glues the three together against an immutable
//! [`state::FilterState`].

use chrono::NaiveDateTime;

pub mod comparator;
pub mod controller;
pub mod paginator;
pub mod predicate;
pub mod state;

pub use comparator::{Sort, SortDirection, SortKey};
pub use controller::{ListView, ViewResult};
pub use paginator::{DEFAULT_ITEMS_PER_PAGE, Paginated};
pub use predicate::{ALL_SENTINEL, DeletedVisibility, Predicate};
pub use state::FilterState;

/// A record kind that can be shown in a list view.
///
/// Each implementation enumerates its searchable fields, category
/// dimensions and sortable fields explicitly; nothing is inferred from the
/// record shape.
pub trait Listable {
    /// Closed set of fields this record kind can be sorted by.
    type SortField: Copy + Eq + std::fmt::Debug;
    /// Closed set of category dimensions this record kind can be filtered by.
    type Category: Copy + Ord + std::fmt::Debug;

    /// Soft-delete marker. `Some` means the record is logically removed.
    fn deleted_at(&self) -> Option<NaiveDateTime>;

    /// Text fields matched by the free-text search. Absent values never match.
    fn search_fields(&self) -> Vec<Option<&str>>;

    /// Value of the record in the given category dimension.
    fn category_value(&self, category: Self::Category) -> Option<&'static str>;

    /// Key used to order the record by the given field.
    fn sort_key(&self, field: Self::SortField) -> SortKey<'_>;

    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }
}

/// Filter state matching the sort fields and categories of `R`.
pub type StateFor<R> = FilterState<<R as Listable>::SortField, <R as Listable>::Category>;
