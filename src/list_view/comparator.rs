//! Sort orderings over listable records.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;
use crate::list_view::Listable;

/// Direction applied on top of a field's natural order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    /// Direction used when a field is selected for the first time.
    #[default]
    Desc,
}

impl SortDirection {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    /// Applies the direction to an ascending ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(TypeConstraintError::InvalidValue(other.to_string())),
        }
    }
}

/// Comparable value extracted from a record for one sort field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey<'a> {
    /// Milliseconds since the Unix epoch. Missing dates order first.
    Date(Option<i64>),
    /// Compared case-insensitively. Missing text orders as the empty string.
    Text(Option<&'a str>),
    Number(Option<i64>),
}

impl SortKey<'_> {
    /// Date key for a calendar day, taken at midnight UTC.
    pub fn date(date: Option<NaiveDate>) -> Self {
        SortKey::Date(date.map(|d| d.and_time(NaiveTime::MIN).and_utc().timestamp_millis()))
    }

    /// Date key for a timestamp interpreted as UTC.
    pub fn timestamp(at: Option<NaiveDateTime>) -> Self {
        SortKey::Date(at.map(|at| at.and_utc().timestamp_millis()))
    }

    /// Ascending ordering between two keys of the same field.
    ///
    /// Keys of different kinds never come from the same field and compare
    /// equal.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Date(a), SortKey::Date(b)) | (SortKey::Number(a), SortKey::Number(b)) => {
                a.cmp(b)
            }
            (SortKey::Text(a), SortKey::Text(b)) => {
                compare_caseless(a.unwrap_or_default(), b.unwrap_or_default())
            }
            _ => Ordering::Equal,
        }
    }
}

fn compare_caseless(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// A sort field together with its direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sort<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F> Sort<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn asc(field: F) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: F) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

impl<F: Copy> Sort<F> {
    /// Orders two records by this sort.
    pub fn compare<R>(&self, a: &R, b: &R) -> Ordering
    where
        R: Listable<SortField = F>,
    {
        let ordering = a.sort_key(self.field).compare(&b.sort_key(self.field));
        self.direction.apply(ordering)
    }
}

/// Builds the comparator for an optional sort.
///
/// Without a sort every pair compares equal, so a stable sort keeps the
/// snapshot order.
pub fn comparator<R>(sort: Option<Sort<R::SortField>>) -> impl Fn(&R, &R) -> Ordering
where
    R: Listable,
{
    move |a: &R, b: &R| match sort {
        Some(sort) => sort.compare(a, b),
        None => Ordering::Equal,
    }
}
