//! Query forms turning raw list parameters into typed filter states.

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;
use validator::ValidationErrors;

use crate::list_view::{
    ALL_SENTINEL, DEFAULT_ITEMS_PER_PAGE, DeletedVisibility, FilterState, Sort, SortDirection,
};

pub mod documents;
pub mod leaves;
pub mod personnel;
pub mod reassignments;
pub mod users;

#[derive(Debug, Error)]
/// Errors that can occur when processing query parameters.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid {category} value: {value}")]
    InvalidCategory {
        category: &'static str,
        value: String,
    },

    #[error("invalid sort direction: {0}")]
    InvalidSortDirection(String),
}

/// Defaults applied when a query leaves a parameter out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListDefaults {
    pub per_page: usize,
}

impl Default for ListDefaults {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }
}

/// Parameters every list query shares.
pub(crate) struct CommonParams<'a> {
    pub search: Option<&'a str>,
    pub deleted: bool,
    pub sort: Option<&'a str>,
    pub dir: Option<&'a str>,
    pub per_page: Option<usize>,
}

/// Builds the page-independent part of a filter state.
///
/// The search text is trimmed here, the list engine matches it verbatim. An
/// unknown sort field leaves the view unsorted; an unknown direction is
/// rejected.
pub(crate) fn base_state<F, C>(
    params: CommonParams<'_>,
    defaults: &ListDefaults,
) -> Result<FilterState<F, C>, FormError>
where
    F: FromStr + Copy + Eq,
{
    let direction = match params.dir.map(str::trim).filter(|d| !d.is_empty()) {
        Some(dir) => dir
            .parse::<SortDirection>()
            .map_err(|_| FormError::InvalidSortDirection(dir.to_string()))?,
        None => SortDirection::default(),
    };

    let sort = params
        .sort
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|field| match field.parse::<F>() {
            Ok(field) => Some(Sort::new(field, direction)),
            Err(_) => {
                log::debug!("Ignoring unknown sort field {field}");
                None
            }
        });

    Ok(FilterState::new(params.per_page.unwrap_or(defaults.per_page))
        .with_search(params.search.map(str::trim).unwrap_or_default())
        .with_visibility(DeletedVisibility::from_show_deleted(params.deleted))
        .with_sort(sort))
}

/// Normalizes the selected values of one category.
///
/// Each value must parse as `V`; the [`ALL_SENTINEL`] passes through and
/// blank entries are dropped.
pub(crate) fn category_values<V>(
    category: &'static str,
    values: &[String],
) -> Result<Vec<String>, FormError>
where
    V: FromStr + Display,
{
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| {
            if value == ALL_SENTINEL {
                return Ok(ALL_SENTINEL.to_string());
            }
            value
                .parse::<V>()
                .map(|parsed| parsed.to_string())
                .map_err(|_| FormError::InvalidCategory {
                    category,
                    value: value.to_string(),
                })
        })
        .collect()
}
