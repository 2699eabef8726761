//! Services loading snapshot data and rendering list views.

use std::fmt::Display;

use thiserror::Error;

use crate::dto::list::ListPageData;
use crate::list_view::{ListView, Listable, StateFor};
use crate::repository::errors::RepositoryError;

pub mod documents;
pub mod leaves;
pub mod personnel;
pub mod reassignments;
pub mod snapshot;
pub mod users;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("form error: {0}")]
    Form(String),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Applies `state` to a freshly loaded snapshot and clones out the visible page.
pub(crate) fn render_page<R>(records: Vec<R>, state: &StateFor<R>) -> ListPageData<R>
where
    R: Listable + Clone,
    R::SortField: Display,
    R::Category: Display,
{
    let page = ListView::new(&records).render(state).cloned();
    ListPageData::new(page, state)
}
