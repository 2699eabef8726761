use crate::domain::document::Document;
use crate::dto::list::ListPageData;
use crate::forms::ListDefaults;
use crate::forms::documents::DocumentsQueryForm;
use crate::repository::DocumentReader;
use crate::services::{ServiceResult, render_page};

/// Loads the requested page of stored documents.
pub fn load_documents_page<R>(
    repo: &R,
    form: DocumentsQueryForm,
    defaults: &ListDefaults,
) -> ServiceResult<ListPageData<Document>>
where
    R: DocumentReader + ?Sized,
{
    let state = form.into_state(defaults).map_err(|err| {
        log::error!("Invalid documents query: {err}");
        err
    })?;

    let documents = repo.list_documents().map_err(|err| {
        log::error!("Failed to load documents: {err}");
        err
    })?;

    Ok(render_page(documents, &state))
}
