use serde::Deserialize;
use validator::Validate;

use crate::domain::document::Document;
use crate::domain::types::{DocumentCategory, DocumentKind};
use crate::forms::{CommonParams, FormError, ListDefaults, base_state, category_values};
use crate::list_view::StateFor;

#[derive(Debug, Default, Deserialize, Validate)]
/// Query parameters of the documents table.
pub struct DocumentsQueryForm {
    #[validate(length(max = 100))]
    pub search: Option<String>,
    #[serde(default)]
    pub kind: Vec<String>,
    #[serde(default)]
    pub deleted: bool,
    pub sort: Option<String>,
    pub dir: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
}

impl DocumentsQueryForm {
    pub fn into_state(self, defaults: &ListDefaults) -> Result<StateFor<Document>, FormError> {
        self.validate()?;

        let state = base_state(
            CommonParams {
                search: self.search.as_deref(),
                deleted: self.deleted,
                sort: self.sort.as_deref(),
                dir: self.dir.as_deref(),
                per_page: self.per_page,
            },
            defaults,
        )?
        .with_category(
            DocumentCategory::Kind,
            category_values::<DocumentKind>("kind", &self.kind)?,
        );

        Ok(state.with_page(self.page.unwrap_or(1)))
    }
}
