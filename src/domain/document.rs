use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::person::PersonRef;
use crate::domain::types::{DocumentCategory, DocumentId, DocumentKind, DocumentSortField, DocumentTitle};
use crate::list_view::{Listable, SortKey};

/// A file stored for the unit, optionally attached to a member.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub title: DocumentTitle,
    pub file_name: Option<String>,
    pub kind: DocumentKind,
    pub owner: Option<PersonRef>,
    pub uploaded_at: NaiveDateTime,
    #[serde(default)]
    pub deleted_at: Option<NaiveDateTime>,
}

impl Listable for Document {
    type SortField = DocumentSortField;
    type Category = DocumentCategory;

    fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        let owner = self.owner.as_ref();
        vec![
            Some(self.title.as_str()),
            self.file_name.as_deref(),
            owner.map(|person| person.full_name.as_str()),
            owner.map(|person| person.id_card.as_str()),
        ]
    }

    fn category_value(&self, category: DocumentCategory) -> Option<&'static str> {
        match category {
            DocumentCategory::Kind => Some(self.kind.as_str()),
        }
    }

    fn sort_key(&self, field: DocumentSortField) -> SortKey<'_> {
        match field {
            DocumentSortField::UploadedAt => SortKey::timestamp(Some(self.uploaded_at)),
            DocumentSortField::Title => SortKey::Text(Some(self.title.as_str())),
        }
    }
}
