use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::person::{PersonRef, UnitRef};
use crate::domain::types::{ReassignmentCategory, ReassignmentId, ReassignmentSortField};
use crate::list_view::{Listable, SortKey};

/// Transfer of a unit member to another unit (cambio de destino).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReassignmentEvent {
    pub id: ReassignmentId,
    pub person: PersonRef,
    /// Unit the person leaves. `None` for first postings.
    pub from_unit: Option<UnitRef>,
    pub to_unit: UnitRef,
    pub effective_date: NaiveDate,
    pub reason: Option<String>,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub deleted_at: Option<NaiveDateTime>,
}

impl Listable for ReassignmentEvent {
    type SortField = ReassignmentSortField;
    type Category = ReassignmentCategory;

    fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.person.full_name.as_str()),
            Some(self.person.id_card.as_str()),
            self.from_unit.as_ref().map(|unit| unit.name.as_str()),
            Some(self.to_unit.name.as_str()),
            self.reason.as_deref(),
        ]
    }

    fn category_value(&self, category: ReassignmentCategory) -> Option<&'static str> {
        match category {
            ReassignmentCategory::Area => Some(self.to_unit.area.as_str()),
        }
    }

    fn sort_key(&self, field: ReassignmentSortField) -> SortKey<'_> {
        match field {
            ReassignmentSortField::EffectiveDate => SortKey::date(Some(self.effective_date)),
            ReassignmentSortField::Person => SortKey::Text(Some(self.person.full_name.as_str())),
        }
    }
}
