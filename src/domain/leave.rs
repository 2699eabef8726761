use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::person::PersonRef;
use crate::domain::types::{LeaveCategory, LeaveId, LeaveKind, LeaveSortField};
use crate::list_view::{Listable, SortKey};

/// Leave of absence (permiso or licencia) granted to a unit member.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Leave {
    pub id: LeaveId,
    pub person: PersonRef,
    pub kind: LeaveKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub deleted_at: Option<NaiveDateTime>,
}

impl Leave {
    /// Length of the leave in calendar days, both ends included.
    ///
    /// Zero when the end date precedes the start date.
    pub fn duration_days(&self) -> i64 {
        ((self.end_date - self.start_date).num_days() + 1).max(0)
    }
}

impl Listable for Leave {
    type SortField = LeaveSortField;
    type Category = LeaveCategory;

    fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.person.full_name.as_str()),
            Some(self.person.id_card.as_str()),
            self.reason.as_deref(),
        ]
    }

    fn category_value(&self, category: LeaveCategory) -> Option<&'static str> {
        match category {
            LeaveCategory::Kind => Some(self.kind.as_str()),
        }
    }

    fn sort_key(&self, field: LeaveSortField) -> SortKey<'_> {
        match field {
            LeaveSortField::StartDate => SortKey::date(Some(self.start_date)),
            LeaveSortField::Person => SortKey::Text(Some(self.person.full_name.as_str())),
            LeaveSortField::Duration => SortKey::Number(Some(self.duration_days())),
        }
    }
}
