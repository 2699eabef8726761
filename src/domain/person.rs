use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    AreaType, IdCardNumber, PersonCategory, PersonId, PersonName, PersonSortField, PersonStatus,
    UnitId, UnitName,
};
use crate::list_view::{Listable, SortKey};

/// Reference to the unit a record is attached to.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UnitRef {
    pub id: UnitId,
    pub name: UnitName,
    pub area: AreaType,
}

/// Embedded reference to a unit member carried by other records.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PersonRef {
    pub id: PersonId,
    pub full_name: PersonName,
    pub id_card: IdCardNumber,
}

/// A member of the unit (funcionario).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Person {
    pub id: PersonId,
    pub full_name: PersonName,
    pub id_card: IdCardNumber,
    pub rank: Option<String>,
    pub status: PersonStatus,
    pub unit: Option<UnitRef>,
    /// Name of the position held, resolved from the position catalogue.
    pub position: Option<String>,
    pub hired_at: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    #[serde(default)]
    pub deleted_at: Option<NaiveDateTime>,
}

#[cfg(test)]
impl Person {
    /// Lightweight reference used when embedding this person elsewhere.
    pub fn to_ref(&self) -> PersonRef {
        PersonRef {
            id: self.id,
            full_name: self.full_name.clone(),
            id_card: self.id_card.clone(),
        }
    }
}

impl Listable for Person {
    type SortField = PersonSortField;
    type Category = PersonCategory;

    fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.full_name.as_str()),
            Some(self.id_card.as_str()),
            self.rank.as_deref(),
            self.unit.as_ref().map(|unit| unit.name.as_str()),
            self.position.as_deref(),
        ]
    }

    fn category_value(&self, category: PersonCategory) -> Option<&'static str> {
        match category {
            PersonCategory::Status => Some(self.status.as_str()),
            PersonCategory::Area => self.unit.as_ref().map(|unit| unit.area.as_str()),
        }
    }

    fn sort_key(&self, field: PersonSortField) -> SortKey<'_> {
        match field {
            PersonSortField::Name => SortKey::Text(Some(self.full_name.as_str())),
            PersonSortField::HiredAt => SortKey::date(self.hired_at),
            PersonSortField::CreatedAt => SortKey::timestamp(Some(self.created_at)),
        }
    }
}
