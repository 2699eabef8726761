use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{UserCategory, UserId, UserRole, UserSortField, Username};
use crate::list_view::{Listable, SortKey};

/// Dashboard account.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub role: UserRole,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub deleted_at: Option<NaiveDateTime>,
}

impl Listable for User {
    type SortField = UserSortField;
    type Category = UserCategory;

    fn deleted_at(&self) -> Option<NaiveDateTime> {
        self.deleted_at
    }

    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.username.as_str()),
            self.email.as_deref(),
            self.display_name.as_deref(),
        ]
    }

    fn category_value(&self, category: UserCategory) -> Option<&'static str> {
        match category {
            UserCategory::Role => Some(self.role.as_str()),
        }
    }

    fn sort_key(&self, field: UserSortField) -> SortKey<'_> {
        match field {
            UserSortField::Username => SortKey::Text(Some(self.username.as_str())),
            UserSortField::CreatedAt => SortKey::timestamp(Some(self.created_at)),
        }
    }
}
