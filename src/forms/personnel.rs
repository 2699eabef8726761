use serde::Deserialize;
use validator::Validate;

use crate::domain::person::Person;
use crate::domain::types::{AreaType, PersonCategory, PersonStatus};
use crate::forms::{CommonParams, FormError, ListDefaults, base_state, category_values};
use crate::list_view::StateFor;

#[derive(Debug, Default, Deserialize, Validate)]
/// Query parameters of the personnel table.
pub struct PersonnelQueryForm {
    /// Matched against name, id card, rank, unit and position.
    #[validate(length(max = 100))]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default)]
    pub area: Vec<String>,
    /// Show only soft-deleted members instead of live ones.
    #[serde(default)]
    pub deleted: bool,
    pub sort: Option<String>,
    pub dir: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
}

impl PersonnelQueryForm {
    pub fn into_state(self, defaults: &ListDefaults) -> Result<StateFor<Person>, FormError> {
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
            PersonCategory::Status,
            category_values::<PersonStatus>("status", &self.status)?,
        )
        .with_category(
            PersonCategory::Area,
            category_values::<AreaType>("area", &self.area)?,
        );

        Ok(state.with_page(self.page.unwrap_or(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::PersonSortField;
    use crate::list_view::Sort;

    #[test]
    fn builds_state_from_query() {
        let form = PersonnelQueryForm {
            search: Some(" Lopez ".to_string()),
            status: vec!["active".to_string(), "on_leave".to_string()],
            sort: Some("name".to_string()),
            dir: Some("asc".to_string()),
            page: Some(2),
            per_page: Some(10),
            ..PersonnelQueryForm::default()
        };

        let state = form.into_state(&ListDefaults::default()).unwrap();

        assert_eq!(state.page(), 2);
        assert_eq!(state.per_page(), 10);
        assert_eq!(state.sort(), Some(Sort::asc(PersonSortField::Name)));
        assert_eq!(
            state.categories()[&PersonCategory::Status].len(),
            2
        );
        assert!(!state.categories().contains_key(&PersonCategory::Area));
    }

    #[test]
    fn rejects_oversized_pages() {
        let form = PersonnelQueryForm {
            per_page: Some(500),
            ..PersonnelQueryForm::default()
        };

        assert!(matches!(
            form.into_state(&ListDefaults::default()),
            Err(FormError::Validation(_))
        ));
    }

    #[test]
    fn rejects_unknown_status() {
        let form = PersonnelQueryForm {
            status: vec!["dismissed".to_string()],
            ..PersonnelQueryForm::default()
        };

        assert!(matches!(
            form.into_state(&ListDefaults::default()),
            Err(FormError::InvalidCategory { .. })
        ));
    }
}
