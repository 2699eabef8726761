//! Services backing the personnel table.

use crate::domain::person::Person;
use crate::dto::list::ListPageData;
use crate::forms::ListDefaults;
use crate::forms::personnel::PersonnelQueryForm;
use crate::repository::PersonReader;
use crate::services::{ServiceResult, render_page};

/// Loads the requested page of unit members.
pub fn load_personnel_page<R>(
    repo: &R,
    form: PersonnelQueryForm,
    defaults: &ListDefaults,
) -> ServiceResult<ListPageData<Person>>
where
    R: PersonReader + ?Sized,
{
    let state = form.into_state(defaults).map_err(|err| {
        log::error!("Invalid personnel query: {err}");
        err
    })?;

    let people = repo.list_people().map_err(|err| {
        log::error!("Failed to load personnel: {err}");
        err
    })?;

    Ok(render_page(people, &state))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::types::{AreaType, PersonStatus};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;
    use crate::services::fixtures::{person, timestamp, unit};

    fn roster() -> Vec<Person> {
        let mut suspended = person(3, "Carla Mendez");
        suspended.status = PersonStatus::Suspended;
        suspended.unit = Some(unit(2, "Logistica", AreaType::Administrative));

        let mut removed = person(4, "Ana Torres");
        removed.deleted_at = Some(timestamp(2024, 2, 1));

        vec![
            person(1, "Beto Ruiz"),
            person(2, "Ana Lopez"),
            suspended,
            removed,
        ]
    }

    #[test]
    fn lists_live_members_sorted_by_name() {
        let mut repo = MockRepository::new();
        repo.expect_list_people().times(1).returning(|| Ok(roster()));

        let form = PersonnelQueryForm {
            sort: Some("name".to_string()),
            dir: Some("asc".to_string()),
            ..PersonnelQueryForm::default()
        };

        let data = load_personnel_page(&repo, form, &ListDefaults::default())
            .expect("should load page");

        let names: Vec<&str> = data
            .records
            .items
            .iter()
            .map(|p| p.full_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ana Lopez", "Beto Ruiz", "Carla Mendez"]);
        assert_eq!(data.sort.as_deref(), Some("name"));
        assert!(!data.show_deleted);
    }

    #[test]
    fn filters_by_area_and_search() {
        let mut repo = MockRepository::new();
        repo.expect_list_people().returning(|| Ok(roster()));

        let form = PersonnelQueryForm {
            search: Some("logist".to_string()),
            area: vec!["administrative".to_string()],
            ..PersonnelQueryForm::default()
        };

        let data = load_personnel_page(&repo, form, &ListDefaults::default())
            .expect("should load page");

        assert_eq!(data.records.total, 1);
        assert_eq!(data.records.items[0].full_name.as_str(), "Carla Mendez");
        assert_eq!(data.search_query.as_deref(), Some("logist"));
        assert_eq!(data.categories["area"], vec!["administrative".to_string()]);
    }

    #[test]
    fn shows_only_deleted_members_when_requested() {
        let mut repo = MockRepository::new();
        repo.expect_list_people().returning(|| Ok(roster()));

        let form = PersonnelQueryForm {
            deleted: true,
            ..PersonnelQueryForm::default()
        };

        let data = load_personnel_page(&repo, form, &ListDefaults::default())
            .expect("should load page");

        assert_eq!(data.records.total, 1);
        assert_eq!(data.records.items[0].full_name.as_str(), "Ana Torres");
        assert!(data.show_deleted);
    }

    #[test]
    fn invalid_query_skips_repository() {
        let mut repo = MockRepository::new();
        repo.expect_list_people().times(0);

        let form = PersonnelQueryForm {
            status: vec!["unknown".to_string()],
            ..PersonnelQueryForm::default()
        };

        let result = load_personnel_page(&repo, form, &ListDefaults::default());

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn repository_failure_is_propagated() {
        let mut repo = MockRepository::new();
        repo.expect_list_people()
            .returning(|| Err(RepositoryError::IoError("disk gone".to_string())));

        let result =
            load_personnel_page(&repo, PersonnelQueryForm::default(), &ListDefaults::default());

        assert!(matches!(result, Err(ServiceError::Repository(_))));
    }
}
