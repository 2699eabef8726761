use crate::domain::reassignment::ReassignmentEvent;
use crate::dto::list::ListPageData;
use crate::forms::ListDefaults;
use crate::forms::reassignments::ReassignmentsQueryForm;
use crate::repository::ReassignmentReader;
use crate::services::{ServiceResult, render_page};

/// Loads the requested page of reassignment events.
pub fn load_reassignments_page<R>(
    repo: &R,
    form: ReassignmentsQueryForm,
    defaults: &ListDefaults,
) -> ServiceResult<ListPageData<ReassignmentEvent>>
where
    R: ReassignmentReader + ?Sized,
{
    let state = form.into_state(defaults).map_err(|err| {
        log::error!("Invalid reassignments query: {err}");
        err
    })?;

    let events = repo.list_reassignments().map_err(|err| {
        log::error!("Failed to load reassignments: {err}");
        err
    })?;

    Ok(render_page(events, &state))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::types::{AreaType, ReassignmentId};
    use crate::repository::mock::MockRepository;
    use crate::services::fixtures::{person_ref, timestamp, unit};

    fn event(id: i32, name: &str, day: u32, area: AreaType) -> ReassignmentEvent {
        ReassignmentEvent {
            id: ReassignmentId::new(id).expect("valid id"),
            person: person_ref(id, name),
            from_unit: None,
            to_unit: unit(id, "Destino", area),
            effective_date: NaiveDate::from_ymd_opt(2024, 4, day).expect("valid date"),
            reason: None,
            created_at: timestamp(2024, 4, day),
            deleted_at: None,
        }
    }

    #[test]
    fn default_effective_date_sort_is_newest_first() {
        let mut repo = MockRepository::new();
        repo.expect_list_reassignments().times(1).returning(|| {
            Ok(vec![
                event(1, "Ana Lopez", 3, AreaType::Operational),
                event(2, "Beto Ruiz", 20, AreaType::Operational),
                event(3, "Carla Mendez", 11, AreaType::Administrative),
            ])
        });

        let form = ReassignmentsQueryForm {
            sort: Some("effective_date".to_string()),
            area: vec!["operational".to_string()],
            ..ReassignmentsQueryForm::default()
        };

        let data = load_reassignments_page(&repo, form, &ListDefaults::default())
            .expect("should load page");

        let days: Vec<u32> = data
            .records
            .items
            .iter()
            .map(|e| chrono::Datelike::day(&e.effective_date))
            .collect();
        assert_eq!(days, vec![20, 3]);
    }
}
