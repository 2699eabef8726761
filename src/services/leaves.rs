use crate::dto::leaves::LeaveRow;
use crate::dto::list::ListPageData;
use crate::forms::ListDefaults;
use crate::forms::leaves::LeavesQueryForm;
use crate::list_view::ListView;
use crate::repository::LeaveReader;
use crate::services::ServiceResult;

/// Loads the requested page of leaves with their durations.
pub fn load_leaves_page<R>(
    repo: &R,
    form: LeavesQueryForm,
    defaults: &ListDefaults,
) -> ServiceResult<ListPageData<LeaveRow>>
where
    R: LeaveReader + ?Sized,
{
    let state = form.into_state(defaults).map_err(|err| {
        log::error!("Invalid leaves query: {err}");
        err
    })?;

    let leaves = repo.list_leaves().map_err(|err| {
        log::error!("Failed to load leaves: {err}");
        err
    })?;

    let page = ListView::new(&leaves)
        .render(&state)
        .map(|leave| LeaveRow::from(leave.clone()));

    Ok(ListPageData::new(page, &state))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::domain::leave::Leave;
    use crate::domain::types::{LeaveId, LeaveKind};
    use crate::repository::mock::MockRepository;
    use crate::services::fixtures::{person_ref, timestamp};

    fn leave(id: i32, kind: LeaveKind, start: u32, end: u32) -> Leave {
        Leave {
            id: LeaveId::new(id).expect("valid id"),
            person: person_ref(id, "Ana Lopez"),
            kind,
            start_date: NaiveDate::from_ymd_opt(2024, 7, start).expect("valid date"),
            end_date: NaiveDate::from_ymd_opt(2024, 7, end).expect("valid date"),
            reason: None,
            created_at: timestamp(2024, 6, 1),
            deleted_at: None,
        }
    }

    #[test]
    fn longest_leave_comes_first() {
        let mut repo = MockRepository::new();
        repo.expect_list_leaves().times(1).returning(|| {
            Ok(vec![
                leave(1, LeaveKind::Annual, 1, 3),
                leave(2, LeaveKind::Medical, 5, 19),
                leave(3, LeaveKind::Annual, 10, 10),
            ])
        });

        let form = LeavesQueryForm {
            sort: Some("duration".to_string()),
            ..LeavesQueryForm::default()
        };

        let data =
            load_leaves_page(&repo, form, &ListDefaults::default()).expect("should load page");

        let durations: Vec<i64> = data.records.items.iter().map(|row| row.duration_days).collect();
        assert_eq!(durations, vec![15, 3, 1]);
    }
}
