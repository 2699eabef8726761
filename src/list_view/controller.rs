use crate::list_view::comparator::comparator;
use crate::list_view::paginator::Paginated;
use crate::list_view::{Listable, StateFor};

/// Visible page of a list view together with its count metadata.
pub type ViewResult<T> = Paginated<T>;

/// Applies filter states to an immutable snapshot of records.
#[derive(Debug)]
pub struct ListView<'a, R> {
    records: &'a [R],
}

impl<'a, R: Listable> ListView<'a, R> {
    pub fn new(records: &'a [R]) -> Self {
        Self { records }
    }

    /// Records passing the state's predicate, in the state's sort order.
    ///
    /// The sort is stable, so ties and unsorted views keep snapshot order.
    pub fn filtered(&self, state: &StateFor<R>) -> Vec<&'a R> {
        let predicate = state.predicate();
        let mut visible: Vec<&'a R> = self
            .records
            .iter()
            .filter(|record| predicate.matches(*record))
            .collect();

        let compare = comparator::<R>(state.sort());
        visible.sort_by(|a, b| compare(*a, *b));
        visible
    }

    /// Computes the page the state currently points at.
    pub fn render(&self, state: &StateFor<R>) -> ViewResult<&'a R> {
        let visible = self.filtered(state);
        let result = Paginated::from_sequence(visible, state.page(), state.per_page());

        log::debug!(
            "list view: {} of {} records visible, page {}/{}",
            result.total,
            self.records.len(),
            result.page,
            result.total_pages
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list_view::fixtures::{Row, RowCategory, RowSort, dated, deleted, row};
    use crate::list_view::{FilterState, Listable, Sort};

    type RowState = FilterState<RowSort, RowCategory>;

    fn names(rows: &[&Row]) -> Vec<String> {
        rows.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn five_records_two_deleted() {
        let rows = vec![
            row("a"),
            deleted(row("b")),
            row("c"),
            deleted(row("d")),
            row("e"),
        ];
        let view = ListView::new(&rows);

        let state = RowState::default();
        assert_eq!(view.render(&state).total, 3);

        let state = state.toggle_deleted();
        let result = view.render(&state);
        assert_eq!(result.total, 2);
        assert_eq!(names(&result.items), vec!["b", "d"]);
    }

    #[test]
    fn search_selects_matching_name_only() {
        let rows = vec![row("Ana Lopez"), row("Beto Ruiz")];
        let view = ListView::new(&rows);

        let result = view.render(&RowState::default().with_search("ana"));
        assert_eq!(names(&result.items), vec!["Ana Lopez"]);
    }

    #[test]
    fn sorts_by_date_in_both_directions() {
        let rows = vec![
            dated(row("jan"), 2024, 1, 1),
            dated(row("mar"), 2024, 3, 1),
            dated(row("feb"), 2024, 2, 1),
        ];
        let view = ListView::new(&rows);

        let asc = RowState::default().with_sort(Some(Sort::asc(RowSort::Date)));
        assert_eq!(names(&view.render(&asc).items), vec!["jan", "feb", "mar"]);

        let desc = RowState::default().with_sort(Some(Sort::desc(RowSort::Date)));
        assert_eq!(names(&view.render(&desc).items), vec!["mar", "feb", "jan"]);
    }

    #[test]
    fn unsorted_view_keeps_snapshot_order() {
        let rows = vec![row("c"), row("a"), row("b")];
        let view = ListView::new(&rows);

        assert_eq!(
            names(&view.render(&RowState::default()).items),
            vec!["c", "a", "b"]
        );
    }

    #[test]
    fn paginates_twenty_three_rows() {
        let rows: Vec<Row> = (0..23).map(|i| row(&format!("row {i:02}"))).collect();
        let view = ListView::new(&rows);
        let state = RowState::new(10);

        let sizes: Vec<usize> = (1..=3)
            .map(|page| view.render(&state.clone().with_page(page)).items.len())
            .collect();

        assert_eq!(sizes, vec![10, 10, 3]);
        assert_eq!(view.render(&state).total_pages, 3);
    }

    #[test]
    fn rendering_is_idempotent() {
        let rows = vec![
            dated(row("x"), 2024, 5, 1),
            dated(row("y"), 2024, 5, 1),
            dated(row("z"), 2023, 1, 1),
        ];
        let view = ListView::new(&rows);
        let state = RowState::new(2).sort_by(RowSort::Date);

        assert_eq!(view.render(&state), view.render(&state));
    }

    #[test]
    fn search_splits_live_records_into_matching_and_not() {
        let mut coded = row("Diego Ortiz");
        coded.code = Some("RU-17".to_string());
        let rows = vec![
            row("Beto Ruiz"),
            row("Ana Lopez"),
            coded,
            deleted(row("Carla Ruano")),
            row("Mariana Paz"),
        ];
        let view = ListView::new(&rows);
        let needle = "ru";

        let matched = view.filtered(&RowState::default().with_search(needle));
        assert_eq!(names(&matched), vec!["Beto Ruiz", "Diego Ortiz"]);

        let contains = |r: &Row| {
            r.search_fields()
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(needle))
        };
        for record in rows.iter().filter(|r| !r.is_deleted()) {
            let visible = matched.iter().any(|m| std::ptr::eq(*m, record));
            assert_eq!(visible, contains(record), "{}", record.name);
        }
    }

    #[test]
    fn combines_search_category_and_sort() {
        let mut suspended = row("Ana Suarez");
        suspended.status = "suspended";
        let rows = vec![
            row("Ana Lopez"),
            suspended,
            row("Beto Ruiz"),
            deleted(row("Ana Perez")),
        ];
        let view = ListView::new(&rows);

        let state = RowState::default()
            .with_search("ana")
            .with_category(RowCategory::Status, ["active"])
            .with_sort(Some(Sort::asc(RowSort::Name)));

        assert_eq!(names(&view.render(&state).items), vec!["Ana Lopez"]);
    }
}
