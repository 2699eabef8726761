use serde::Deserialize;
use validator::Validate;

use crate::domain::reassignment::ReassignmentEvent;
use crate::domain::types::{AreaType, ReassignmentCategory};
use crate::forms::{CommonParams, FormError, ListDefaults, base_state, category_values};
use crate::list_view::StateFor;

#[derive(Debug, Default, Deserialize, Validate)]
/// Query parameters of the reassignments (cambios de destino) table.
pub struct ReassignmentsQueryForm {
    #[validate(length(max = 100))]
    pub search: Option<String>,
    /// Area type of the destination unit.
    #[serde(default)]
    pub area: Vec<String>,
    #[serde(default)]
    pub deleted: bool,
    pub sort: Option<String>,
    pub dir: Option<String>,
    #[validate(range(min = 1))]
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<usize>,
}

impl ReassignmentsQueryForm {
    pub fn into_state(
        self,
        defaults: &ListDefaults,
    ) -> Result<StateFor<ReassignmentEvent>, FormError> {
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
            ReassignmentCategory::Area,
            category_values::<AreaType>("area", &self.area)?,
        );

        Ok(state.with_page(self.page.unwrap_or(1)))
    }
}
