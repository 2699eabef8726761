//! DTOs used by the leaves table.

use serde::Serialize;

use crate::domain::leave::Leave;

/// A leave together with its display duration.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LeaveRow {
    #[serde(flatten)]
    pub leave: Leave,
    pub duration_days: i64,
}

impl From<Leave> for LeaveRow {
    fn from(leave: Leave) -> Self {
        let duration_days = leave.duration_days();
        Self {
            leave,
            duration_days,
        }
    }
}
