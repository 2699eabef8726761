use crate::repository::{SnapshotCounts, SnapshotReloader};
use crate::services::ServiceResult;

/// Re-reads the snapshot from its source and reports what was loaded.
pub fn reload_snapshot<R>(repo: &R) -> ServiceResult<SnapshotCounts>
where
    R: SnapshotReloader + ?Sized,
{
    let counts = repo.reload_snapshot().map_err(|err| {
        log::error!("Failed to reload snapshot: {err}");
        err
    })?;

    log::info!(
        "Snapshot reloaded: {} people, {} reassignments, {} documents, {} users, {} leaves",
        counts.people,
        counts.reassignments,
        counts.documents,
        counts.users,
        counts.leaves
    );

    Ok(counts)
}
