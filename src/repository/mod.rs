//! Read access to record snapshots.
//!
//! Records are owned by the remote personnel API; this crate only ever sees
//! a read-only copy. Readers are split per record kind so services can ask
//! for exactly what they render.

use crate::domain::{
    document::Document, leave::Leave, person::Person, reassignment::ReassignmentEvent,
    user::User,
};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;
pub mod snapshot;

pub use snapshot::{Snapshot, SnapshotCounts, SnapshotRepository};

pub trait PersonReader {
    fn list_people(&self) -> RepositoryResult<Vec<Person>>;
}

pub trait ReassignmentReader {
    fn list_reassignments(&self) -> RepositoryResult<Vec<ReassignmentEvent>>;
}

pub trait DocumentReader {
    fn list_documents(&self) -> RepositoryResult<Vec<Document>>;
}

pub trait UserReader {
    fn list_users(&self) -> RepositoryResult<Vec<User>>;
}

pub trait LeaveReader {
    fn list_leaves(&self) -> RepositoryResult<Vec<Leave>>;
}

pub trait SnapshotReloader {
    /// Replaces the cached snapshot with a fresh copy from its source.
    fn reload_snapshot(&self) -> RepositoryResult<SnapshotCounts>;
}
