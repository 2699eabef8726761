//! Mock repository implementations for isolating services in tests.

use mockall::mock;

use crate::domain::{
    document::Document, leave::Leave, person::Person, reassignment::ReassignmentEvent,
    user::User,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    DocumentReader, LeaveReader, PersonReader, ReassignmentReader, SnapshotCounts,
    SnapshotReloader, UserReader,
};

mock! {
    pub Repository {}

    impl PersonReader for Repository {
        fn list_people(&self) -> RepositoryResult<Vec<Person>>;
    }

    impl ReassignmentReader for Repository {
        fn list_reassignments(&self) -> RepositoryResult<Vec<ReassignmentEvent>>;
    }

    impl DocumentReader for Repository {
        fn list_documents(&self) -> RepositoryResult<Vec<Document>>;
    }

    impl UserReader for Repository {
        fn list_users(&self) -> RepositoryResult<Vec<User>>;
    }

    impl LeaveReader for Repository {
        fn list_leaves(&self) -> RepositoryResult<Vec<Leave>>;
    }

    impl SnapshotReloader for Repository {
        fn reload_snapshot(&self) -> RepositoryResult<SnapshotCounts>;
    }
}
