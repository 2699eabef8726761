//! Snapshot-backed repository reading JSON exports of the personnel API.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{
    document::Document, leave::Leave, person::Person, reassignment::ReassignmentEvent,
    user::User,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    DocumentReader, LeaveReader, PersonReader, ReassignmentReader, SnapshotReloader, UserReader,
};

pub const PERSONNEL_FILE: &str = "personnel.json";
pub const REASSIGNMENTS_FILE: &str = "reassignments.json";
pub const DOCUMENTS_FILE: &str = "documents.json";
pub const USERS_FILE: &str = "users.json";
pub const LEAVES_FILE: &str = "leaves.json";

/// One fetch cycle worth of records, including soft-deleted ones.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub people: Vec<Person>,
    pub reassignments: Vec<ReassignmentEvent>,
    pub documents: Vec<Document>,
    pub users: Vec<User>,
    pub leaves: Vec<Leave>,
}

/// Number of records per kind held by a snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotCounts {
    pub people: usize,
    pub reassignments: usize,
    pub documents: usize,
    pub users: usize,
    pub leaves: usize,
}

impl Snapshot {
    /// Reads every collection from `dir`.
    ///
    /// A missing file yields an empty collection; unreadable or malformed
    /// files are errors.
    pub fn load(dir: &Path) -> RepositoryResult<Self> {
        Ok(Self {
            people: load_collection(dir, PERSONNEL_FILE)?,
            reassignments: load_collection(dir, REASSIGNMENTS_FILE)?,
            documents: load_collection(dir, DOCUMENTS_FILE)?,
            users: load_collection(dir, USERS_FILE)?,
            leaves: load_collection(dir, LEAVES_FILE)?,
        })
    }

    pub fn counts(&self) -> SnapshotCounts {
        SnapshotCounts {
            people: self.people.len(),
            reassignments: self.reassignments.len(),
            documents: self.documents.len(),
            users: self.users.len(),
            leaves: self.leaves.len(),
        }
    }
}

fn load_collection<T: DeserializeOwned>(dir: &Path, file: &str) -> RepositoryResult<Vec<T>> {
    let path = dir.join(file);
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::warn!("Snapshot file {} is missing, using an empty list", path.display());
            return Ok(Vec::new());
        }
        Err(err) => {
            log::error!("Failed to read {}: {err}", path.display());
            return Err(err.into());
        }
    };

    serde_json::from_str(&raw).map_err(|err| {
        log::error!("Failed to parse {}: {err}", path.display());
        RepositoryError::DeserializationError(format!("{file}: {err}"))
    })
}

/// Repository serving an immutable snapshot shared across threads.
///
/// Readers clone the collection they need out of the current snapshot;
/// [`SnapshotReloader::reload_snapshot`] swaps in a new one atomically.
#[derive(Clone, Debug)]
pub struct SnapshotRepository {
    data_dir: Option<PathBuf>,
    current: Arc<RwLock<Arc<Snapshot>>>,
}

impl SnapshotRepository {
    /// Loads the initial snapshot from `data_dir`.
    pub fn open(data_dir: impl Into<PathBuf>) -> RepositoryResult<Self> {
        let data_dir = data_dir.into();
        let snapshot = Snapshot::load(&data_dir)?;
        log::info!(
            "Loaded snapshot from {}: {:?}",
            data_dir.display(),
            snapshot.counts()
        );

        Ok(Self {
            data_dir: Some(data_dir),
            current: Arc::new(RwLock::new(Arc::new(snapshot))),
        })
    }

    /// Serves a fixed in-memory snapshot that cannot be reloaded.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            data_dir: None,
            current: Arc::new(RwLock::new(Arc::new(snapshot))),
        }
    }

    pub fn snapshot(&self) -> RepositoryResult<Arc<Snapshot>> {
        self.current
            .read()
            .map(|guard| Arc::clone(&guard))
            .map_err(|_| RepositoryError::Unexpected("snapshot lock poisoned".to_string()))
    }
}

impl SnapshotReloader for SnapshotRepository {
    fn reload_snapshot(&self) -> RepositoryResult<SnapshotCounts> {
        let Some(data_dir) = &self.data_dir else {
            return Err(RepositoryError::Unexpected(
                "snapshot is not backed by a data directory".to_string(),
            ));
        };

        let snapshot = Snapshot::load(data_dir)?;
        let counts = snapshot.counts();

        let mut guard = self
            .current
            .write()
            .map_err(|_| RepositoryError::Unexpected("snapshot lock poisoned".to_string()))?;
        *guard = Arc::new(snapshot);

        log::info!("Reloaded snapshot from {}: {counts:?}", data_dir.display());
        Ok(counts)
    }
}

impl PersonReader for SnapshotRepository {
    fn list_people(&self) -> RepositoryResult<Vec<Person>> {
        Ok(self.snapshot()?.people.clone())
    }
}

impl ReassignmentReader for SnapshotRepository {
    fn list_reassignments(&self) -> RepositoryResult<Vec<ReassignmentEvent>> {
        Ok(self.snapshot()?.reassignments.clone())
    }
}

impl DocumentReader for SnapshotRepository {
    fn list_documents(&self) -> RepositoryResult<Vec<Document>> {
        Ok(self.snapshot()?.documents.clone())
    }
}

impl UserReader for SnapshotRepository {
    fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.snapshot()?.users.clone())
    }
}

impl LeaveReader for SnapshotRepository {
    fn list_leaves(&self) -> RepositoryResult<Vec<Leave>> {
        Ok(self.snapshot()?.leaves.clone())
    }
}
