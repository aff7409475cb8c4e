//! On-disk snapshot envelope and age helpers

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{DirectoryEntry, Snapshot};

/// Snapshot schema version for invalidation on format changes
pub const SNAPSHOT_VERSION: u32 = 1;

/// Top-level snapshot document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub version: u32,
    pub root: PathBuf,
    pub built_at: DateTime<Utc>,
    pub entries: Vec<DirectoryEntry>,
}

impl SnapshotFile {
    pub fn from_snapshot(root: &Path, snapshot: &Snapshot) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            root: root.to_path_buf(),
            built_at: snapshot.built_at,
            entries: snapshot.entries.clone(),
        }
    }

    pub fn into_snapshot(self) -> Snapshot {
        Snapshot { entries: self.entries, built_at: self.built_at }
    }
}

/// Time elapsed since `built_at`; zero if the timestamp is in the future
pub fn snapshot_age(built_at: DateTime<Utc>) -> Duration {
    (Utc::now() - built_at).to_std().unwrap_or(Duration::ZERO)
}
