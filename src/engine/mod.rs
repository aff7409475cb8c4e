//! The index engine: owns one snapshot and answers queries against it.
//!
//! An [`Engine`] is immutable once constructed. Changing the root or the
//! timeout means building a new engine ([`Engine::rebuild`]) and swapping it
//! in, which [`EngineHandle`] does for callers that share one engine across
//! threads.

mod config;
mod handle;
pub mod search;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::{DateTime, Utc};
pub use config::{EngineConfig, StalenessPolicy};
pub use handle::EngineHandle;
use tracing::{debug, info, warn};

use crate::error::EngineError;
use crate::index_storage::{load_snapshot, save_snapshot, snapshot_age};
use crate::indexer::build_snapshot;
use crate::models::{SearchResult, Snapshot, TypeFilter};

/// Where the live snapshot came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotOrigin {
    /// Read from the snapshot file
    Loaded,
    /// Walked from disk during construction
    Built,
}

/// Summary of the engine's snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub root: PathBuf,
    pub snapshot_path: PathBuf,
    pub directories: usize,
    pub files: usize,
    pub built_at: DateTime<Utc>,
    pub origin: SnapshotOrigin,
    pub stale: bool,
}

#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    snapshot: Snapshot,
    origin: SnapshotOrigin,
}

impl Engine {
    /// Validate the root, then load the snapshot file or build and persist a new one
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RootNotFound`] if the root is missing or not a
    /// directory. Snapshot load and save problems are logged, never returned.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let config = EngineConfig { root: validate_root(&config.root)?, ..config };
        let snapshot_path = config.snapshot_path();

        let cached = match load_snapshot(&snapshot_path, &config.root) {
            Ok(Some(snapshot)) => accept_cached(&config, snapshot),
            Ok(None) => {
                debug!(path = %snapshot_path.display(), "No usable snapshot file");
                None
            }
            Err(e) => {
                warn!(error = %format!("{:#}", e), "Snapshot load failed, rebuilding index");
                None
            }
        };

        match cached {
            Some(snapshot) => {
                info!(
                    root = %config.root.display(),
                    path = %snapshot_path.display(),
                    directories = snapshot.directory_count(),
                    "Loaded snapshot"
                );
                Ok(Self { config, snapshot, origin: SnapshotOrigin::Loaded })
            }
            None => Ok(Self::build(config)),
        }
    }

    /// Construct with a fresh walk, ignoring any snapshot file
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RootNotFound`] if the root is missing or not a directory.
    pub fn new_rebuilt(config: EngineConfig) -> Result<Self, EngineError> {
        let config = EngineConfig { root: validate_root(&config.root)?, ..config };
        Ok(Self::build(config))
    }

    fn build(config: EngineConfig) -> Self {
        let snapshot = build_snapshot(&config.root, config.walk_options());
        let engine = Self { config, snapshot, origin: SnapshotOrigin::Built };
        engine.persist();
        engine
    }

    /// Write the snapshot file. Failures are logged; the in-memory snapshot stays usable.
    fn persist(&self) {
        let path = self.config.snapshot_path();
        match save_snapshot(&path, &self.config.root, &self.snapshot) {
            Ok(()) => debug!(path = %path.display(), "Saved snapshot"),
            Err(e) => warn!(
                path = %path.display(),
                error = %format!("{:#}", e),
                "Failed to save snapshot; continuing with in-memory index"
            ),
        }
    }

    /// New engine for another root and timeout; `self` is left untouched
    ///
    /// Settings other than root, timeout and the explicit snapshot key carry over.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RootNotFound`] if `new_root` is missing or not a directory.
    pub fn rebuild(&self, new_root: impl Into<PathBuf>, new_timeout: Duration) -> Result<Self, EngineError> {
        Self::new(self.config.retarget(new_root, new_timeout))
    }

    /// New engine over the same config with a fresh walk
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RootNotFound`] if the root has disappeared since construction.
    pub fn refresh(&self) -> Result<Self, EngineError> {
        Self::new_rebuilt(self.config.clone())
    }

    /// Case-insensitive substring search over file and directory names
    ///
    /// Results are grouped by type tag (directories, documents, images, other),
    /// keeping discovery order within each group. An empty or whitespace-only
    /// query returns no results.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let mut results = search::scan(&self.snapshot, query);
        search::group_by_type(&mut results);
        debug!(query, results = results.len(), "Search complete");
        results
    }

    /// [`Engine::search`], keeping only the groups `filter` selects
    pub fn search_filtered(&self, query: &str, filter: TypeFilter) -> Vec<SearchResult> {
        let mut results = self.search(query);
        results.retain(|r| filter.matches(r.file_type));
        results
    }

    /// Structured queries are not implemented
    ///
    /// # Errors
    ///
    /// Always returns [`EngineError::AdvancedSearchUnsupported`].
    pub fn advanced_search(
        &self,
        _query: &str,
        _options: &HashMap<String, String>,
    ) -> Result<Vec<SearchResult>, EngineError> {
        Err(EngineError::AdvancedSearchUnsupported)
    }

    /// Whether the snapshot is older than the configured timeout. Advisory only.
    pub fn is_stale(&self) -> bool {
        snapshot_age(self.snapshot.built_at) > self.config.timeout
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            root: self.config.root.clone(),
            snapshot_path: self.config.snapshot_path(),
            directories: self.snapshot.directory_count(),
            files: self.snapshot.file_count(),
            built_at: self.snapshot.built_at,
            origin: self.origin,
            stale: self.is_stale(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.config.root
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn origin(&self) -> SnapshotOrigin {
        self.origin
    }
}

/// Absolute form of `root`, provided it is an existing directory
fn validate_root(root: &Path) -> Result<PathBuf, EngineError> {
    if !root.is_dir() {
        return Err(EngineError::RootNotFound(root.to_path_buf()));
    }
    std::path::absolute(root).map_err(|_| EngineError::RootNotFound(root.to_path_buf()))
}

/// Apply the staleness policy to a snapshot that loaded successfully
fn accept_cached(config: &EngineConfig, snapshot: Snapshot) -> Option<Snapshot> {
    match config.staleness_policy {
        StalenessPolicy::TrustCache => Some(snapshot),
        StalenessPolicy::RebuildWhenOlderThanTimeout => {
            let age = snapshot_age(snapshot.built_at);
            if age > config.timeout {
                info!(
                    age_secs = age.as_secs(),
                    timeout_secs = config.timeout.as_secs(),
                    "Snapshot older than timeout, rebuilding index"
                );
                None
            } else {
                Some(snapshot)
            }
        }
    }
}
