use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::index_storage::default_snapshot_key;
use crate::indexer::WalkOptions;

/// What to do with a snapshot that loads fine but is older than the timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalenessPolicy {
    /// Any loadable snapshot is used as-is, whatever its age
    #[default]
    TrustCache,
    /// Discard and rebuild a loaded snapshot older than the timeout
    RebuildWhenOlderThanTimeout,
}

/// Engine construction parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub root: PathBuf,
    /// Staleness timeout. Advisory unless the policy says otherwise.
    pub timeout: Duration,
    /// Explicit snapshot file name or path, overriding the key derived from `root`
    pub snapshot_key: Option<String>,
    /// Directory relative snapshot keys resolve against; current directory when unset
    pub snapshot_dir: Option<PathBuf>,
    pub staleness_policy: StalenessPolicy,
    pub follow_links: bool,
}

impl EngineConfig {
    pub fn new(root: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            root: root.into(),
            timeout,
            snapshot_key: None,
            snapshot_dir: None,
            staleness_policy: StalenessPolicy::default(),
            follow_links: false,
        }
    }

    pub fn with_snapshot_key(mut self, key: impl Into<String>) -> Self {
        self.snapshot_key = Some(key.into());
        self
    }

    pub fn with_snapshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.snapshot_dir = Some(dir.into());
        self
    }

    pub fn with_staleness_policy(mut self, policy: StalenessPolicy) -> Self {
        self.staleness_policy = policy;
        self
    }

    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }

    /// Copy of this config pointed at a new root and timeout.
    ///
    /// An explicit snapshot key is dropped, since it named the old root's file.
    pub fn retarget(&self, root: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self { root: root.into(), timeout, snapshot_key: None, ..self.clone() }
    }

    /// Where this config's snapshot lives on disk
    pub fn snapshot_path(&self) -> PathBuf {
        let key = self.snapshot_key.clone().unwrap_or_else(|| default_snapshot_key(&self.root));
        let key_path = Path::new(&key);
        if key_path.is_absolute() {
            return key_path.to_path_buf();
        }
        match &self.snapshot_dir {
            Some(dir) => dir.join(key_path),
            None => key_path.to_path_buf(),
        }
    }

    pub(crate) fn walk_options(&self) -> WalkOptions {
        WalkOptions { follow_links: self.follow_links }
    }
}
