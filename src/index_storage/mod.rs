//! Persistent snapshot storage
//!
//! Caches the directory snapshot to disk so later starts skip the walk. One
//! pretty-printed JSON file per root, named by [`default_snapshot_key`] unless
//! an explicit key is configured.
//!
//! Location: the configured snapshot directory
//! - Library default: the current working directory
//! - CLI default: platform cache directory (`~/.cache/dirsearch/` on Linux)

pub mod metadata;
pub mod persistence;

pub use metadata::{SNAPSHOT_VERSION, SnapshotFile, snapshot_age};
pub use persistence::{default_snapshot_key, load_snapshot, save_snapshot};
