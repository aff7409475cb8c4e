//! Snapshot persistence: key derivation and load/save with atomic writes

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use super::metadata::{SNAPSHOT_VERSION, SnapshotFile};
use crate::models::Snapshot;

const SNAPSHOT_EXTENSION: &str = "json";

/// Derive the snapshot file name for a root directory
///
/// Lowercases the path and replaces spaces and both separator styles with
/// `_`, so the same root always maps to the same file.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use dirsearch::index_storage::default_snapshot_key;
///
/// assert_eq!(default_snapshot_key(Path::new("/Home/My Docs")), "_home_my_docs.json");
/// ```
pub fn default_snapshot_key(root: &Path) -> String {
    let flattened: String = root
        .to_string_lossy()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("{}.{}", flattened, SNAPSHOT_EXTENSION)
}

/// Load the snapshot for `root` from `path`
///
/// Returns `Ok(None)` if the file is missing, was written with another
/// schema version, or belongs to a different root (distinct roots can
/// flatten to the same key). The caller should rebuild in all three cases.
/// Unreadable or malformed files are errors; the engine treats those as a
/// cache miss too.
pub fn load_snapshot(path: &Path, root: &Path) -> Result<Option<Snapshot>> {
    if !path.is_file() {
        return Ok(None);
    }

    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
    let file: SnapshotFile = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))?;

    if file.version != SNAPSHOT_VERSION {
        warn!(
            expected = SNAPSHOT_VERSION,
            found = file.version,
            path = %path.display(),
            "Snapshot version mismatch, rebuilding index"
        );
        return Ok(None);
    }

    if file.root.as_path() != root {
        warn!(
            expected = %root.display(),
            found = %file.root.display(),
            path = %path.display(),
            "Snapshot belongs to another root, rebuilding index"
        );
        return Ok(None);
    }

    Ok(Some(file.into_snapshot()))
}

/// Save a snapshot to `path` atomically (temp file + rename)
pub fn save_snapshot(path: &Path, root: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create snapshot directory: {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(&SnapshotFile::from_snapshot(root, snapshot))
        .context("Failed to serialize snapshot")?;

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    fs::write(temp_path, json).context("Failed to write snapshot temp file")?;
    if let Err(e) = fs::rename(temp_path, path) {
        let _ = fs::remove_file(temp_path);
        return Err(e).context("Failed to rename snapshot temp file");
    }

    Ok(())
}
