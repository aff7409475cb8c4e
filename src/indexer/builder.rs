//! Recursive traversal of a root directory into a [`Snapshot`].

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::models::{DirectoryEntry, Snapshot};

/// Traversal options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkOptions {
    /// Descend into symlinked directories. Cycles are still cut by the
    /// canonical-path visited set.
    pub follow_links: bool,
}

/// Walk `root` and record one [`DirectoryEntry`] per directory, root included
///
/// Entries come out depth-first with parents before children, and children
/// sorted by file name, so two builds over an unchanged tree are identical.
///
/// Symlinks that resolve to directories are listed among their parent's
/// subdirectories. They are only descended into when
/// [`WalkOptions::follow_links`] is set.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use dirsearch::indexer::{WalkOptions, build_snapshot};
///
/// let snapshot = build_snapshot(Path::new("/srv/share"), WalkOptions::default());
/// println!("Indexed {} directories", snapshot.directory_count());
/// ```
pub fn build_snapshot(root: &Path, options: WalkOptions) -> Snapshot {
    let started = Instant::now();
    let mut entries: Vec<DirectoryEntry> = Vec::new();
    // Directory path -> position in `entries`
    let mut positions: HashMap<PathBuf, usize> = HashMap::new();
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut skipped = 0usize;

    let mut walker =
        WalkDir::new(root).follow_links(options.follow_links).sort_by_file_name().into_iter();

    while let Some(next) = walker.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(err) => {
                skipped += 1;
                if let Some(path) = err.path() {
                    if err.loop_ancestor().is_some() {
                        // A followed link pointing back at an ancestor is still a child directory
                        record_child(&mut entries, &positions, path, true);
                    } else if fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink()) {
                        // Dangling link under follow_links; listed as a file like an unfollowed walk
                        record_child(&mut entries, &positions, path, false);
                    }
                }
                warn!(error = %err, "Skipping unreadable path during index build");
                continue;
            }
        };

        let path = entry.path();
        let file_type = entry.file_type();
        let descends = file_type.is_dir();
        let is_dir = descends || (file_type.is_symlink() && path.is_dir());

        if entry.depth() > 0 {
            record_child(&mut entries, &positions, path, is_dir);
        }

        if !descends {
            continue;
        }

        let canonical = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        if !visited.insert(canonical) {
            debug!(path = %path.display(), "Directory already visited, not descending");
            walker.skip_current_dir();
            continue;
        }

        positions.insert(path.to_path_buf(), entries.len());
        entries.push(DirectoryEntry::new(path));
    }

    if entries.is_empty() {
        // Root could not be listed at all; keep the snapshot rooted anyway
        entries.push(DirectoryEntry::new(root));
    }

    let snapshot = Snapshot::new(entries);
    info!(
        root = %root.display(),
        directories = snapshot.directory_count(),
        files = snapshot.file_count(),
        skipped,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Built directory snapshot"
    );
    snapshot
}

/// Add `path`'s name to its parent's entry, if the parent was recorded
fn record_child(
    entries: &mut [DirectoryEntry],
    positions: &HashMap<PathBuf, usize>,
    path: &Path,
    is_dir: bool,
) {
    let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
        return;
    };
    let Some(&idx) = positions.get(parent) else {
        return;
    };

    let name = name.to_string_lossy().into_owned();
    if is_dir {
        entries[idx].dirs.push(name);
    } else {
        entries[idx].files.push(name);
    }
}
