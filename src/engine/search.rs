//! Query evaluation over a snapshot and result grouping.

use std::path::Path;

use rayon::prelude::*;

use crate::classifier::classify;
use crate::models::{DirectoryEntry, SearchResult, Snapshot};

/// Scan every entry for names containing `query`, case-insensitively
///
/// Results come out in snapshot order; within one directory, file matches
/// precede subdirectory matches. A blank query matches nothing.
pub fn scan(snapshot: &Snapshot, query: &str) -> Vec<SearchResult> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let needle = query.to_lowercase();

    // Indexed map + collect keeps snapshot order
    let per_entry: Vec<Vec<SearchResult>> =
        snapshot.entries.par_iter().map(|entry| matches_in(entry, &needle)).collect();
    per_entry.into_iter().flatten().collect()
}

/// Stable-sort results into type-tag groups, keeping scan order within a group
pub fn group_by_type(results: &mut [SearchResult]) {
    if results.len() <= 1 {
        return;
    }
    results.sort_by_key(|r| r.file_type);
}

fn matches_in(entry: &DirectoryEntry, needle: &str) -> Vec<SearchResult> {
    let mut results = Vec::new();

    for file in &entry.files {
        if file.to_lowercase().contains(needle) {
            let name = Path::new(file)
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.clone());
            results.push(make_result(entry, file, name));
        }
    }

    for dir in &entry.dirs {
        if dir.to_lowercase().contains(needle) {
            results.push(make_result(entry, dir, dir.clone()));
        }
    }

    results
}

fn make_result(entry: &DirectoryEntry, child: &str, name: String) -> SearchResult {
    let path = entry.path.join(child);
    // Live check: the type reflects the disk now, not the snapshot
    let file_type = classify(&path);
    SearchResult { name, path, file_type }
}
