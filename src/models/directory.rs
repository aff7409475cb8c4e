use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One directory visited during a walk, with its immediate children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub path: PathBuf,
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

impl DirectoryEntry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), dirs: Vec::new(), files: Vec::new() }
    }
}

/// Complete hierarchy of a subtree as of `built_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub entries: Vec<DirectoryEntry>,
    pub built_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(entries: Vec<DirectoryEntry>) -> Self {
        Self { entries, built_at: Utc::now() }
    }

    pub fn directory_count(&self) -> usize {
        self.entries.len()
    }

    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|e| e.files.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
