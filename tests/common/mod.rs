//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use dirsearch::EngineConfig;
use tempfile::TempDir;

/// Builder for directory trees to index, paired with a separate snapshot directory
pub struct TreeBuilder {
    root: TempDir,
    cache: TempDir,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().expect("Failed to create temp dir"),
            cache: TempDir::new().expect("Failed to create cache dir"),
        }
    }

    /// Add a file (and any missing parent directories) relative to the root
    pub fn file(self, relative: &str) -> Self {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, b"test content").expect("Failed to write file");
        self
    }

    /// Add an empty directory relative to the root
    pub fn dir(self, relative: &str) -> Self {
        fs::create_dir_all(self.root.path().join(relative)).expect("Failed to create dir");
        self
    }

    pub fn build(self) -> TestTree {
        TestTree { root: self.root, cache: self.cache }
    }
}

/// A built tree; both temp directories live as long as this value
pub struct TestTree {
    root: TempDir,
    cache: TempDir,
}

impl TestTree {
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn cache(&self) -> &Path {
        self.cache.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Engine config over this tree with snapshots kept in the cache dir
    pub fn config(&self) -> EngineConfig {
        EngineConfig::new(self.root.path(), Duration::from_secs(60)).with_snapshot_dir(self.cache.path())
    }
}

/// The tree from the search example: a/report.pdf, a/photo.png, b/readme.md
pub fn example_tree() -> TestTree {
    TreeBuilder::new().file("a/report.pdf").file("a/photo.png").file("b/readme.md").build()
}

/// A larger tree with every type tag represented
pub fn realistic_tree() -> TestTree {
    TreeBuilder::new()
        .file("Documents/Taxes 2023/return.pdf")
        .file("Documents/Taxes 2023/receipts.xlsx")
        .file("Documents/notes.md")
        .file("Documents/cover letter.docx")
        .file("Pictures/Holiday/beach.JPG")
        .file("Pictures/Holiday/sunset.png")
        .file("Pictures/avatar.webp")
        .file("Code/project/src/main.rs")
        .file("Code/project/README")
        .file("Code/project/.gitignore")
        .dir("Downloads")
        .dir("Pictures/Screenshots")
        .build()
}
