//! dirsearch - Index a directory tree and search it by name
//!
//! This library walks a directory subtree once, keeps the hierarchy as an
//! in-memory snapshot (persisted to disk so later starts skip the walk), and
//! answers case-insensitive substring queries against file and directory
//! names. It supports:
//!
//! - Building a snapshot of every directory below a root
//! - Loading and saving that snapshot as a versioned JSON document
//! - Substring search with results grouped by coarse file type
//! - Swapping the live engine when the root or timeout changes
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use dirsearch::{Engine, EngineConfig};
//!
//! let config = EngineConfig::new("/home/alice/Documents", Duration::from_secs(60));
//! let engine = Engine::new(config)?;
//! for result in engine.search("report") {
//!     println!("{} {}", result.file_type, result.path.display());
//! }
//! # Ok::<(), dirsearch::EngineError>(())
//! ```

pub mod classifier;
pub mod cli;
pub mod clipboard;
pub mod engine;
pub mod error;
pub mod index_storage;
pub mod indexer;
pub mod models;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use classifier::classify;
pub use engine::{Engine, EngineConfig, EngineHandle, IndexStats, SnapshotOrigin, StalenessPolicy};
pub use error::EngineError;
pub use models::{DirectoryEntry, FileType, SearchResult, Snapshot, TypeFilter};
