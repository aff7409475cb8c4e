//! Errors surfaced to engine callers.
//!
//! Snapshot load and persist failures never appear here: the engine recovers
//! from both locally (rebuild on a bad load, log on a failed write).

use std::path::PathBuf;

/// Errors returned by [`crate::Engine`] operations
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The root does not exist or is not a directory.
    #[error("Root directory does not exist or is not a directory: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Filtered/structured queries are not implemented.
    #[error("Advanced search is not supported; use plain substring search")]
    AdvancedSearchUnsupported,
}
