//! Snapshot building for a directory subtree
//!
//! # Error Handling Strategy
//!
//! The walk degrades gracefully rather than failing:
//!
//! - **Unreadable directories**: Logged with `warn!` and skipped. The directory itself still
//!   gets an entry (it was visited), just with whatever children could be listed.
//!
//! - **Symlink cycles**: Directories are tracked by canonical path. A directory reached a
//!   second time is listed by its parent but never gets a second entry or a second descent.
//!
//! - **Summary reporting**: An `info!` line reports directory and file counts per build.

pub mod builder;

pub use builder::{WalkOptions, build_snapshot};
