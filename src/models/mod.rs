//! Data models for directory snapshots and search results.
//!
//! - [`DirectoryEntry`] - One visited directory and its immediate children
//! - [`Snapshot`] - The full set of directory entries from one build
//! - [`SearchResult`] - A single name match with its classified type
//! - [`FileType`] - Coarse type tag (`dir`, `doc`, `img`, `any`)
//! - [`TypeFilter`] - Result filter used by the front ends' tabs

pub mod directory;
pub mod search;

pub use directory::{DirectoryEntry, Snapshot};
pub use search::{FileType, SearchResult, TypeFilter};
