use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable naming the directory to index
pub const ROOT_ENV: &str = "DIRSEARCH_ROOT";

/// Environment variable naming where snapshot files are kept
pub const SNAPSHOT_DIR_ENV: &str = "DIRSEARCH_SNAPSHOT_DIR";

/// Directory to index: `DIRSEARCH_ROOT`, else the current directory
pub fn get_root_dir() -> Result<PathBuf> {
    match env::var_os(ROOT_ENV) {
        Some(root) if !root.is_empty() => Ok(PathBuf::from(root)),
        _ => env::current_dir().context("Failed to read current directory"),
    }
}

/// Snapshot directory: `DIRSEARCH_SNAPSHOT_DIR`, else the platform cache directory
pub fn default_snapshot_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os(SNAPSHOT_DIR_ENV)
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    let cache_base = dirs::cache_dir().context("Failed to get platform cache directory")?;
    Ok(cache_base.join("dirsearch"))
}
