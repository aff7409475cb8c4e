use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Coarse classification of a path.
///
/// Variant order is the grouping order used when sorting search results.
/// The serialized names are the values the front end expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FileType {
    #[serde(rename = "dir")]
    Directory,
    #[serde(rename = "doc")]
    Document,
    #[serde(rename = "img")]
    Image,
    #[serde(rename = "any")]
    Other,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Directory => "dir",
            Self::Document => "doc",
            Self::Image => "img",
            Self::Other => "any",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single name match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Base name, extension stripped for files
    pub name: String,
    /// Parent directory joined with the matched name
    pub path: PathBuf,
    pub file_type: FileType,
}

/// Which result groups to keep (the front end's All/Documents/Images tabs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Documents,
    Images,
}

impl TypeFilter {
    pub fn matches(&self, file_type: FileType) -> bool {
        match self {
            Self::All => true,
            Self::Documents => file_type == FileType::Document,
            Self::Images => file_type == FileType::Image,
        }
    }

    /// Cycle to the next tab
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Documents,
            Self::Documents => Self::Images,
            Self::Images => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Documents => "Documents",
            Self::Images => "Images",
        }
    }
}

impl FromStr for TypeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" | "any" => Ok(Self::All),
            "doc" | "docs" | "documents" => Ok(Self::Documents),
            "img" | "image" | "images" => Ok(Self::Images),
            other => Err(format!("Invalid type filter '{}'. Use: all, doc, img", other)),
        }
    }
}
