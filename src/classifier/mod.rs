//! Path classification into coarse type tags.
//!
//! Directories are detected with a live filesystem check; everything else is
//! decided from the extension alone, so the path does not need to exist.

use std::path::Path;

use crate::models::FileType;

/// Extensions classified as documents (leading dot included)
pub const DOCUMENT_EXTENSIONS: &[&str] = &[
    ".docx", ".doc", ".odt", ".pdf", ".gdoc", ".xls", ".xlsx", ".ods", ".ppt", ".pptx", ".md",
    ".gslides", ".gsheets",
];

/// Extensions classified as images (leading dot included)
pub const IMAGE_EXTENSIONS: &[&str] = &[".gif", ".png", ".jpg", ".jpeg", ".webp", ".tiff", ".psd", ".ai"];

/// Classify a path as a directory, document, image or other file
///
/// # Examples
///
/// ```
/// use dirsearch::{classify, FileType};
///
/// assert_eq!(classify("/nowhere/notes.PDF"), FileType::Document);
/// assert_eq!(classify("/nowhere/photo.png"), FileType::Image);
/// assert_eq!(classify("/nowhere/build.log"), FileType::Other);
/// ```
pub fn classify(path: impl AsRef<Path>) -> FileType {
    let path = path.as_ref();
    if path.is_dir() {
        return FileType::Directory;
    }

    let extension = dotted_extension(path);
    if DOCUMENT_EXTENSIONS.contains(&extension.as_str()) {
        FileType::Document
    } else if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        FileType::Image
    } else {
        FileType::Other
    }
}

/// Lowercased extension with its leading dot, empty when there is none.
/// Dotfiles such as `.bashrc` have no extension.
fn dotted_extension(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => String::new(),
    }
}
