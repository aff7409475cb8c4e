//! Copy result paths to the system clipboard.

use std::path::Path;

use anyhow::{Context, Result, bail};
use arboard::Clipboard;

/// Clipboard backend, swappable so tests never touch the real clipboard
trait ClipboardProvider {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

struct SystemClipboard {
    clipboard: Clipboard,
}

impl SystemClipboard {
    fn new() -> Result<Self> {
        let clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        Ok(Self { clipboard })
    }
}

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.clipboard.set_text(text).context("Failed to set clipboard contents")?;
        Ok(())
    }
}

/// Text placed on the clipboard for `path`
fn path_text(path: &Path) -> Result<String> {
    if path.as_os_str().is_empty() {
        bail!("Cannot copy an empty path to clipboard");
    }
    match path.to_str() {
        Some(text) => Ok(text.to_string()),
        None => bail!("Path is not valid UTF-8: {}", path.display()),
    }
}

fn copy_with_provider(path: &Path, provider: &mut dyn ClipboardProvider) -> Result<()> {
    let text = path_text(path)?;
    provider.set_text(&text)
}

/// Copy a result path to the system clipboard.
///
/// # Errors
/// Returns error if:
/// - The path is empty or not valid UTF-8
/// - System clipboard is unavailable (headless environment)
/// - Clipboard access is denied or the write fails
pub fn copy_path_to_clipboard(path: &Path) -> Result<()> {
    // Validate before touching the clipboard, for clearer errors in headless runs
    path_text(path)?;
    let mut clipboard = SystemClipboard::new()?;
    copy_with_provider(path, &mut clipboard)
}
