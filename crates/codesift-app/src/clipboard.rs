//! System clipboard sink for rendered results.

use thiserror::Error;

/// Errors that can occur when copying a result to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// There is nothing to copy.
    #[error("no content to copy")]
    Empty,

    /// The platform clipboard could not be reached.
    #[error("clipboard unavailable: {0}")]
    Backend(#[from] arboard::Error),
}

/// Copies `text` to the system clipboard.
///
/// An empty (or whitespace-only) string is rejected with
/// [`ClipboardError::Empty`] instead of silently clearing the clipboard.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    if text.trim().is_empty() {
        return Err(ClipboardError::Empty);
    }
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
