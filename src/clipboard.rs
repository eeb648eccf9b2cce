//! System clipboard access.
//!
//! Copying is fire-and-forget from the palette's point of view: callers log
//! and display a failure but never roll back state because of it.

use thiserror::Error;
use tracing::{debug, warn};

/// Clipboard write failure.
#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(#[from] arboard::Error);

/// Destination for copied text.
pub trait ClipboardSink {
    /// Replaces the clipboard contents with `text`.
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The operating system clipboard.
///
/// A fresh `arboard` handle is opened per copy; some platforms drop a handle's
/// contents when it is released, so nothing is cached here.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        debug!(text, "Copied to clipboard");
        Ok(())
    }
}

/// Copies `text` and turns the outcome into a status line.
///
/// Returns `Ok` with a confirmation or `Err` with a user-facing message; the
/// error is already logged.
pub fn copy_with_status(sink: &mut dyn ClipboardSink, text: &str) -> Result<String, String> {
    match sink.copy_text(text) {
        Ok(()) => Ok(format!("Copied {text}")),
        Err(e) => {
            warn!(error = %e, "Clipboard copy failed");
            Err(format!("Failed to copy to clipboard: {e}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recording(Vec<String>);

    impl ClipboardSink for Recording {
        fn copy_text(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    struct Unavailable;

    impl ClipboardSink for Unavailable {
        fn copy_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError(arboard::Error::ClipboardNotSupported))
        }
    }

    #[test]
    fn test_copy_reports_text() {
        let mut sink = Recording::default();
        let status = copy_with_status(&mut sink, "rgb(255, 87, 51)").unwrap();
        assert_eq!(status, "Copied rgb(255, 87, 51)");
        assert_eq!(sink.0, vec!["rgb(255, 87, 51)".to_string()]);
    }

    #[test]
    fn test_failure_becomes_message() {
        let err = copy_with_status(&mut Unavailable, "#000000").unwrap_err();
        assert!(err.starts_with("Failed to copy to clipboard"));
    }
}
