//! Clipboard access for copying converted words.
//!
//! ## Ownership On Linux
//! X11 and Wayland keep no copy of clipboard text: the process that set it
//! serves it until another owner takes over. A one-shot `wordify convert`
//! would take the text with it on exit, so it holds ownership for a bounded
//! time after copying (until a clipboard manager or another copy takes over,
//! or the hold runs out). Interactive sessions keep one handle open between
//! copies and do not block.

use std::time::Duration;

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),

    #[error("Failed to copy to clipboard: {0}")]
    Write(#[source] arboard::Error),
}

/// Somewhere converted text can be copied to.
pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
///
/// Opened on the first copy, so a headless session only fails when a copy
/// is actually attempted. The handle then stays open for the lifetime of
/// this value. `hold` only has an effect on Linux.
#[derive(Default)]
pub struct SystemClipboard {
    clipboard: Option<Clipboard>,
    hold: Duration,
}

impl SystemClipboard {
    /// A clipboard that keeps serving each copy for up to `hold`.
    pub fn holding(hold: Duration) -> Self {
        SystemClipboard {
            clipboard: None,
            hold,
        }
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    fn is_open(&self) -> bool {
        self.clipboard.is_some()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(ClipboardError::Access)?,
        };
        Ok(self.clipboard.insert(clipboard))
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        let hold = self.hold;
        let clipboard = self.handle()?;
        set_text(clipboard, text, hold).map_err(ClipboardError::Write)
    }
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, text: &str, hold: Duration) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    if hold.is_zero() {
        return clipboard.set_text(text);
    }

    tracing::debug!(?hold, "serving clipboard until taken over");
    clipboard
        .set()
        .wait_until(Instant::now() + hold)
        .text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, text: &str, _hold: Duration) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Copies and logs the outcome; failures never abort the command.
pub fn copy_quietly(sink: &mut dyn ClipboardSink, text: &str) -> bool {
    match sink.copy(text) {
        Ok(()) => {
            tracing::info!(chars = text.chars().count(), "copied to clipboard");
            true
        }
        Err(err) => {
            tracing::warn!("{}", err);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clipboard_opens_lazily() {
        let clipboard = SystemClipboard::default();
        assert!(!clipboard.is_open());
        assert!(clipboard.hold().is_zero());

        let clipboard = SystemClipboard::holding(Duration::from_secs(3));
        assert!(!clipboard.is_open());
        assert_eq!(clipboard.hold(), Duration::from_secs(3));
    }

    struct FailingClipboard;

    impl ClipboardSink for FailingClipboard {
        fn copy(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Access(arboard::Error::ClipboardNotSupported))
        }
    }

    #[test]
    fn test_copy_failure_is_swallowed() {
        assert!(!copy_quietly(&mut FailingClipboard, "One Dollars Only"));
    }
}
