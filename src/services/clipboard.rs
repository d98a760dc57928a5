//! Clipboard - Clipboard Service
//!
//! Components write to the clipboard through [`ClipboardWriter`] so another
//! implementation can be injected in place of the system one.

use gpui::{App, ClipboardItem};

use crate::error::{Error, Result};

/// Abstraction over the clipboard used by copy buttons
pub trait ClipboardWriter {
    /// Put `text` into the clipboard
    fn write_text(&self, text: &str, cx: &mut App) -> Result<()>;
}

/// The platform clipboard, as exposed by GPUI
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str, cx: &mut App) -> Result<()> {
        cx.write_to_clipboard(ClipboardItem::new_string(text.to_string()));

        // Platforms without a clipboard drop the write silently
        match cx.read_from_clipboard().and_then(|item| item.text()) {
            Some(stored) if stored == text => Ok(()),
            _ => Err(Error::Clipboard {
                message: "clipboard did not keep the copied text".to_string(),
            }),
        }
    }
}
