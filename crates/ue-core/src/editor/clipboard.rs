//! Clipboard operations (cut, copy, paste).

use super::Editor;

impl Editor {
    /// Copies the selection to the clipboard and clears the marks.
    pub(crate) fn copy(&mut self) {
        if let Some(bytes) = self.doc.selected_bytes() {
            self.clipboard.set(bytes);
        }
        self.doc.unmark();
    }

    /// Copies the selection to the clipboard, then deletes it.
    pub(crate) fn cut(&mut self) {
        match self.doc.selected_bytes() {
            Some(bytes) => {
                self.clipboard.set(bytes);
                self.doc.delete(0);
            }
            None => self.doc.unmark(),
        }
    }

    /// Inserts the clipboard contents at the cursor, replacing any selection.
    pub(crate) fn paste(&mut self) {
        if let Err(err) = self.doc.insert_bytes(self.clipboard.as_bytes()) {
            tracing::warn!("paste refused: {err}");
        }
    }
}
