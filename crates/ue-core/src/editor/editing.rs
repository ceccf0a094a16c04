//! Text editing commands: typing, tabs and the delete family.
//!
//! Undo snapshots are taken by `handle_command` before any of these run.

use crate::wrap::{row_length, row_start};

use super::Editor;

impl Editor {
    /// Inserts decoded text at the cursor.
    pub(crate) fn insert_text(&mut self, text: &[u8]) {
        if let Err(err) = self.doc.insert_text(text) {
            tracing::warn!("insert stopped: {err}");
        }
    }

    /// Inserts blanks up to the next tab stop of the wrapped row.
    pub(crate) fn tab(&mut self) {
        let col0 = row_start(self.doc.as_bytes(), self.doc.cursor, self.width);
        let col = self.doc.cursor - col0;
        let n = self.tab_size - col % self.tab_size;
        for _ in 0..n {
            if let Err(err) = self.doc.insert(b' ') {
                tracing::warn!("tab stopped: {err}");
                break;
            }
        }
    }

    /// Deletes the byte under the cursor, or the selection.
    pub(crate) fn delete_char(&mut self) {
        self.doc.delete(1);
    }

    /// Deletes the byte before the cursor, or the selection.
    pub(crate) fn backspace(&mut self) {
        if !self.doc.selection.is_active() {
            self.doc.cursor = self.doc.cursor.saturating_sub(1);
        }
        self.doc.delete(1);
    }

    /// Deletes the wrapped row under the cursor together with its break byte.
    pub(crate) fn delete_line(&mut self) {
        let data = self.doc.as_bytes();
        let col0 = row_start(data, self.doc.cursor, self.width);
        let count = row_length(data, col0, self.width) + 1;
        self.doc.cursor = col0;
        self.doc.delete(count);
    }
}
