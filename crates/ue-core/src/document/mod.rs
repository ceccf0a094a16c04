//! Document model: fixed-capacity buffer, cursor, view origin and selection.
//!
//! A `Document` is a plain value. The undo log stores whole clones of it, so
//! everything that must come back on undo (cursor, view origin, marks,
//! modified flag) lives here. File I/O is in the `io` submodule.

mod io;

use crate::buffer::{CapacityExceeded, TextBuffer, DEFAULT_CAPACITY};

/// Selection marks.
///
/// The first mark press sets `start`, the second sets `end`. The selection
/// is only active once both are set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl Selection {
    /// Returns the selected range as ordered `(start, end)` offsets, if active.
    pub fn range(&self) -> Option<(usize, usize)> {
        match (self.start, self.end) {
            (Some(a), Some(b)) => Some((a.min(b), a.max(b))),
            _ => None,
        }
    }

    /// Whether both marks are set.
    pub fn is_active(&self) -> bool {
        self.range().is_some()
    }

    /// Clears both marks.
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
}

/// A single document with its buffer, cursor and flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// The document bytes in internal representation.
    pub buffer: TextBuffer,
    /// Cursor offset, `0 ..= buffer.len()`.
    pub cursor: usize,
    /// Offset of the first byte shown on screen; always a wrapped-row start.
    pub view_origin: usize,
    /// Selection marks.
    pub selection: Selection,
    /// Whether the document changed since it was loaded or last saved.
    pub modified: bool,
    /// Whether the document has never been read from or written to disk.
    pub is_new: bool,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Document {
    /// Creates an empty, new document.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: TextBuffer::with_capacity(capacity),
            cursor: 0,
            view_origin: 0,
            selection: Selection::default(),
            modified: false,
            is_new: true,
        }
    }

    /// Creates an unmodified document holding `bytes` (internal representation).
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] if `bytes` does not fit.
    pub fn from_bytes(bytes: &[u8], capacity: usize) -> Result<Self, CapacityExceeded> {
        Ok(Self {
            buffer: TextBuffer::from_bytes(bytes, capacity)?,
            ..Self::new(capacity)
        })
    }

    /// Returns the document bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_bytes()
    }

    /// Returns the number of bytes in the document.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Moves the cursor, clamped to the document.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.buffer.len());
    }

    /// Sets the next unset mark at the cursor.
    ///
    /// A third press while both marks are set does nothing.
    pub fn mark(&mut self) {
        if self.selection.start.is_none() {
            self.selection.start = Some(self.cursor);
        } else if self.selection.end.is_none() {
            self.selection.end = Some(self.cursor);
        }
    }

    /// Clears the selection.
    pub fn unmark(&mut self) {
        self.selection.clear();
    }

    /// Returns the selected bytes, if a selection is active.
    pub fn selected_bytes(&self) -> Option<&[u8]> {
        let (start, end) = self.selection.range()?;
        self.buffer.slice(start, end).ok()
    }

    /// Deletes `count` bytes at the cursor.
    ///
    /// An active selection takes precedence: it is deleted whole, whatever
    /// `count` is, and the cursor moves to its start. Marks are always
    /// cleared. Returns the number of bytes removed.
    pub fn delete(&mut self, count: usize) -> usize {
        let count = match self.selection.range() {
            Some((start, end)) => {
                self.cursor = start.min(self.buffer.len());
                end - start
            }
            None => count,
        };
        self.selection.clear();

        let removed = self.buffer.remove(self.cursor, count);
        if removed > 0 {
            self.modified = true;
        }
        removed
    }

    /// Opens an `n`-byte gap at the cursor.
    ///
    /// An active selection is deleted first, as typing over a selection
    /// replaces it. The capacity check accounts for that deletion, and on
    /// failure nothing at all is changed.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] if the gap does not fit.
    pub fn expand(&mut self, n: usize) -> Result<(), CapacityExceeded> {
        let selected = self.selection.range().map_or(0, |(start, end)| end - start);
        let available = self.buffer.available() + selected;
        if n > available {
            tracing::debug!(requested = n, available, "expand refused");
            return Err(CapacityExceeded {
                requested: n,
                available,
            });
        }

        if self.selection.is_active() {
            self.delete(0);
        }
        self.buffer.open_gap(self.cursor, n)?;
        self.modified = true;
        Ok(())
    }

    /// Inserts one byte at the cursor and moves past it.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] (and changes nothing) if the buffer is full.
    pub fn insert(&mut self, byte: u8) -> Result<(), CapacityExceeded> {
        self.insert_bytes(&[byte])
    }

    /// Inserts a run of bytes at the cursor and moves past them.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] (and changes nothing) if they don't fit.
    pub fn insert_bytes(&mut self, bytes: &[u8]) -> Result<(), CapacityExceeded> {
        self.expand(bytes.len())?;
        self.buffer.write_at(self.cursor, bytes);
        self.cursor += bytes.len();
        Ok(())
    }

    /// Inserts already-decoded text byte by byte, turning `\r` into `\n`.
    ///
    /// Stops at the first byte that doesn't fit; bytes before it stay.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] if the buffer filled up.
    pub fn insert_text(&mut self, bytes: &[u8]) -> Result<(), CapacityExceeded> {
        for &b in bytes {
            let b = if b == b'\r' { b'\n' } else { b };
            self.insert(b)?;
        }
        Ok(())
    }
}
