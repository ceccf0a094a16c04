//! Editor-local clipboard.
//!
//! Holds one copied run of internal bytes. It is never shared with the
//! system clipboard and never grows past the document capacity.

use crate::buffer::DEFAULT_CAPACITY;

/// Clipboard holding the most recently copied bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clipboard {
    data: Vec<u8>,
    capacity: usize,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Clipboard {
    /// Creates an empty clipboard holding at most `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity,
        }
    }

    /// Replaces the contents, truncated to the capacity.
    pub fn set(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(self.capacity);
        self.data.clear();
        self.data.extend_from_slice(&bytes[..len]);
    }

    /// Returns the contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
