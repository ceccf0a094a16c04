//! Fixed-capacity byte buffer holding the document in its internal representation.

use std::fmt;

use anyhow::Result;

/// Default maximum document size in internal bytes.
pub const DEFAULT_CAPACITY: usize = 32768;

/// Returned when an operation would grow a buffer past its capacity.
///
/// The buffer is left untouched whenever this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    /// Bytes the operation tried to add.
    pub requested: usize,
    /// Bytes that could still be added.
    pub available: usize,
}

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buffer capacity exceeded: {} bytes requested, {} available",
            self.requested, self.available
        )
    }
}

impl std::error::Error for CapacityExceeded {}

/// A linear byte buffer that never grows past `capacity - 1` bytes.
///
/// One slot is always kept in reserve: an expansion of `n` bytes only
/// succeeds while `len + n < capacity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl TextBuffer {
    /// Creates an empty buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity,
        }
    }

    /// Creates a buffer holding `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] if `bytes` does not leave the reserved slot free.
    pub fn from_bytes(bytes: &[u8], capacity: usize) -> Result<Self, CapacityExceeded> {
        let mut buffer = Self::with_capacity(capacity);
        buffer.open_gap(0, bytes.len())?;
        buffer.data.copy_from_slice(bytes);
        Ok(buffer)
    }

    /// Returns the buffer contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the number of valid bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the configured capacity.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns how many bytes can still be added.
    pub fn available(&self) -> usize {
        self.capacity.saturating_sub(self.data.len() + 1)
    }

    /// Returns the byte at `pos`, if any.
    pub fn get(&self, pos: usize) -> Option<u8> {
        self.data.get(pos).copied()
    }

    /// Returns the bytes in `[start, end)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is inverted or out of bounds.
    pub fn slice(&self, start: usize, end: usize) -> Result<&[u8]> {
        if start > end {
            anyhow::bail!("invalid range: start ({}) > end ({})", start, end);
        }
        if end > self.data.len() {
            anyhow::bail!(
                "range end {} out of bounds (buffer has {} bytes)",
                end,
                self.data.len()
            );
        }
        Ok(&self.data[start..end])
    }

    /// Opens a zero-filled gap of `n` bytes at `pos`, shifting the tail up.
    ///
    /// `pos` past the end is treated as the end.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] and leaves the buffer unchanged if the
    /// gap does not fit.
    pub fn open_gap(&mut self, pos: usize, n: usize) -> Result<(), CapacityExceeded> {
        let len = self.data.len();
        if len + n >= self.capacity {
            return Err(CapacityExceeded {
                requested: n,
                available: self.available(),
            });
        }
        let pos = pos.min(len);
        self.data.resize(len + n, 0);
        self.data.copy_within(pos..len, pos + n);
        self.data[pos..pos + n].fill(0);
        Ok(())
    }

    /// Removes up to `count` bytes at `pos`, shifting the tail down.
    ///
    /// Returns the number of bytes actually removed.
    pub fn remove(&mut self, pos: usize, count: usize) -> usize {
        let len = self.data.len();
        if pos >= len {
            return 0;
        }
        let count = count.min(len - pos);
        self.data.copy_within(pos + count..len, pos);
        self.data.truncate(len - count);
        count
    }

    /// Overwrites existing bytes starting at `pos`.
    ///
    /// Returns false (writing nothing) if the range is not inside the buffer.
    pub fn write_at(&mut self, pos: usize, bytes: &[u8]) -> bool {
        match self.data.get_mut(pos..pos.saturating_add(bytes.len())) {
            Some(dst) => {
                dst.copy_from_slice(bytes);
                true
            }
            None => false,
        }
    }
}
