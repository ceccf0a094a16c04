//! Fixed-size ring of whole-value snapshots.
//!
//! The log never grows past its configured number of levels: pushing into a
//! full ring overwrites the oldest snapshot. Undoing hands back the most
//! recent snapshot and frees its slot. There is no redo.

use crate::config::HistoryConfig;

/// Manages undo history for a single value (typically a document).
///
/// Each slot owns an independent copy, so restoring a snapshot never
/// aliases the live value or any other slot.
pub struct UndoLog<T> {
    /// Ring storage; `None` marks a slot that was never written or was consumed.
    slots: Vec<Option<T>>,
    /// Index of the slot the next snapshot is written to.
    head: usize,
    /// Number of snapshots that can still be undone.
    available: usize,
}

impl<T> std::fmt::Debug for UndoLog<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UndoLog")
            .field("levels", &self.slots.len())
            .field("head", &self.head)
            .field("available", &self.available)
            .finish()
    }
}

impl<T: Clone> Clone for UndoLog<T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            head: self.head,
            available: self.available,
        }
    }
}

impl<T> Default for UndoLog<T> {
    fn default() -> Self {
        Self::new(&HistoryConfig::default())
    }
}

impl<T> UndoLog<T> {
    /// Creates an empty log sized from `config`.
    pub fn new(config: &HistoryConfig) -> Self {
        let levels = config.effective_levels();
        let mut slots = Vec::with_capacity(levels);
        slots.resize_with(levels, || None);
        Self {
            slots,
            head: 0,
            available: 0,
        }
    }

    /// Maximum number of snapshots the ring can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of snapshots that can currently be undone.
    pub fn available(&self) -> usize {
        self.available
    }

    /// Whether there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.available == 0
    }

    /// Stores a snapshot in the next slot.
    ///
    /// When the ring is already full the oldest snapshot is overwritten and
    /// the available count stays at `capacity()`.
    pub fn push(&mut self, snapshot: T) {
        let levels = self.slots.len();
        self.slots[self.head] = Some(snapshot);
        self.head = (self.head + 1) % levels;

        if self.available < levels {
            self.available += 1;
        } else {
            tracing::trace!("undo ring full, oldest snapshot dropped");
        }
    }

    /// Takes back the most recent snapshot.
    ///
    /// Returns `None` (and changes nothing) when no level is available.
    pub fn undo(&mut self) -> Option<T> {
        if self.available == 0 {
            return None;
        }

        let levels = self.slots.len();
        self.available -= 1;
        self.head = (self.head + levels - 1) % levels;
        self.slots[self.head].take()
    }

    /// Drops every stored snapshot.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.head = 0;
        self.available = 0;
    }
}
