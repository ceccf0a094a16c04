//! Configuration for the undo history.

/// Number of snapshots kept when nothing else is configured.
pub const DEFAULT_UNDO_LEVELS: usize = 64;

/// Configuration for the history system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Max snapshots kept in the ring. Zero is treated as one.
    pub levels: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            levels: DEFAULT_UNDO_LEVELS,
        }
    }
}

impl HistoryConfig {
    /// Creates a config with the given number of levels.
    pub fn with_levels(levels: usize) -> Self {
        Self { levels }
    }

    /// Returns the ring size actually used, never less than one.
    pub fn effective_levels(&self) -> usize {
        self.levels.max(1)
    }
}
