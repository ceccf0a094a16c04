// Re-exports from ue-mod-history.
// The editor keeps whole `Document` clones in the log.
pub use ue_mod_history::{HistoryConfig, UndoLog};

/// Undo log specialized for documents.
pub type DocumentHistory = UndoLog<crate::document::Document>;
