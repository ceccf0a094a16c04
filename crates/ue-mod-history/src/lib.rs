//! Snapshot-based undo history.
//!
//! Provides an `UndoLog` that keeps a fixed number of whole-value snapshots
//! in a ring. Taking a snapshot when the ring is full silently replaces the
//! oldest one, so memory use is bounded by `levels` copies of the value.

pub mod config;
pub mod manager;

pub use config::HistoryConfig;
pub use manager::UndoLog;
