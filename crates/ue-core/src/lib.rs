//! Editing core for the µe terminal editor.
//!
//! Everything here is synchronous and free of terminal concerns: a
//! fixed-capacity byte [`document::Document`], the word-wrap row engine, the
//! scroll cache that keeps view recomputation proportional to the screen
//! height, the snapshot undo log, and the UTF-8 ↔ internal codepage codec.

pub mod buffer;
pub mod clipboard;
pub mod codec;
pub mod command;
pub mod document;
pub mod editor;
pub mod history;
pub mod scroll;
pub mod wrap;

pub use buffer::{CapacityExceeded, TextBuffer, DEFAULT_CAPACITY};
pub use command::Command;
pub use document::{Document, Selection};
pub use editor::{Editor, EditorOptions, Frame, Row, Status};
