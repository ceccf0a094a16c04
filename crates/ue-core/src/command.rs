//! Editor commands.
//!
//! The terminal layer turns raw key bytes into these; the editor executes
//! them without knowing which key produced them.

/// A single editor command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    /// Start of the wrapped row.
    LineHome,
    /// End of the wrapped row.
    LineEnd,
    /// `height - 1` rows up.
    PageUp,
    /// `height - 1` rows down.
    PageDown,
    /// Delete the byte under the cursor, or the selection.
    DeleteChar,
    /// Delete the byte before the cursor, or the selection.
    Backspace,
    /// Delete the wrapped row holding the cursor, including its break byte.
    DeleteLine,
    /// Insert blanks up to the next tab stop.
    Tab,
    Mark,
    Unmark,
    Copy,
    Cut,
    Paste,
    Undo,
    Save,
    Quit,
    /// Insert decoded text (internal bytes). `\r` becomes `\n`.
    InsertText(Vec<u8>),
}

impl Command {
    /// Whether the command may change the document, and so takes an undo
    /// snapshot first.
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            Self::DeleteChar
                | Self::Backspace
                | Self::DeleteLine
                | Self::Tab
                | Self::Cut
                | Self::Paste
                | Self::InsertText(_)
        )
    }
}
