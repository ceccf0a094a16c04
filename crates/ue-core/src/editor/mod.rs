//! The editor: one document, its undo log, the clipboard and the viewport.
//!
//! [`Editor::handle_command`] executes one [`Command`] to completion and
//! [`Editor::render`] lays the visible window out as a [`Frame`]. Neither
//! touches the terminal.

mod clipboard;
mod editing;
mod motion;
mod render;

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::buffer::DEFAULT_CAPACITY;
use crate::clipboard::Clipboard;
use crate::command::Command;
use crate::document::Document;
use crate::history::{DocumentHistory, HistoryConfig};
use crate::scroll::{ScrollCache, MIN_HEIGHT};
use crate::wrap::row_start;

pub use render::{Frame, Row, Status};

/// Default screen size before the first `set_viewport`.
const DEFAULT_WIDTH: usize = 80;
const DEFAULT_HEIGHT: usize = 25;

/// Default distance between tab stops.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Sizing knobs for a new editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Document (and clipboard) capacity in internal bytes.
    pub capacity: usize,
    /// Number of undo snapshots kept.
    pub undo_levels: usize,
    /// Distance between tab stops; zero is treated as one.
    pub tab_size: usize,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            undo_levels: ue_mod_history::config::DEFAULT_UNDO_LEVELS,
            tab_size: DEFAULT_TAB_SIZE,
        }
    }
}

/// Two-step quit confirmation for modified documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum QuitGuard {
    #[default]
    Idle,
    /// Quit was refused; the notice has not been shown yet.
    Requested,
    /// The notice was shown; another quit exits.
    Prompted,
}

/// A single-document editor.
#[derive(Debug)]
pub struct Editor {
    doc: Document,
    history: DocumentHistory,
    clipboard: Clipboard,
    path: Option<PathBuf>,
    width: usize,
    height: usize,
    scroll: ScrollCache,
    tab_size: usize,
    quit: QuitGuard,
    new_file_notice: bool,
    save_failed: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(&EditorOptions::default())
    }
}

impl Editor {
    /// Creates an editor with an empty, new document and no file path.
    pub fn new(options: &EditorOptions) -> Self {
        Self::with_document(Document::new(options.capacity), None, options)
    }

    /// Creates an editor for the file at `path`.
    ///
    /// A missing file gives an empty document and a one-shot
    /// [`Status::NewFile`] notice on the first render.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is too
    /// large for the configured capacity.
    pub fn open(path: &Path, options: &EditorOptions) -> Result<Self> {
        let doc = Document::open(path, options.capacity)?;
        Ok(Self::with_document(doc, Some(path.to_path_buf()), options))
    }

    fn with_document(doc: Document, path: Option<PathBuf>, options: &EditorOptions) -> Self {
        let new_file_notice = doc.is_new;
        Self {
            history: DocumentHistory::new(&HistoryConfig::with_levels(options.undo_levels)),
            clipboard: Clipboard::new(options.capacity),
            path,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            scroll: ScrollCache::new(DEFAULT_HEIGHT),
            tab_size: options.tab_size.max(1),
            quit: QuitGuard::Idle,
            new_file_notice,
            save_failed: false,
            doc,
        }
    }

    /// Returns the document.
    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Returns the clipboard.
    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Returns the file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Number of undo levels currently available.
    pub fn undo_available(&self) -> usize {
        self.history.available()
    }

    /// Returns the viewport as `(width, height)`.
    pub fn viewport(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Sets the screen geometry.
    ///
    /// Width is clamped to at least 1 and height to at least 2. The view
    /// origin is re-aligned to a row start for the new width.
    pub fn set_viewport(&mut self, width: usize, height: usize) {
        let width = width.max(1);
        let height = height.max(MIN_HEIGHT);
        if (width, height) == (self.width, self.height) {
            return;
        }

        tracing::debug!(width, height, "viewport changed");
        self.width = width;
        self.height = height;
        if self.scroll.height() != height {
            self.scroll.resize(height);
        }
        self.realign_view();
    }

    /// Executes one command. Returns false when the editor should exit.
    pub fn handle_command(&mut self, command: Command) -> bool {
        if command == Command::Quit {
            return self.request_quit();
        }
        self.quit = QuitGuard::Idle;

        if command == Command::Backspace
            && self.doc.cursor == 0
            && !self.doc.selection.is_active()
        {
            return true;
        }
        if command.is_destructive() {
            self.snapshot();
        }

        match command {
            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::LineHome => self.line_home(),
            Command::LineEnd => self.line_end(),
            Command::PageUp => self.page_up(),
            Command::PageDown => self.page_down(),
            Command::DeleteChar => self.delete_char(),
            Command::Backspace => self.backspace(),
            Command::DeleteLine => self.delete_line(),
            Command::Tab => self.tab(),
            Command::Mark => self.doc.mark(),
            Command::Unmark => self.doc.unmark(),
            Command::Copy => self.copy(),
            Command::Cut => self.cut(),
            Command::Paste => self.paste(),
            Command::Undo => self.undo(),
            Command::Save => self.save(),
            Command::InsertText(text) => self.insert_text(&text),
            Command::Quit => {}
        }
        true
    }

    /// Quit guard transition. Returns false when the editor should exit.
    fn request_quit(&mut self) -> bool {
        if !self.doc.modified {
            return false;
        }
        match self.quit {
            QuitGuard::Idle => {
                tracing::debug!("quit refused: unsaved changes");
                self.quit = QuitGuard::Requested;
                true
            }
            QuitGuard::Requested | QuitGuard::Prompted => {
                tracing::info!("forced quit with unsaved changes");
                false
            }
        }
    }

    /// Saves the document to its path; failures are logged and reported on
    /// the next render.
    fn save(&mut self) {
        let result = match &self.path {
            Some(path) => self.doc.save_to(path),
            None => Err(anyhow::anyhow!("no file path set for this document")),
        };
        if let Err(err) = result {
            tracing::error!("save failed: {err:#}");
            self.save_failed = true;
        }
    }

    /// Pushes a copy of the current document onto the undo log.
    fn snapshot(&mut self) {
        self.history.push(self.doc.clone());
    }

    /// Restores the most recent snapshot, if any.
    fn undo(&mut self) {
        match self.history.undo() {
            Some(doc) => {
                self.doc = doc;
                self.realign_view();
            }
            None => tracing::debug!("nothing to undo"),
        }
    }

    /// Moves the view origin back onto a row start for the current width.
    fn realign_view(&mut self) {
        let origin = self.doc.view_origin.min(self.doc.len());
        self.doc.view_origin = row_start(self.doc.as_bytes(), origin, self.width);
    }
}
