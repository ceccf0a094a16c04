//! Screen layout: turns the document and viewport into a [`Frame`].

use std::ops::Range;

use crate::wrap::{row_length, LINE_BREAK};

use super::{Editor, QuitGuard};

/// One-shot notice shown with a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Normal,
    /// The file did not exist when it was opened.
    NewFile,
    /// Quit was refused because the document has unsaved changes.
    ConfirmQuit,
    /// The last save failed.
    SaveFailed,
}

/// A single screen row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Offset of the row's first byte, or `None` past the end of the document.
    pub offset: Option<usize>,
    /// Exactly `width` internal bytes; line breaks and padding are blanks.
    pub cells: Vec<u8>,
    /// Cells inside the selection.
    pub selected: Option<Range<usize>>,
}

/// Everything the terminal layer needs to paint one screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Exactly `height` rows.
    pub rows: Vec<Row>,
    /// Cursor position as `(column, row)`.
    pub cursor: (usize, usize),
    pub status: Status,
}

impl Editor {
    /// Scrolls the view to the cursor and lays out the visible rows.
    ///
    /// Consumes any pending one-shot notice; at most one is reported per
    /// frame.
    pub fn render(&mut self) -> Frame {
        // Edits can re-wrap the row holding the origin.
        self.realign_view();
        self.doc.view_origin = self.scroll.recompute(
            self.doc.as_bytes(),
            self.width,
            self.doc.cursor,
            self.doc.view_origin,
        );

        let status = self.take_status();
        let data = self.doc.as_bytes();
        let selection = self.doc.selection.range();
        let mut rows = Vec::with_capacity(self.height);
        let mut cursor = (0, 0);
        let mut pos = self.doc.view_origin;

        for n in 0..self.height {
            if pos > data.len() {
                rows.push(Row {
                    offset: None,
                    cells: vec![b' '; self.width],
                    selected: None,
                });
                continue;
            }

            let span = row_length(data, pos, self.width) + 1;
            let shown = span.min(self.width);
            let mut cells: Vec<u8> = (pos..pos + shown)
                .map(|p| match data.get(p) {
                    Some(&b) if b != LINE_BREAK => b,
                    _ => b' ',
                })
                .collect();
            cells.resize(self.width, b' ');

            if (pos..pos + span).contains(&self.doc.cursor) {
                cursor = ((self.doc.cursor - pos).min(self.width - 1), n);
            }

            let selected = selection.and_then(|(start, end)| {
                let first = start.max(pos);
                let last = end.min(pos + shown);
                (first < last).then(|| first - pos..last - pos)
            });

            rows.push(Row {
                offset: Some(pos),
                cells,
                selected,
            });
            pos += span;
        }

        Frame {
            rows,
            cursor,
            status,
        }
    }

    /// Returns the pending notice with the highest priority and clears it.
    fn take_status(&mut self) -> Status {
        if self.new_file_notice {
            self.new_file_notice = false;
            Status::NewFile
        } else if self.quit == QuitGuard::Requested {
            self.quit = QuitGuard::Prompted;
            Status::ConfirmQuit
        } else if self.save_failed {
            self.save_failed = false;
            Status::SaveFailed
        } else {
            Status::Normal
        }
    }
}
