//! Cursor motion over wrapped rows.
//!
//! Vertical moves keep the column within the row, falling back to the end
//! of a shorter target row.

use crate::wrap::{row_length, row_start};

use super::Editor;

impl Editor {
    pub(crate) fn move_left(&mut self) {
        self.doc.cursor = self.doc.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        if self.doc.cursor < self.doc.len() {
            self.doc.cursor += 1;
        }
    }

    /// Moves to the same column of the previous wrapped row.
    pub(crate) fn move_up(&mut self) {
        let data = self.doc.as_bytes();
        let col0 = row_start(data, self.doc.cursor, self.width);
        if col0 == 0 {
            return;
        }

        let col = self.doc.cursor - col0;
        let prev = row_start(data, col0 - 1, self.width);
        let size = row_length(data, prev, self.width);
        self.doc.cursor = prev + col.min(size);
    }

    /// Moves to the same column of the next wrapped row.
    pub(crate) fn move_down(&mut self) {
        let data = self.doc.as_bytes();
        let col0 = row_start(data, self.doc.cursor, self.width);
        let col = self.doc.cursor - col0;
        let size = row_length(data, col0, self.width);
        if col0 + size >= data.len() {
            return;
        }

        let next = col0 + size + 1;
        let size = row_length(data, next, self.width);
        self.doc.cursor = next + col.min(size);
    }

    pub(crate) fn line_home(&mut self) {
        self.doc.cursor = row_start(self.doc.as_bytes(), self.doc.cursor, self.width);
    }

    pub(crate) fn line_end(&mut self) {
        let data = self.doc.as_bytes();
        let col0 = row_start(data, self.doc.cursor, self.width);
        self.doc.cursor = col0 + row_length(data, col0, self.width);
    }

    pub(crate) fn page_up(&mut self) {
        for _ in 1..self.height {
            self.move_up();
        }
    }

    pub(crate) fn page_down(&mut self) {
        for _ in 1..self.height {
            self.move_down();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Command, Editor, EditorOptions};

    fn editor(text: &[u8], width: usize, height: usize) -> Editor {
        let mut ed = Editor::new(&EditorOptions::default());
        ed.set_viewport(width, height);
        ed.handle_command(Command::InsertText(text.to_vec()));
        ed.doc.cursor = 0;
        ed
    }

    // ── Horizontal ───────────────────────────────────────────────────

    #[test]
    fn test_left_right_clamp() {
        let mut ed = editor(b"ab", 80, 10);
        ed.move_left();
        assert_eq!(ed.doc.cursor, 0);
        ed.move_right();
        ed.move_right();
        ed.move_right();
        assert_eq!(ed.doc.cursor, 2);
    }

    #[test]
    fn test_home_end() {
        let mut ed = editor(b"hello\nworld", 80, 10);
        ed.doc.cursor = 8;
        ed.line_end();
        assert_eq!(ed.doc.cursor, 11);
        ed.line_home();
        assert_eq!(ed.doc.cursor, 6);
        ed.doc.cursor = 2;
        ed.line_end();
        assert_eq!(ed.doc.cursor, 5);
    }

    #[test]
    fn test_home_end_on_wrapped_row() {
        let mut ed = editor(b"the quick fox", 10, 10);
        ed.doc.cursor = 11;
        ed.line_home();
        assert_eq!(ed.doc.cursor, 10);
        ed.doc.cursor = 3;
        ed.line_end();
        assert_eq!(ed.doc.cursor, 9);
    }

    // ── Vertical ─────────────────────────────────────────────────────

    #[test]
    fn test_down_keeps_column() {
        let mut ed = editor(b"hello\nworld\nab", 80, 10);
        ed.doc.cursor = 3;
        ed.move_down();
        assert_eq!(ed.doc.cursor, 9);
        ed.move_down();
        // "ab" is shorter: end of row.
        assert_eq!(ed.doc.cursor, 14);
        ed.move_down();
        assert_eq!(ed.doc.cursor, 14);
    }

    #[test]
    fn test_up_keeps_column() {
        let mut ed = editor(b"ab\nhello\nworld", 80, 10);
        ed.doc.cursor = 13;
        ed.move_up();
        assert_eq!(ed.doc.cursor, 7);
        ed.move_up();
        assert_eq!(ed.doc.cursor, 2);
        ed.move_up();
        assert_eq!(ed.doc.cursor, 2);
    }

    #[test]
    fn test_vertical_over_wrapped_rows() {
        // Rows at width 10: "the quick" | "fox"
        let mut ed = editor(b"the quick fox", 10, 10);
        ed.doc.cursor = 1;
        ed.move_down();
        assert_eq!(ed.doc.cursor, 11);
        ed.move_up();
        assert_eq!(ed.doc.cursor, 1);
    }

    #[test]
    fn test_down_over_empty_line() {
        let mut ed = editor(b"abc\n\nxyz", 80, 10);
        ed.doc.cursor = 2;
        ed.move_down();
        assert_eq!(ed.doc.cursor, 4);
        // Column 0 of the empty line stays column 0.
        ed.move_down();
        assert_eq!(ed.doc.cursor, 5);
    }

    // ── Paging ───────────────────────────────────────────────────────

    #[test]
    fn test_page_down_and_up() {
        let text: Vec<u8> = (0..20).flat_map(|_| b"ab\n".iter().copied()).collect();
        let mut ed = editor(&text, 80, 5);
        ed.page_down();
        assert_eq!(ed.doc.cursor, 4 * 3);
        ed.page_down();
        assert_eq!(ed.doc.cursor, 8 * 3);
        ed.page_up();
        assert_eq!(ed.doc.cursor, 4 * 3);
    }

    #[test]
    fn test_motion_keeps_cursor_in_bounds() {
        let mut ed = editor(b"lorem ipsum\ndolor sit amet consectetur\n\nend", 7, 3);
        for _ in 0..20 {
            ed.move_down();
            assert!(ed.doc.cursor <= ed.doc.len());
        }
        for _ in 0..20 {
            ed.move_up();
            ed.line_end();
            assert!(ed.doc.cursor <= ed.doc.len());
        }
    }
}
