//! ANSI painter: writes a [`Frame`] to the terminal.
//!
//! The whole screen is built in memory and written with a single
//! `write_all`, so a frame never shows half-painted.

use std::io::{self, Write};

use ue_core::codec::encode_into;
use ue_core::{Frame, Status};

/// Switches to the alternate screen with line autowrap off.
pub const ENTER_SCREEN: &[u8] = b"\x1b[?1049h\x1b[?7l";

/// Restores default attributes, autowrap and the primary screen.
pub const LEAVE_SCREEN: &[u8] = b"\x1b[0;39;49m\x1b[?7h\x1b[?1049l\n";

const REVERSE: &[u8] = b"\x1b[7m";
const NORMAL: &[u8] = b"\x1b[m";
const CLEAR_EOL: &[u8] = b"\x1b[K";

/// Text overlaid on the first row for a one-shot notice.
pub fn notice(status: Status) -> Option<&'static str> {
    match status {
        Status::Normal => None,
        Status::NewFile => Some("<new file>"),
        Status::ConfirmQuit => Some("ctrl-q again to force quit"),
        Status::SaveFailed => Some("save failed"),
    }
}

fn goto(buf: &mut Vec<u8>, col: usize, row: usize) {
    // Writing into a Vec never fails.
    let _ = write!(buf, "\x1b[{};{}H", row + 1, col + 1);
}

/// Paints `frame` and leaves the terminal cursor at the frame's cursor.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn paint<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    let mut buf = Vec::new();

    for (n, row) in frame.rows.iter().enumerate() {
        goto(&mut buf, 0, n);

        let mut reversed = false;
        for (col, &cell) in row.cells.iter().enumerate() {
            let selected = row.selected.as_ref().is_some_and(|r| r.contains(&col));
            if selected != reversed {
                buf.extend_from_slice(if selected { REVERSE } else { NORMAL });
                reversed = selected;
            }
            encode_into(cell, &mut buf);
        }
        if reversed {
            buf.extend_from_slice(NORMAL);
        }
        buf.extend_from_slice(CLEAR_EOL);
    }

    if let Some(text) = notice(frame.status) {
        goto(&mut buf, 0, 0);
        buf.extend_from_slice(text.as_bytes());
        buf.extend_from_slice(CLEAR_EOL);
    }

    let (col, row) = frame.cursor;
    goto(&mut buf, col, row);

    out.write_all(&buf)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ue_core::Row;

    fn row(text: &[u8], selected: Option<std::ops::Range<usize>>) -> Row {
        Row {
            offset: Some(0),
            cells: text.to_vec(),
            selected,
        }
    }

    fn painted(frame: &Frame) -> String {
        let mut out = Vec::new();
        paint(&mut out, frame).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rows_are_positioned() {
        let frame = Frame {
            rows: vec![row(b"ab", None), row(b"cd", None)],
            cursor: (1, 1),
            status: Status::Normal,
        };
        let out = painted(&frame);
        assert!(out.starts_with("\x1b[1;1Hab\x1b[K\x1b[2;1Hcd\x1b[K"));
        assert!(out.ends_with("\x1b[2;2H"));
    }

    #[test]
    fn test_cells_are_encoded() {
        let frame = Frame {
            rows: vec![row(&[b'x', 0x97, 0xE9], None)],
            cursor: (0, 0),
            status: Status::Normal,
        };
        assert!(painted(&frame).contains("x—é"));
    }

    #[test]
    fn test_selection_is_reversed() {
        let frame = Frame {
            rows: vec![row(b"hello", Some(1..3))],
            cursor: (0, 0),
            status: Status::Normal,
        };
        assert!(painted(&frame).contains("h\x1b[7mel\x1b[mlo"));
    }

    #[test]
    fn test_selection_to_end_of_row_is_reset() {
        let frame = Frame {
            rows: vec![row(b"abc", Some(1..3))],
            cursor: (0, 0),
            status: Status::Normal,
        };
        assert!(painted(&frame).contains("a\x1b[7mbc\x1b[m\x1b[K"));
    }

    #[test]
    fn test_notice_overlays_first_row() {
        let frame = Frame {
            rows: vec![row(b"text", None)],
            cursor: (2, 0),
            status: Status::ConfirmQuit,
        };
        let out = painted(&frame);
        assert!(out.contains("\x1b[1;1Hctrl-q again to force quit\x1b[K\x1b[1;3H"));
    }

    #[test]
    fn test_notice_texts() {
        assert_eq!(notice(Status::Normal), None);
        assert_eq!(notice(Status::NewFile), Some("<new file>"));
        assert_eq!(notice(Status::SaveFailed), Some("save failed"));
    }
}
