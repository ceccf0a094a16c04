//! Row/wrap engine: maps buffer offsets to word-wrapped screen rows.
//!
//! All functions are pure over the document bytes and the terminal width.
//! A wrapped row starting at `col0` spans `row_length(col0) + 1` offsets:
//! its visible bytes plus the break byte (newline, the blank it wrapped at,
//! or the first byte past a full-width row).

/// Real line separator.
pub const LINE_BREAK: u8 = b'\n';

/// Byte a row may be word-wrapped at.
pub const BLANK: u8 = b' ';

/// Finds the boundary of the real (unwrapped) line containing `pos`.
///
/// Returns the offset of the preceding line break, or 0. When `pos` sits on
/// a line break it belongs to the line that break terminates.
pub fn find_line_start(data: &[u8], pos: usize) -> usize {
    let mut pos = pos.min(data.len());
    if pos == 0 {
        return 0;
    }
    if data.get(pos) == Some(&LINE_BREAK) {
        pos -= 1;
    }
    while pos > 0 && data.get(pos) != Some(&LINE_BREAK) {
        pos -= 1;
    }
    pos
}

/// Returns the number of visible bytes in the wrapped row starting at `pos`.
///
/// Scans at most `width` bytes, stopping at a line break. A row that fills
/// the whole width is cut back to its last blank, if it has one.
pub fn row_length(data: &[u8], pos: usize, width: usize) -> usize {
    let mut size = 0;
    let mut last_blank = None;

    for &b in data.get(pos..).unwrap_or_default().iter().take(width) {
        if b == LINE_BREAK {
            break;
        }
        if b == BLANK {
            last_blank = Some(size);
        }
        size += 1;
    }

    match last_blank {
        Some(blank) if size == width => blank,
        _ => size,
    }
}

/// Returns the offset of the first byte of the wrapped row containing `pos`
/// ("column 0").
///
/// Cost is proportional to the length of the real line, so this is meant
/// for single-row navigation, not for whole-screen layout.
pub fn row_start(data: &[u8], pos: usize, width: usize) -> usize {
    let mut col0 = find_line_start(data, pos);

    while col0 < data.len() {
        let span = row_length(data, col0, width) + 1;
        if col0 <= pos && pos < col0 + span {
            break;
        }
        col0 += span;
    }

    col0
}

/// Returns the start of the wrapped row after the one starting at `col0`.
pub fn next_row_start(data: &[u8], col0: usize, width: usize) -> usize {
    col0 + row_length(data, col0, width) + 1
}
