// Integration tests for the editing core.
//
// These drive `Editor` through commands only, the way the terminal loop
// does, and check the document, clipboard and rendered frames.

use ue_core::codec::{decode_slice, encode_slice};
use ue_core::wrap::row_length;
use ue_core::{Command, Document, Editor, EditorOptions, Status};

fn options(capacity: usize) -> EditorOptions {
    EditorOptions {
        capacity,
        ..EditorOptions::default()
    }
}

fn type_text(ed: &mut Editor, text: &str) {
    ed.handle_command(Command::InsertText(decode_slice(text.as_bytes())));
}

fn row_text(ed: &mut Editor, row: usize) -> String {
    let frame = ed.render();
    String::from_utf8_lossy(&frame.rows[row].cells)
        .trim_end()
        .to_string()
}

// ── Wrapping ───────────────────────────────────────────────────────────

#[test]
fn test_full_width_word_is_not_wrapped() {
    let mut ed = Editor::new(&options(256));
    ed.set_viewport(10, 5);
    type_text(&mut ed, "helloworld");
    assert_eq!(row_length(ed.document().as_bytes(), 0, 10), 10);
    assert_eq!(row_text(&mut ed, 0), "helloworld");
}

#[test]
fn test_wraps_at_last_blank() {
    let mut ed = Editor::new(&options(256));
    ed.set_viewport(10, 5);
    type_text(&mut ed, "the quick fox");
    assert_eq!(row_length(ed.document().as_bytes(), 0, 10), 9);
    assert_eq!(row_text(&mut ed, 0), "the quick");
    assert_eq!(row_text(&mut ed, 1), "fox");
}

#[test]
fn test_resize_rewraps() {
    let mut ed = Editor::new(&options(256));
    ed.set_viewport(10, 5);
    type_text(&mut ed, "the quick fox");
    ed.set_viewport(40, 5);
    assert_eq!(row_text(&mut ed, 0), "the quick fox");
    ed.set_viewport(4, 5);
    assert_eq!(row_text(&mut ed, 0), "the");
    assert_eq!(row_text(&mut ed, 1), "quic");
}

// ── File round trip ────────────────────────────────────────────────────

#[test]
fn test_em_dash_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dash.txt");
    std::fs::write(&path, [b'a', 0xE2, 0x80, 0x94, b'b']).unwrap();

    let mut ed = Editor::open(&path, &EditorOptions::default()).unwrap();
    assert_eq!(ed.document().as_bytes(), &[b'a', 0x97, b'b']);
    assert_eq!(ed.render().status, Status::Normal);

    ed.handle_command(Command::MoveRight);
    ed.handle_command(Command::DeleteChar);
    ed.handle_command(Command::Undo);
    ed.handle_command(Command::Save);
    assert_eq!(std::fs::read(&path).unwrap(), [b'a', 0xE2, 0x80, 0x94, b'b']);
}

#[test]
fn test_new_file_is_created_on_save() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("new.txt");

    let mut ed = Editor::open(&path, &EditorOptions::default()).unwrap();
    assert_eq!(ed.render().status, Status::NewFile);
    assert!(!path.exists());

    type_text(&mut ed, "€ 10 — “ok”\n");
    ed.handle_command(Command::Save);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "€ 10 — “ok”\n");
    assert!(!ed.document().modified);
    // Unmodified again, so quit is immediate.
    assert!(!ed.handle_command(Command::Quit));
}

#[test]
fn test_open_too_large_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.txt");
    std::fs::write(&path, vec![b'x'; 100]).unwrap();

    let err = Editor::open(&path, &options(100)).unwrap_err();
    assert!(format!("{err:#}").contains("file too large"));
    assert!(Editor::open(&path, &options(101)).is_ok());
}

#[test]
fn test_unrepresentable_text_degrades() {
    let mut ed = Editor::new(&options(256));
    type_text(&mut ed, "a日b");
    assert_eq!(encode_slice(ed.document().as_bytes()), "a\u{FFFD}b".as_bytes());
}

// ── Capacity ───────────────────────────────────────────────────────────

#[test]
fn test_insert_into_full_buffer_fails() {
    let mut ed = Editor::new(&options(32));
    type_text(&mut ed, &"x".repeat(31));
    assert_eq!(ed.document().len(), 31);

    type_text(&mut ed, "x");
    assert_eq!(ed.document().len(), 31);
    ed.handle_command(Command::Tab);
    assert_eq!(ed.document().len(), 31);
}

#[test]
fn test_capacity_invariant_under_random_commands() {
    let mut ed = Editor::new(&options(48));
    ed.set_viewport(7, 4);
    let script = [
        Command::InsertText(b"lorem ipsum dolor\rsit amet".to_vec()),
        Command::Mark,
        Command::MoveUp,
        Command::Mark,
        Command::Copy,
        Command::Paste,
        Command::Paste,
        Command::Paste,
        Command::PageUp,
        Command::Tab,
        Command::DeleteLine,
        Command::PageDown,
        Command::Backspace,
        Command::Paste,
        Command::LineHome,
        Command::Cut,
        Command::Undo,
        Command::LineEnd,
        Command::InsertText(vec![b'z'; 40]),
    ];
    for cmd in script.iter().cycle().take(200) {
        ed.handle_command(cmd.clone());
        let doc = ed.document();
        assert!(doc.len() < 48);
        assert!(doc.cursor <= doc.len());
        if let Some((start, end)) = doc.selection.range() {
            assert!(start <= end && end <= doc.len());
        }
        let frame = ed.render();
        assert_eq!(frame.rows.len(), 4);
        assert!(frame.cursor.0 < 7 && frame.cursor.1 < 4);
    }
}

// ── Selection and clipboard ────────────────────────────────────────────

#[test]
fn test_cut_marked_range() {
    let mut ed = Editor::new(&options(256));
    type_text(&mut ed, "0123456789");
    ed.handle_command(Command::LineHome);
    ed.handle_command(Command::MoveRight);
    ed.handle_command(Command::MoveRight);
    ed.handle_command(Command::Mark);
    for _ in 0..3 {
        ed.handle_command(Command::MoveRight);
    }
    ed.handle_command(Command::Mark);
    ed.handle_command(Command::Cut);

    assert_eq!(ed.clipboard().as_bytes(), b"234");
    assert_eq!(ed.document().as_bytes(), b"0156789");
    assert_eq!(ed.document().len(), 7);
}

#[test]
fn test_delete_with_selection_ignores_count() {
    let mut doc = Document::from_bytes(b"0123456789", 64).unwrap();
    doc.cursor = 7;
    doc.mark();
    doc.cursor = 4;
    doc.mark();
    assert_eq!(doc.delete(1), 3);
    assert_eq!(doc.as_bytes(), b"0123789");
    assert_eq!(doc.cursor, 4);
    assert!(!doc.selection.is_active());
}

#[test]
fn test_clipboard_survives_undo() {
    let mut ed = Editor::new(&options(256));
    type_text(&mut ed, "abc");
    ed.handle_command(Command::LineHome);
    ed.handle_command(Command::Mark);
    ed.handle_command(Command::LineEnd);
    ed.handle_command(Command::Mark);
    ed.handle_command(Command::Cut);
    ed.handle_command(Command::Undo);
    ed.handle_command(Command::Undo);
    assert!(ed.document().is_empty());
    ed.handle_command(Command::Paste);
    assert_eq!(ed.document().as_bytes(), b"abc");
}

// ── Undo ───────────────────────────────────────────────────────────────

#[test]
fn test_undo_restores_everything() {
    let mut ed = Editor::new(&options(256));
    type_text(&mut ed, "one\ntwo\nthree");
    ed.handle_command(Command::MoveUp);
    let before = ed.document().clone();

    ed.handle_command(Command::DeleteLine);
    type_text(&mut ed, "2\n");
    assert_eq!(ed.document().as_bytes(), b"one\n2\nthree");

    ed.handle_command(Command::Undo);
    ed.handle_command(Command::Undo);
    assert_eq!(ed.document(), &before);
}

#[test]
fn test_independent_editors() {
    let mut a = Editor::new(&options(64));
    let mut b = Editor::new(&options(64));
    type_text(&mut a, "left");
    type_text(&mut b, "right");
    a.handle_command(Command::Undo);
    assert!(a.document().is_empty());
    assert_eq!(b.document().as_bytes(), b"right");
}

// ── Scrolling ──────────────────────────────────────────────────────────

#[test]
fn test_long_document_keeps_cursor_visible() {
    let mut ed = Editor::new(&options(8192));
    ed.set_viewport(20, 6);
    for i in 0..200 {
        type_text(&mut ed, &format!("line {i} with some words\n"));
    }

    for _ in 0..100 {
        ed.handle_command(Command::PageUp);
        let frame = ed.render();
        let (_, row) = frame.cursor;
        let offset = frame.rows[row].offset.unwrap();
        assert!(offset <= ed.document().cursor);
    }
    assert_eq!(ed.document().cursor, 0);
    assert_eq!(ed.render().rows[0].offset, Some(0));
}
