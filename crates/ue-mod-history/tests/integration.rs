// Integration tests for the undo log.
//
// These exercise longer edit/undo sequences the way the editor drives the
// log: snapshot before each change, undo restores the previous value.

use ue_mod_history::{HistoryConfig, UndoLog};

fn edit(doc: &mut Vec<u8>, log: &mut UndoLog<Vec<u8>>, byte: u8) {
    log.push(doc.clone());
    doc.push(byte);
}

// ── Full Workflow ──────────────────────────────────────────────────────

#[test]
fn test_full_workflow_edit_undo_edit_undo() {
    let mut log = UndoLog::new(&HistoryConfig::with_levels(8));
    let mut doc = Vec::new();

    for b in b"hello" {
        edit(&mut doc, &mut log, *b);
    }
    assert_eq!(doc, b"hello");

    // Undo two edits
    assert_eq!(log.undo().unwrap(), b"hell");
    doc = log.undo().unwrap();
    assert_eq!(doc, b"hel");

    // New edit after undo continues from the restored state
    edit(&mut doc, &mut log, b'p');
    assert_eq!(doc, b"help");

    doc = log.undo().unwrap();
    assert_eq!(doc, b"hel");
    for _ in 0..3 {
        doc = log.undo().unwrap();
    }
    assert!(doc.is_empty());
    assert!(log.undo().is_none());
}

#[test]
fn test_only_last_levels_survive_long_session() {
    let levels = 16;
    let mut log = UndoLog::new(&HistoryConfig::with_levels(levels));
    let mut doc = Vec::new();

    for i in 0..100u8 {
        edit(&mut doc, &mut log, i);
    }
    assert_eq!(log.available(), levels);

    let mut undone = 0;
    while let Some(prev) = log.undo() {
        doc = prev;
        undone += 1;
    }
    assert_eq!(undone, levels);
    assert_eq!(doc.len(), 100 - levels);
}

#[test]
fn test_independent_logs() {
    let mut log_a = UndoLog::new(&HistoryConfig::with_levels(4));
    let mut log_b = UndoLog::new(&HistoryConfig::with_levels(4));
    let mut a = Vec::new();
    let mut b = Vec::new();

    edit(&mut a, &mut log_a, b'a');
    edit(&mut b, &mut log_b, b'b');
    edit(&mut b, &mut log_b, b'b');

    assert_eq!(log_a.available(), 1);
    assert_eq!(log_b.available(), 2);
    assert!(log_a.undo().is_some());
    assert!(log_a.undo().is_none());
    assert_eq!(log_b.available(), 2);
}
