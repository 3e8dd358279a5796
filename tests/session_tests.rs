//! Session Tests
//!
//! Tests verify:
//! - One response line per command
//! - Errors are reported and the session keeps going
//! - Scripts can be run from files
//! - Summary counters

use std::io::{Cursor, Write};

use stagekv::protocol::MAX_LINE_SIZE;
use stagekv::{Session, SessionSummary, TransactionalStore};
use tempfile::NamedTempFile;

// =============================================================================
// Helper Functions
// =============================================================================

fn run_script(script: &str) -> (SessionSummary, TransactionalStore, String) {
    let mut session = Session::new(Cursor::new(script.to_string()), Vec::new());
    let summary = session.run().unwrap();
    let (store, out) = session.into_parts();
    (summary, store, String::from_utf8(out).unwrap())
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_commit_then_rollback_script() {
    let script = "\
BEGIN
PUT A 5
GET A
COMMIT
GET A
BEGIN
PUT A 10
PUT B 20
GET A
GET B
ROLLBACK
GET A
GET B
";
    let (summary, store, out) = run_script(script);

    let expected = "\
OK
OK
5
OK
5
OK
OK
OK
10
20
OK
5
ERR Key not found: B
";
    assert_eq!(out, expected);
    assert_eq!(summary, SessionSummary { commands: 13, errors: 1 });
    assert_eq!(store.get("A").unwrap(), 5);
}

#[test]
fn test_errors_do_not_stop_session() {
    let script = "\
GET C
PUT C 3
COMMIT
nonsense
BEGIN
BEGIN
PUT C 3
COMMIT
GET C
";
    let (summary, store, out) = run_script(script);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 9);
    assert_eq!(lines[0], "ERR Key not found: C");
    assert_eq!(lines[1], "ERR No transaction in progress");
    assert_eq!(lines[2], "ERR No transaction in progress");
    assert!(lines[3].starts_with("ERR Parse error"));
    assert_eq!(lines[4], "OK");
    assert_eq!(lines[5], "ERR Transaction already in progress");
    assert_eq!(lines[8], "3");
    assert_eq!(summary.errors, 5);
    assert_eq!(store.get("C").unwrap(), 3);
}

#[test]
fn test_comments_and_blank_lines_are_not_commands() {
    let (summary, _, out) = run_script("# comment\n\nBEGIN\n   \n# another\nCOMMIT\n");

    assert_eq!(out, "OK\nOK\n");
    assert_eq!(summary.commands, 2);
}

#[test]
fn test_open_transaction_is_left_active_at_end() {
    let (_, store, _) = run_script("BEGIN\nPUT A 1\n");

    assert!(store.is_active());
    assert_eq!(store.committed_len(), 0);
}

#[test]
fn test_prompt_written_before_each_read() {
    let mut session = Session::new(Cursor::new("BEGIN\n"), Vec::new()).prompt("> ");
    session.run().unwrap();
    let (_, out) = session.into_parts();

    // One prompt per command plus one before end of input, closed by a newline
    assert_eq!(String::from_utf8(out).unwrap(), "> OK\n> \n");
}

#[test]
fn test_no_trailing_newline_without_prompt() {
    let (_, _, out) = run_script("BEGIN\n");

    assert_eq!(out, "OK\n");
}

#[test]
fn test_invalid_utf8_line_reported_and_session_continues() {
    let mut input = Vec::new();
    input.extend_from_slice(b"BEGIN\nPUT A 1\n");
    input.extend_from_slice(b"GET \xff\xfe\n");
    input.extend_from_slice(b"COMMIT\nGET A\n");

    let mut session = Session::new(Cursor::new(input), Vec::new());
    let summary = session.run().unwrap();
    let (store, out) = session.into_parts();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(&lines[..2], &["OK", "OK"]);
    assert!(lines[2].starts_with("ERR Parse error: invalid UTF-8"));
    assert_eq!(&lines[3..], &["OK", "1"]);
    assert_eq!(summary, SessionSummary { commands: 5, errors: 1 });
    assert!(!store.is_active());
    assert_eq!(store.get("A").unwrap(), 1);
}

#[test]
fn test_overlong_line_reported_and_session_continues() {
    let mut input = b"BEGIN\nPUT ".to_vec();
    input.extend(std::iter::repeat(b'k').take(MAX_LINE_SIZE + 10));
    input.extend_from_slice(b" 1\nPUT A 2\nCOMMIT\nGET A\n");

    let mut session = Session::new(Cursor::new(input), Vec::new());
    let summary = session.run().unwrap();
    let (store, out) = session.into_parts();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "OK");
    assert!(lines[1].starts_with("ERR Parse error: line too long"));
    assert_eq!(&lines[2..], &["OK", "OK", "2"]);
    assert_eq!(summary.errors, 1);
    assert_eq!(store.committed_len(), 1);
}

#[test]
fn test_session_over_existing_store() {
    let mut store = TransactionalStore::new();
    store.begin().unwrap();
    store.put("A", 1).unwrap();
    store.commit().unwrap();

    let mut session = Session::with_store(Cursor::new("GET A\n"), Vec::new(), store);
    session.run().unwrap();

    assert_eq!(session.store().committed_len(), 1);
    let (_, out) = session.into_parts();
    assert_eq!(out, b"1\n");
}

#[test]
fn test_session_from_script_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "BEGIN").unwrap();
    writeln!(file, "PUT X 99").unwrap();
    writeln!(file, "COMMIT").unwrap();
    writeln!(file, "GET X").unwrap();
    file.flush().unwrap();

    let mut session =
        Session::from_path(file.path(), Vec::new(), TransactionalStore::new()).unwrap();
    let summary = session.run().unwrap();
    let (store, out) = session.into_parts();

    assert_eq!(String::from_utf8(out).unwrap(), "OK\nOK\nOK\n99\n");
    assert_eq!(summary, SessionSummary { commands: 4, errors: 0 });
    assert_eq!(store.get("X").unwrap(), 99);
}

#[test]
fn test_session_from_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let result = Session::from_path(&missing, Vec::new(), TransactionalStore::new());

    assert!(matches!(result, Err(stagekv::StoreError::Io(_))));
}
