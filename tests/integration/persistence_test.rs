//! Transcript persistence: round-trips and corrupt-store recovery.

use std::fs;

use folioterm::session::{
    ClearBehavior, LogEntry, NullOpener, NullSaver, Profile, Session, WELCOME,
};
use folioterm::store::{JsonFileStore, MemoryStore, TranscriptStore, STORE_FILE};

fn session_backed_by(store: JsonFileStore) -> Session {
    Session::new(
        Profile::default(),
        ClearBehavior::default(),
        Box::new(NullOpener),
        Box::new(NullSaver),
        Some(Box::new(store)),
    )
}

#[test]
fn reloading_reproduces_the_identical_transcript() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(STORE_FILE);

    let mut session = session_backed_by(JsonFileStore::at(&path));
    session.submit("echo a b c");
    session.submit("help");
    let before: Vec<LogEntry> = session.transcript().to_vec();
    drop(session);

    let reloaded = session_backed_by(JsonFileStore::at(&path));
    assert_eq!(reloaded.transcript(), before.as_slice());
}

#[test]
fn preseeded_store_restores_the_transcript() {
    let seeded = vec![LogEntry::echo("# echo hi "), LogEntry::output("hi")];
    let session = Session::new(
        Profile::default(),
        ClearBehavior::default(),
        Box::new(NullOpener),
        Box::new(NullSaver),
        Some(Box::new(MemoryStore::preloaded(seeded.clone()))),
    );
    assert_eq!(session.transcript(), seeded.as_slice());
}

#[test]
fn corrupted_store_falls_back_to_welcome() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(STORE_FILE);
    fs::write(&path, "definitely-not-json").unwrap();

    let session = session_backed_by(JsonFileStore::at(&path));
    assert_eq!(session.transcript(), [LogEntry::output(WELCOME)]);
}

#[test]
fn missing_store_falls_back_to_welcome() {
    let tmp = tempfile::tempdir().unwrap();
    let session = session_backed_by(JsonFileStore::at(tmp.path().join("absent.json")));
    assert_eq!(session.transcript(), [LogEntry::output(WELCOME)]);
}

#[test]
fn empty_stored_array_falls_back_to_welcome() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(STORE_FILE);
    fs::write(&path, "[]").unwrap();

    let session = session_backed_by(JsonFileStore::at(&path));
    assert_eq!(session.transcript(), [LogEntry::output(WELCOME)]);
}

#[test]
fn on_disk_records_use_the_compact_schema() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(STORE_FILE);

    let mut session = session_backed_by(JsonFileStore::at(&path));
    session.submit("echo hi");
    drop(session);

    let raw = fs::read_to_string(&path).unwrap();
    assert!(raw.contains(r##"{"t":"# echo hi ","cmd":true}"##));
    assert!(raw.contains(r#"{"t":"hi"}"#));
}

#[test]
fn clear_is_persisted_too() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join(STORE_FILE);

    let mut session = session_backed_by(JsonFileStore::at(&path));
    session.submit("echo hi");
    session.submit("clear");
    drop(session);

    let store = JsonFileStore::at(&path);
    assert_eq!(store.load().unwrap(), [LogEntry::output(WELCOME)]);
}
