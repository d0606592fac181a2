//! End-to-end session behavior: dispatch, echo formatting, side effects.

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use folioterm::session::{
    ClearBehavior, LogEntry, Profile, ResourceSaver, Session, UrlOpener, BLANK_ECHO,
    RESUME_FILENAME, WELCOME,
};

/// Records every URL the session asks to open.
#[derive(Debug, Clone, Default)]
struct RecordingOpener {
    urls: Arc<Mutex<Vec<String>>>,
}

impl UrlOpener for RecordingOpener {
    fn open_url(&self, url: &str) -> io::Result<()> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Records every resource the session asks to save.
#[derive(Debug, Clone, Default)]
struct RecordingSaver {
    saved: Arc<Mutex<Vec<(String, String)>>>,
}

impl ResourceSaver for RecordingSaver {
    fn save_text(&self, filename: &str, contents: &str) -> io::Result<PathBuf> {
        self.saved
            .lock()
            .unwrap()
            .push((filename.to_string(), contents.to_string()));
        Ok(PathBuf::from(filename))
    }
}

fn session_with(opener: RecordingOpener, saver: RecordingSaver) -> Session {
    Session::new(
        Profile::default(),
        ClearBehavior::default(),
        Box::new(opener),
        Box::new(saver),
        None,
    )
}

#[test]
fn submission_produces_one_echo_then_outputs() {
    let mut session = Session::detached();
    session.submit("echo a b c");
    let transcript = session.transcript();
    assert_eq!(transcript[1], LogEntry::echo("# echo a b c "));
    assert_eq!(transcript[2], LogEntry::output("a b c"));
    assert_eq!(transcript.len(), 3);
}

#[test]
fn empty_submission_appends_one_invisible_echo_and_skips_history() {
    let mut session = Session::detached();
    session.submit("");
    session.submit("   \t ");
    assert_eq!(session.history_len(), 0);
    let blanks: Vec<_> = session
        .transcript()
        .iter()
        .filter(|e| e.is_command_echo)
        .collect();
    assert_eq!(blanks.len(), 2);
    assert!(blanks.iter().all(|e| e.text == BLANK_ECHO));
}

#[test]
fn unknown_command_message_is_exact() {
    let mut session = Session::detached();
    session.submit("foo");
    assert_eq!(
        session.transcript().last().unwrap().text,
        "Command not found: foo. Type \"help\"."
    );
}

#[test]
fn command_matching_ignores_case_but_arguments_keep_theirs() {
    let mut session = Session::detached();
    session.submit("EcHo KeEp CaSe");
    assert_eq!(session.transcript().last().unwrap().text, "KeEp CaSe");
}

#[test]
fn help_lists_every_command_in_declaration_order() {
    let mut session = Session::detached();
    session.submit("help");
    let lines: Vec<&str> = session
        .transcript()
        .iter()
        .skip(2) // welcome + echo
        .map(|e| e.text.as_str())
        .collect();
    let names: Vec<&str> = lines.iter().map(|l| l[..10].trim_end()).collect();
    assert_eq!(
        names,
        ["help", "about", "clear", "date", "echo", "github", "resume", "download"]
    );
    for line in lines {
        assert_eq!(&line[10..13], " - ");
    }
}

#[test]
fn github_opens_the_profile_url() {
    let opener = RecordingOpener::default();
    let mut session = session_with(opener.clone(), RecordingSaver::default());
    session.submit("github");
    assert_eq!(
        opener.urls.lock().unwrap().as_slice(),
        ["https://github.com/Kisetsu15"]
    );
    assert!(session
        .transcript()
        .last()
        .unwrap()
        .text
        .contains("Opening GitHub profile"));
}

#[test]
fn resume_opens_the_resume_url() {
    let opener = RecordingOpener::default();
    let mut session = session_with(opener.clone(), RecordingSaver::default());
    session.submit("resume");
    assert_eq!(opener.urls.lock().unwrap().len(), 1);
    assert!(opener.urls.lock().unwrap()[0].contains("resume"));
}

#[test]
fn download_saves_the_resume_then_confirms() {
    let saver = RecordingSaver::default();
    let mut session = session_with(RecordingOpener::default(), saver.clone());
    session.submit("download");
    let saved = saver.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].0, RESUME_FILENAME);
    assert!(saved[0].1.contains("Kisetsu"));
    assert!(session
        .transcript()
        .last()
        .unwrap()
        .text
        .contains("resume.txt"));
}

#[test]
fn clear_does_not_touch_history() {
    let mut session = Session::detached();
    session.submit("echo one");
    session.submit("clear");
    assert_eq!(session.transcript(), [LogEntry::output(WELCOME)]);
    assert_eq!(session.history_len(), 2);
    // The cleared entries are recallable
    assert_eq!(session.history_up(), Some("clear".to_string()));
}

#[test]
fn side_effect_failures_stay_invisible() {
    struct FailingOpener;
    impl UrlOpener for FailingOpener {
        fn open_url(&self, _url: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Other, "boom"))
        }
    }

    let mut session = Session::new(
        Profile::default(),
        ClearBehavior::default(),
        Box::new(FailingOpener),
        Box::new(RecordingSaver::default()),
        None,
    );
    session.submit("github");
    // Only the status line, no error surfaced in the transcript
    assert!(session
        .transcript()
        .last()
        .unwrap()
        .text
        .contains("Opening GitHub profile"));
}
