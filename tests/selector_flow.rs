//! End-to-end selector sessions over a real tries root.

use chrono::{Duration, Local};
use std::fs::{self, File};
use std::path::Path;
use std::time::SystemTime;
use tempfile::TempDir;
use tries::catalog::list_entries;
use tries::script::for_outcome;
use tries::{handle_event, initialize, AppState, Config, Event, Mode, Outcome};

fn root_with(names: &[&str]) -> TempDir {
    let root = tempfile::tempdir().unwrap();
    for name in names {
        fs::create_dir(root.path().join(name)).unwrap();
    }
    root
}

fn age(dir: &Path, by: Duration) {
    let when = SystemTime::now() - by.to_std().unwrap();
    File::open(dir).unwrap().set_modified(when).unwrap();
}

fn session(root: &Path, query: &str) -> AppState {
    let entries = list_entries(root).unwrap();
    initialize(&Config::default(), root.to_path_buf(), entries, query)
}

fn drive(state: &mut AppState, events: &[Event]) -> Option<Outcome> {
    events.iter().find_map(|event| handle_event(state, event).1)
}

fn type_text(text: &str) -> Vec<Event> {
    text.chars().map(Event::Char).collect()
}

#[test]
fn most_recently_touched_try_is_preselected() {
    let root = root_with(&["2024-01-01-old", "2024-03-01-fresh"]);
    age(&root.path().join("2024-01-01-old"), Duration::days(30));

    let mut state = session(root.path(), "");
    let outcome = drive(&mut state, &[Event::Confirm]);
    assert_eq!(
        outcome,
        Some(Outcome::Selected(root.path().join("2024-03-01-fresh")))
    );
}

#[test]
fn query_narrows_and_selects_match() {
    let root = root_with(&["2024-05-01-redis", "2024-05-02-postgres", "2024-05-03-react"]);

    let mut state = session(root.path(), "");
    let mut events = type_text("pg");
    events.push(Event::Confirm);

    let outcome = drive(&mut state, &events).unwrap();
    assert_eq!(outcome, Outcome::Selected(root.path().join("2024-05-02-postgres")));

    let script = for_outcome(&outcome, root.path()).unwrap();
    assert!(script.contains("cd '"));
    assert!(script.contains("2024-05-02-postgres'"));
    assert!(!script.contains("mkdir -p"));
}

#[test]
fn unmatched_query_creates_dated_try() {
    let root = root_with(&["2024-05-01-redis"]);

    let mut state = session(root.path(), "new idea");
    assert!(state.filtered.is_empty());
    let outcome = drive(&mut state, &[Event::Confirm]).unwrap();

    let today = Local::now().format("%Y-%m-%d");
    let expected = root.path().join(format!("{today}-new-idea"));
    assert_eq!(outcome, Outcome::Selected(expected.clone()));
    assert!(expected.is_dir());
}

#[test]
fn blank_query_uses_configured_default_name() {
    let root = root_with(&[]);
    let config = Config::from_toml_str("default_name = \"scratch\"").unwrap();
    let mut state = initialize(&config, root.path().to_path_buf(), vec![], "");

    let outcome = drive(&mut state, &[Event::Confirm]).unwrap();
    let name = outcome.path().and_then(|p| p.file_name()).unwrap().to_string_lossy().into_owned();
    assert!(name.ends_with("-scratch"), "{name}");
}

#[test]
fn delete_flow_emits_removal_script_without_touching_disk() {
    let root = root_with(&["2024-05-01-doomed"]);
    let mut state = session(root.path(), "");

    let mut events = vec![Event::DeleteRequest];
    events.extend(type_text("YES"));
    events.push(Event::Confirm);

    let outcome = drive(&mut state, &events).unwrap();
    let target = root.path().join("2024-05-01-doomed");
    assert_eq!(outcome, Outcome::Deleted(target.clone()));
    assert!(target.is_dir());

    let script = for_outcome(&outcome, root.path()).unwrap();
    assert!(script.contains("test -d '2024-05-01-doomed' && rm -rf '2024-05-01-doomed'"));
}

#[test]
fn wrong_confirmation_then_escape_keeps_browsing() {
    let root = root_with(&["keep-me"]);
    let mut state = session(root.path(), "");

    let mut events = vec![Event::DeleteRequest];
    events.extend(type_text("yes"));
    events.push(Event::Confirm);
    events.push(Event::Cancel);

    assert_eq!(drive(&mut state, &events), None);
    assert_eq!(state.mode, Mode::Browsing);
    assert_eq!(state.filtered.len(), 1);

    assert_eq!(drive(&mut state, &[Event::Cancel]), Some(Outcome::Cancelled));
    assert_eq!(for_outcome(&Outcome::Cancelled, root.path()), None);
}

#[test]
fn files_in_root_are_not_tries() {
    let root = root_with(&["real"]);
    fs::write(root.path().join("README.md"), "notes").unwrap();

    let state = session(root.path(), "");
    assert_eq!(state.entries.len(), 1);
    assert_eq!(state.filtered[0].name(), "real");
}
