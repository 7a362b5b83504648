//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place [`AppState`] changes. Each call fully
//! settles the state (re-rank, clamp the cursor) before returning, and reports
//! whether a re-render is needed and whether the session has ended.
//!
//! # Transitions
//!
//! ```text
//! Browsing ──DeleteRequest (on an entry)──▶ ConfirmingDelete
//!    ▲                                         │
//!    └──────────────── Cancel ─────────────────┘
//!
//! Browsing:         Confirm → Selected    Cancel → Cancelled
//! ConfirmingDelete: Confirm with "YES" → Deleted
//! ```
//!
//! # Example
//!
//! ```rust
//! use tries::app::{handle_event, AppState, Event, Outcome};
//! use tries::ui::Theme;
//!
//! let mut state = AppState::new("/tmp/tries".into(), vec![], "", Theme::default());
//! let (_, outcome) = handle_event(&mut state, &Event::Cancel);
//! assert_eq!(outcome, Some(Outcome::Cancelled));
//! ```

use crate::app::modes::{DeletePrompt, Mode};
use crate::app::{AppState, Outcome};
use chrono::Local;

/// Discrete input events understood by the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A typed character.
    Char(char),
    /// Erase the last typed character.
    Backspace,
    /// Move the cursor up.
    Up,
    /// Move the cursor down.
    Down,
    /// Enter: select, create, or submit the delete confirmation.
    Confirm,
    /// Ask to delete the entry under the cursor.
    DeleteRequest,
    /// Escape: leave the selector, or leave the delete prompt.
    Cancel,
    /// The terminal was resized.
    Resize {
        /// New height in rows.
        rows: usize,
        /// New width in columns.
        cols: usize,
    },
}

/// Applies one event to the selector.
///
/// Returns `(should_render, outcome)`. Once an outcome is returned the session
/// is over and the state should be dropped.
pub fn handle_event(state: &mut AppState, event: &Event) -> (bool, Option<Outcome>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if let Event::Resize { rows, cols } = *event {
        state.rows = rows;
        state.cols = cols;
        return (true, None);
    }

    match state.mode {
        Mode::Browsing => handle_browsing(state, event),
        Mode::ConfirmingDelete(_) => handle_confirming_delete(state, event),
    }
}

fn handle_browsing(state: &mut AppState, event: &Event) -> (bool, Option<Outcome>) {
    match event {
        Event::Char(c) => {
            if c.is_control() {
                return (false, None);
            }
            state.push_query_char(*c);
            tracing::trace!(query = %state.query, "query updated");
            (true, None)
        }
        Event::Backspace => {
            state.pop_query_char();
            (true, None)
        }
        Event::Up => {
            state.move_selection_up();
            (true, None)
        }
        Event::Down => {
            state.move_selection_down();
            (true, None)
        }
        Event::Confirm => {
            if let Some(scored) = state.selected_entry() {
                tracing::debug!(path = %scored.entry.path.display(), "entry selected");
                return (false, Some(Outcome::Selected(scored.entry.path.clone())));
            }

            let target = state.new_try_path(Local::now().date_naive());
            if let Err(e) = std::fs::create_dir_all(&target) {
                tracing::warn!(path = %target.display(), error = %e, "failed to create new try");
            } else {
                tracing::debug!(path = %target.display(), "created new try");
            }
            (false, Some(Outcome::Selected(target)))
        }
        Event::DeleteRequest => {
            let Some(scored) = state.selected_entry() else {
                tracing::debug!("delete requested on create row, ignoring");
                return (false, None);
            };
            let target = scored.entry.path.clone();
            tracing::debug!(path = %target.display(), "delete requested");
            state.mode = Mode::ConfirmingDelete(DeletePrompt::new(target));
            (true, None)
        }
        Event::Cancel => {
            tracing::debug!("selector cancelled");
            (false, Some(Outcome::Cancelled))
        }
        Event::Resize { .. } => (true, None),
    }
}

fn handle_confirming_delete(state: &mut AppState, event: &Event) -> (bool, Option<Outcome>) {
    let Mode::ConfirmingDelete(prompt) = &mut state.mode else {
        return (false, None);
    };

    match event {
        Event::Cancel => {
            tracing::debug!(path = %prompt.target.display(), "delete aborted");
            state.mode = Mode::Browsing;
            (true, None)
        }
        Event::Char(c) => {
            if c.is_control() {
                return (false, None);
            }
            prompt.buffer.push(*c);
            (true, None)
        }
        Event::Backspace => {
            prompt.buffer.pop();
            (true, None)
        }
        Event::Confirm => {
            if prompt.is_confirmed() {
                tracing::debug!(path = %prompt.target.display(), "delete confirmed");
                return (false, Some(Outcome::Deleted(prompt.target.clone())));
            }
            tracing::debug!("delete confirmation rejected");
            (false, None)
        }
        Event::Up | Event::Down | Event::DeleteRequest | Event::Resize { .. } => (false, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;
    use crate::ui::Theme;
    use chrono::{Duration, Utc};
    use std::path::PathBuf;

    fn state_with(names: &[&str]) -> AppState {
        let now = Utc::now();
        let entries = names
            .iter()
            .map(|name| Entry::new(format!("/tries/{name}").into(), now, now))
            .collect();
        AppState::new("/tries".into(), entries, "", Theme::default())
    }

    fn send(state: &mut AppState, events: &[Event]) -> Option<Outcome> {
        events
            .iter()
            .find_map(|event| handle_event(state, event).1)
    }

    fn type_str(state: &mut AppState, text: &str) {
        for c in text.chars() {
            assert_eq!(handle_event(state, &Event::Char(c)).1, None);
        }
    }

    #[test]
    fn typing_filters_and_backspace_restores() {
        let mut s = state_with(&["alpha", "beta"]);
        type_str(&mut s, "al");
        assert_eq!(s.filtered.len(), 1);
        send(&mut s, &[Event::Backspace, Event::Backspace]);
        assert_eq!(s.filtered.len(), 2);
        assert_eq!(s.query, "");
    }

    #[test]
    fn control_chars_are_ignored() {
        let mut s = state_with(&["alpha"]);
        assert_eq!(handle_event(&mut s, &Event::Char('\n')), (false, None));
        assert_eq!(s.query, "");
    }

    #[test]
    fn confirm_on_entry_selects_it() {
        let mut s = state_with(&["alpha"]);
        assert_eq!(
            send(&mut s, &[Event::Confirm]),
            Some(Outcome::Selected(PathBuf::from("/tries/alpha")))
        );
    }

    #[test]
    fn cancel_exits_from_browsing() {
        let mut s = state_with(&["alpha"]);
        assert_eq!(send(&mut s, &[Event::Down, Event::Cancel]), Some(Outcome::Cancelled));
    }

    #[test]
    fn cursor_stays_in_range_under_any_navigation() {
        let mut s = state_with(&["a", "b", "c"]);
        let script = [
            Event::Up,
            Event::Down,
            Event::Down,
            Event::Down,
            Event::Down,
            Event::Down,
            Event::Char('b'),
            Event::Down,
            Event::Down,
            Event::Backspace,
            Event::Up,
            Event::Up,
            Event::Up,
            Event::Up,
        ];
        for event in &script {
            handle_event(&mut s, event);
            assert!(s.cursor <= s.filtered.len());
        }
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn delete_request_on_create_row_is_noop() {
        let mut s = state_with(&["alpha"]);
        send(&mut s, &[Event::Down]);
        assert!(s.is_on_create_row());
        assert_eq!(handle_event(&mut s, &Event::DeleteRequest), (false, None));
        assert_eq!(s.mode, Mode::Browsing);
    }

    #[test]
    fn delete_requires_exact_yes() {
        let mut s = state_with(&["alpha"]);
        send(&mut s, &[Event::DeleteRequest]);
        assert!(s.mode.is_confirming_delete());

        type_str(&mut s, "NO");
        assert_eq!(handle_event(&mut s, &Event::Confirm), (false, None));
        assert!(s.mode.is_confirming_delete());

        send(&mut s, &[Event::Backspace, Event::Backspace]);
        type_str(&mut s, "YES");
        assert_eq!(
            handle_event(&mut s, &Event::Confirm).1,
            Some(Outcome::Deleted(PathBuf::from("/tries/alpha")))
        );
    }

    #[test]
    fn near_miss_confirmations_never_delete() {
        for wrong in ["yes", "YES ", "YESS"] {
            let mut s = state_with(&["alpha"]);
            send(&mut s, &[Event::DeleteRequest]);
            type_str(&mut s, wrong);
            assert_eq!(handle_event(&mut s, &Event::Confirm).1, None, "{wrong:?}");
            let Mode::ConfirmingDelete(prompt) = &s.mode else {
                panic!("left confirm mode on {wrong:?}");
            };
            assert_eq!(prompt.buffer, wrong);
        }
    }

    #[test]
    fn cancel_in_delete_mode_returns_to_browsing() {
        let mut s = state_with(&["alpha", "beta"]);
        type_str(&mut s, "a");
        let filtered_before = s.filtered.len();
        send(&mut s, &[Event::DeleteRequest]);
        assert_eq!(handle_event(&mut s, &Event::Cancel), (true, None));
        assert_eq!(s.mode, Mode::Browsing);
        assert_eq!(s.query, "a");
        assert_eq!(s.filtered.len(), filtered_before);
    }

    #[test]
    fn navigation_is_ignored_while_confirming() {
        let mut s = state_with(&["alpha", "beta"]);
        send(&mut s, &[Event::DeleteRequest]);
        send(&mut s, &[Event::Down, Event::Down, Event::DeleteRequest]);
        assert_eq!(s.cursor, 0);
        let Mode::ConfirmingDelete(prompt) = &s.mode else {
            panic!("expected confirm mode");
        };
        assert!(prompt.buffer.is_empty());
    }

    #[test]
    fn resize_updates_viewport_in_any_mode() {
        let mut s = state_with(&["alpha"]);
        send(&mut s, &[Event::DeleteRequest]);
        assert_eq!(handle_event(&mut s, &Event::Resize { rows: 40, cols: 120 }), (true, None));
        assert_eq!((s.rows, s.cols), (40, 120));
        assert!(s.mode.is_confirming_delete());
    }

    #[test]
    fn create_new_makes_dated_directory() {
        let root = tempfile::tempdir().unwrap();
        let mut s = AppState::new(root.path().to_path_buf(), vec![], "my test", Theme::default());
        assert!(s.is_on_create_row());

        let today = Local::now().format("%Y-%m-%d").to_string();
        let expected = root.path().join(format!("{today}-my-test"));
        assert_eq!(send(&mut s, &[Event::Confirm]), Some(Outcome::Selected(expected.clone())));
        assert!(expected.is_dir());
    }

    #[test]
    fn create_new_disambiguates_existing_name() {
        let root = tempfile::tempdir().unwrap();
        let today = Local::now().format("%Y-%m-%d").to_string();
        std::fs::create_dir(root.path().join(format!("{today}-my-test"))).unwrap();

        let mut s = AppState::new(root.path().to_path_buf(), vec![], "my test", Theme::default());
        let expected = root.path().join(format!("{today}-my-test-2"));
        assert_eq!(send(&mut s, &[Event::Confirm]), Some(Outcome::Selected(expected.clone())));
        assert!(expected.is_dir());
    }

    #[test]
    fn create_failure_still_reports_path() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("blocker");
        std::fs::write(&blocker, "file").unwrap();

        let mut s = AppState::new(blocker.clone(), vec![], "x", Theme::default());
        let outcome = send(&mut s, &[Event::Confirm]);
        let Some(Outcome::Selected(path)) = outcome else {
            panic!("expected a selection, got {outcome:?}");
        };
        assert!(path.starts_with(&blocker));
        assert!(!path.exists());
    }

    #[test]
    fn recent_entry_is_first_for_empty_query() {
        let now = Utc::now();
        let entries = vec![
            Entry::new("/tries/b".into(), now - Duration::days(10), now - Duration::days(10)),
            Entry::new("/tries/a".into(), now - Duration::hours(1), now - Duration::hours(1)),
        ];
        let s = AppState::new("/tries".into(), entries, "", Theme::default());
        let names: Vec<&str> = s.filtered.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
