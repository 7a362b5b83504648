//! Selector state and view model computation.
//!
//! [`AppState`] owns everything one picker session needs: the catalog snapshot,
//! the live query, the ranked view of the catalog, the cursor and the current
//! [`Mode`]. It is mutated only by [`crate::app::handle_event`], one event at a
//! time, and read by the renderer through [`AppState::compute_viewmodel`].
//!
//! # Cursor
//!
//! The cursor ranges over `0..=filtered.len()`. The extra position
//! `filtered.len()` is the synthetic "create new" row, so there is always
//! something to select even when nothing matches.
//!
//! # Example
//!
//! ```rust
//! use tries::app::AppState;
//! use tries::ui::Theme;
//!
//! let state = AppState::new("/home/me/src/tries".into(), vec![], "demo", Theme::default());
//! assert_eq!(state.cursor, 0);
//! assert!(state.is_on_create_row());
//! ```

use super::modes::Mode;
use crate::catalog::{dated_name, sanitize_name, unique_path};
use crate::domain::{Entry, ScoredEntry};
use crate::ranking::rank;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CreateRowInfo, DeletePromptInfo, DisplayItem, EmptyState, FooterInfo, HeaderInfo, UIViewModel,
};
use chrono::{DateTime, NaiveDate, Utc};
use std::path::{Path, PathBuf};

/// Name used for a new try when the query is blank.
pub const DEFAULT_TRY_NAME: &str = "new-try";

/// Rows taken by the header, two borders and the footer.
const CHROME_ROWS: usize = 4;

/// Width reserved on the right of each row for the "touched" age.
const AGE_COLUMN_WIDTH: usize = 10;

/// Width of the cursor marker column.
const MARKER_WIDTH: usize = 2;

/// Central selector state for one invocation.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Directory new tries are created in.
    pub root: PathBuf,

    /// Catalog snapshot taken before the session started.
    pub entries: Vec<Entry>,

    /// Live query text.
    pub query: String,

    /// Entries matching `query`, best first.
    ///
    /// Recomputed by [`AppState::refresh`] after every query edit.
    pub filtered: Vec<ScoredEntry>,

    /// Index into `filtered`, or `filtered.len()` for the create-new row.
    pub cursor: usize,

    /// Browsing, or confirming a deletion.
    pub mode: Mode,

    /// Reference time for recency scoring, fixed for the session.
    pub now: DateTime<Utc>,

    /// Fallback name for a new try created from a blank query.
    pub default_name: String,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Terminal height in rows.
    pub rows: usize,

    /// Terminal width in columns.
    pub cols: usize,
}

impl AppState {
    /// Creates a session over `entries` with `query` already typed in.
    ///
    /// The list is ranked immediately so the first render is already filtered.
    #[must_use]
    pub fn new(root: PathBuf, entries: Vec<Entry>, query: &str, theme: Theme) -> Self {
        let mut state = Self {
            root,
            entries,
            query: query.to_string(),
            filtered: Vec::new(),
            cursor: 0,
            mode: Mode::Browsing,
            now: Utc::now(),
            default_name: DEFAULT_TRY_NAME.to_string(),
            theme,
            rows: 24,
            cols: 80,
        };
        state.refresh();
        state
    }

    /// Re-ranks the catalog against the current query and clamps the cursor.
    pub fn refresh(&mut self) {
        self.filtered = rank(&self.entries, &self.query, self.now);
        self.cursor = self.cursor.min(self.create_row_index());

        tracing::debug!(
            filtered_count = self.filtered.len(),
            cursor = self.cursor,
            "selector refreshed"
        );
    }

    /// Index of the synthetic create-new row.
    #[must_use]
    pub fn create_row_index(&self) -> usize {
        self.filtered.len()
    }

    #[must_use]
    pub fn is_on_create_row(&self) -> bool {
        self.cursor == self.create_row_index()
    }

    /// Entry under the cursor, or `None` on the create-new row.
    #[must_use]
    pub fn selected_entry(&self) -> Option<&ScoredEntry> {
        self.filtered.get(self.cursor)
    }

    /// Moves the cursor up one row, stopping at the top.
    pub fn move_selection_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor down one row, stopping at the create-new row.
    pub fn move_selection_down(&mut self) {
        if self.cursor < self.create_row_index() {
            self.cursor += 1;
        }
    }

    /// Appends a character to the query and re-ranks.
    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.refresh();
    }

    /// Removes the last query character and re-ranks. No-op on an empty query.
    pub fn pop_query_char(&mut self) {
        if self.query.pop().is_some() {
            self.refresh();
        }
    }

    /// Path a new try would get for the current query on `today`.
    ///
    /// The name is the sanitized query (or the default name) prefixed with the
    /// date, suffixed with `-2`, `-3`, ... if that path is already taken.
    #[must_use]
    pub fn new_try_path(&self, today: NaiveDate) -> PathBuf {
        let name = match sanitize_name(&self.query) {
            name if name.is_empty() => self.default_name.clone(),
            name => name,
        };
        unique_path(&self.root.join(dated_name(today, &name)))
    }

    /// Computes a renderable view model from the current state.
    ///
    /// In browsing mode the list is windowed around the cursor so the
    /// highlighted row (including the create-new row) is always visible.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        if let Mode::ConfirmingDelete(prompt) = &self.mode {
            return UIViewModel {
                header: self.compute_header(),
                display_items: vec![],
                create_row: None,
                footer: self.compute_footer(),
                empty_state: None,
                delete_prompt: Some(DeletePromptInfo {
                    name: display_name(&prompt.target),
                    buffer: prompt.buffer.clone(),
                }),
            };
        }

        let total = self.filtered.len() + 1;
        let available = self.rows.saturating_sub(CHROME_ROWS).max(1);

        let mut visible_start = self.cursor.saturating_sub(available / 2);
        let visible_end = (visible_start + available).min(total);
        if visible_end - visible_start < available && total >= available {
            visible_start = visible_end.saturating_sub(available);
        }

        let name_width = self
            .cols
            .saturating_sub(MARKER_WIDTH + AGE_COLUMN_WIDTH + 1)
            .max(1);

        let display_items = (visible_start..visible_end.min(self.filtered.len()))
            .map(|idx| self.compute_display_item(&self.filtered[idx], idx, name_width))
            .collect();

        let create_row = (visible_end == total).then(|| CreateRowInfo {
            label: if self.query.is_empty() {
                "+ Create new".to_string()
            } else {
                format!("+ Create new: {}", self.query)
            },
            is_selected: self.is_on_create_row(),
        });

        UIViewModel {
            header: self.compute_header(),
            display_items,
            create_row,
            footer: self.compute_footer(),
            empty_state: self.compute_empty_state(),
            delete_prompt: None,
        }
    }

    fn compute_display_item(&self, scored: &ScoredEntry, idx: usize, name_width: usize) -> DisplayItem {
        let char_count = scored.entry.name.chars().count();
        let (name, visible_chars) = if char_count > name_width {
            let keep = name_width.saturating_sub(3);
            let dots = &"..."[..name_width.min(3)];
            let truncated: String = scored.entry.name.chars().take(keep).collect();
            (format!("{truncated}{dots}"), keep)
        } else {
            (scored.entry.name.clone(), char_count)
        };

        DisplayItem {
            name,
            age: scored.entry.time_ago(self.now),
            is_selected: idx == self.cursor,
            highlight_ranges: coalesce_ranges(&scored.highlights, visible_chars),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            prompt: "try » ".to_string(),
            query: self.query.clone(),
            count: format!("{}/{}", self.filtered.len(), self.entries.len()),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.mode {
            Mode::Browsing => "↑/↓ Ctrl-P/N: navigate  Enter: select  Ctrl-D: delete  Esc: cancel",
            Mode::ConfirmingDelete(_) => "Type YES and press Enter to delete  Esc: back",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.filtered.is_empty() {
            return None;
        }
        Some(if self.entries.is_empty() {
            EmptyState {
                message: "No tries yet".to_string(),
                subtitle: "Type a name and press Enter to create one".to_string(),
            }
        } else {
            EmptyState {
                message: "No matching tries".to_string(),
                subtitle: "Press Enter to create one from the query".to_string(),
            }
        })
    }
}

/// Turns sorted match offsets into `(start, end)` runs, dropping anything at
/// or past `limit`.
fn coalesce_ranges(offsets: &[usize], limit: usize) -> Vec<(usize, usize)> {
    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for &idx in offsets.iter().filter(|&&idx| idx < limit) {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::DeletePrompt;
    use chrono::Duration;

    fn entries(now: DateTime<Utc>, names: &[&str]) -> Vec<Entry> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let at = now - Duration::hours(i64::try_from(i).unwrap_or(0) + 1);
                Entry::new(format!("/tries/{name}").into(), at, at)
            })
            .collect()
    }

    fn state(names: &[&str], query: &str) -> AppState {
        let now = Utc::now();
        let mut state = AppState::new("/tries".into(), entries(now, names), query, Theme::default());
        state.now = now;
        state.refresh();
        state
    }

    #[test]
    fn cursor_moves_and_clamps() {
        let mut s = state(&["a", "b"], "");
        s.move_selection_up();
        assert_eq!(s.cursor, 0);
        for _ in 0..5 {
            s.move_selection_down();
        }
        assert_eq!(s.cursor, 2);
        assert!(s.is_on_create_row());
    }

    #[test]
    fn refresh_clamps_cursor_to_shorter_list() {
        let mut s = state(&["alpha", "beta", "gamma"], "");
        s.cursor = 3;
        s.push_query_char('z');
        assert!(s.filtered.is_empty());
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn pop_on_empty_query_is_noop() {
        let mut s = state(&["a"], "");
        s.pop_query_char();
        assert_eq!(s.query, "");
        assert_eq!(s.filtered.len(), 1);
    }

    #[test]
    fn coalesces_adjacent_offsets() {
        assert_eq!(coalesce_ranges(&[0, 1, 2, 5, 7, 8], 100), vec![(0, 3), (5, 6), (7, 9)]);
        assert_eq!(coalesce_ranges(&[1, 2, 9], 5), vec![(1, 3)]);
        assert!(coalesce_ranges(&[], 5).is_empty());
    }

    #[test]
    fn new_try_path_sanitizes_and_dates() {
        let s = state(&[], "my   test");
        let today = NaiveDate::from_ymd_opt(2030, 1, 2).unwrap();
        assert_eq!(s.new_try_path(today), PathBuf::from("/tries/2030-01-02-my-test"));
    }

    #[test]
    fn new_try_path_falls_back_to_default_name() {
        let s = state(&[], "   ");
        let today = NaiveDate::from_ymd_opt(2030, 1, 2).unwrap();
        assert_eq!(s.new_try_path(today), PathBuf::from("/tries/2030-01-02-new-try"));
    }

    #[test]
    fn viewmodel_includes_create_row() {
        let s = state(&["alpha", "beta"], "");
        let vm = s.compute_viewmodel();
        assert_eq!(vm.display_items.len(), 2);
        assert!(vm.display_items[0].is_selected);
        let create = vm.create_row.unwrap();
        assert_eq!(create.label, "+ Create new");
        assert!(!create.is_selected);
        assert!(vm.empty_state.is_none());
    }

    #[test]
    fn viewmodel_windows_around_cursor() {
        let names: Vec<String> = (0..50).map(|i| format!("try-{i:02}")).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut s = state(&refs, "");
        s.rows = 14;
        s.cursor = s.create_row_index();

        let vm = s.compute_viewmodel();
        assert_eq!(vm.display_items.len(), 9);
        assert!(vm.create_row.unwrap().is_selected);
        assert!(vm.display_items.iter().all(|item| !item.is_selected));
    }

    #[test]
    fn viewmodel_highlights_query_matches() {
        let s = state(&["2024-01-01-demo"], "demo");
        let vm = s.compute_viewmodel();
        assert_eq!(vm.display_items[0].highlight_ranges, vec![(11, 15)]);
        assert_eq!(vm.create_row.unwrap().label, "+ Create new: demo");
    }

    #[test]
    fn viewmodel_truncates_long_names() {
        let long = "x".repeat(200);
        let mut s = state(&[long.as_str()], "");
        s.cols = 40;
        let vm = s.compute_viewmodel();
        assert!(vm.display_items[0].name.ends_with("..."));
        assert_eq!(vm.display_items[0].name.chars().count(), 40 - 13);
    }

    #[test]
    fn truncated_name_never_exceeds_narrow_column() {
        let mut s = state(&["longname"], "");
        for (cols, expected) in [(14, "."), (15, ".."), (16, "..."), (17, "l...")] {
            s.cols = cols;
            let vm = s.compute_viewmodel();
            assert_eq!(vm.display_items[0].name, expected, "cols = {cols}");
        }
    }

    #[test]
    fn viewmodel_in_delete_mode_shows_prompt_only() {
        let mut s = state(&["alpha"], "");
        s.mode = Mode::ConfirmingDelete(DeletePrompt {
            target: "/tries/alpha".into(),
            buffer: "YE".to_string(),
        });
        let vm = s.compute_viewmodel();
        let prompt = vm.delete_prompt.unwrap();
        assert_eq!(prompt.name, "alpha");
        assert_eq!(prompt.buffer, "YE");
        assert!(vm.display_items.is_empty());
        assert!(vm.create_row.is_none());
    }

    #[test]
    fn empty_catalog_has_empty_state() {
        let s = state(&[], "");
        let vm = s.compute_viewmodel();
        assert_eq!(vm.empty_state.unwrap().message, "No tries yet");
        assert!(vm.create_row.unwrap().is_selected);
    }
}
