//! Shared rendering utilities.
//!
//! Every helper appends to a caller-owned `String` frame instead of printing,
//! so a whole screen can be built first and written to the terminal in one go.
//!
//! # Example
//!
//! ```rust
//! use tries::ui::helpers::render_highlighted_text;
//! use tries::ui::Theme;
//!
//! let theme = Theme::default();
//! let mut out = String::new();
//! render_highlighted_text(&mut out, "my-project", &[(0, 2)], &theme, false);
//! assert!(out.ends_with("-project"));
//! ```

use crate::ui::theme::Theme;
use std::fmt::Write;

/// Appends a cursor move to `row`, `col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    let _ = write!(out, "\u{1b}[{row};{col}H");
}

/// Number of terminal cells `text` is assumed to occupy.
#[must_use]
pub fn visual_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` down to at most `width` characters.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}

/// Appends `text` with the character ranges in `ranges` highlighted.
///
/// Ranges are `(start, end)` character indices with an exclusive end and must
/// be sorted and non-overlapping. Out-of-bounds ends are clamped.
///
/// Highlighting is kept on selected rows too; after each highlighted run the
/// row's base colors (selection or normal text) are restored so the rest of
/// the line keeps its styling.
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);

        out.push_str(Theme::bold());
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        if let Some(bg) = &theme.colors.match_highlight_bg {
            out.push_str(&Theme::bg(bg));
        }
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        restore_row_colors(out, theme, is_selected);

        current_pos = end;
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }
}

/// Re-applies the base colors of a list row after a reset.
pub fn restore_row_colors(out: &mut String, theme: &Theme, is_selected: bool) {
    if is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
}
