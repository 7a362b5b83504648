//! Entry list renderer.
//!
//! Each row is a two-cell cursor marker, the (possibly truncated) entry name
//! with match highlights, and the "touched" age right-aligned. The synthetic
//! create-new row follows the last entry.

use crate::ui::helpers::{self, position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CreateRowInfo, DisplayItem};

const SELECTED_MARKER: &str = "→ ";
const UNSELECTED_MARKER: &str = "  ";

/// Renders all entry rows starting at `row` and returns the next free row.
pub fn render_rows(out: &mut String, row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    items
        .iter()
        .fold(row, |current_row, item| render_row(out, current_row, item, theme, cols))
}

fn render_row(out: &mut String, row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    helpers::restore_row_colors(out, theme, item.is_selected);

    out.push_str(marker(item.is_selected));
    helpers::render_highlighted_text(out, &item.name, &item.highlight_ranges, theme, item.is_selected);

    let used = visual_len(SELECTED_MARKER) + visual_len(&item.name);
    let age_len = visual_len(&item.age);

    if used + 1 + age_len <= cols {
        out.push_str(&" ".repeat(cols - used - age_len));
        if !item.is_selected {
            out.push_str(&Theme::fg(&theme.colors.text_dim));
        }
        out.push_str(&item.age);
    } else {
        out.push_str(&" ".repeat(cols.saturating_sub(used)));
    }

    out.push_str(Theme::reset());
    row + 1
}

/// Renders the create-new row at `row` and returns the next free row.
pub fn render_create_row(out: &mut String, row: usize, create: &CreateRowInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);

    if create.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.create_fg));
    }

    let label = truncate(&create.label, cols.saturating_sub(visual_len(SELECTED_MARKER)));
    out.push_str(marker(create.is_selected));
    out.push_str(&label);
    out.push_str(&" ".repeat(cols.saturating_sub(visual_len(SELECTED_MARKER) + visual_len(&label))));

    out.push_str(Theme::reset());
    row + 1
}

const fn marker(is_selected: bool) -> &'static str {
    if is_selected {
        SELECTED_MARKER
    } else {
        UNSELECTED_MARKER
    }
}
