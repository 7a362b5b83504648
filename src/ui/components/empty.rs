//! Empty state component renderer.
//!
//! Shown under the create-new row when no entry is listed, either because the
//! root holds no tries yet or because nothing matches the query.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message centered, starting at `row`.
///
/// Lines that would land past `last_row` are skipped. Returns the next free
/// row.
pub fn render_empty_state(
    out: &mut String,
    row: usize,
    last_row: usize,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;

    for (text, color, dim) in [
        (&empty.message, &theme.colors.empty_state_fg, false),
        (&empty.subtitle, &theme.colors.text_dim, true),
    ] {
        if current_row > last_row {
            break;
        }

        let text = truncate(text, cols);
        let len = visual_len(&text);
        let padding = cols.saturating_sub(len) / 2;

        position_cursor(out, current_row, 1);
        if dim {
            out.push_str(Theme::dim());
        }
        out.push_str(&Theme::fg(color));
        out.push_str(&" ".repeat(padding));
        out.push_str(&text);
        out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
        out.push_str(Theme::reset());

        current_row += 1;
    }

    current_row
}
