//! Header component renderer.
//!
//! Renders the prompt line: `try » query` on the left, the matched/total
//! counter right-aligned.

use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the header at `row` and returns the next free row.
///
/// The query is cut from the left when the line is too narrow, so the end of
/// what the user is typing stays visible. The counter is dropped before the
/// query is.
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    let prompt = truncate(&header.prompt, cols);
    let prompt_len = visual_len(&prompt);
    let room = cols.saturating_sub(prompt_len);

    let query_len = visual_len(&header.query);
    let query: String = header.query.chars().skip(query_len.saturating_sub(room)).collect();
    let query_len = visual_len(&query);

    let count_len = visual_len(&header.count);
    let show_count = prompt_len + query_len + 1 + count_len <= cols;

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    out.push_str(&prompt);
    out.push_str(Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.push_str(&query);

    let used = prompt_len + query_len;
    if show_count {
        out.push_str(&" ".repeat(cols - used - count_len));
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&header.count);
    } else {
        out.push_str(&" ".repeat(cols.saturating_sub(used)));
    }

    out.push_str(Theme::reset());
    row + 1
}
