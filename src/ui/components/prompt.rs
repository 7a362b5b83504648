//! Delete confirmation renderer.

use crate::app::modes::DELETE_CONFIRMATION;
use crate::ui::helpers::{position_cursor, truncate, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DeletePromptInfo;

/// Renders the confirmation screen starting at `row`:
///
/// ```text
/// Delete try: 2024-05-01-demo
///
/// Type YES to confirm: YE
/// ```
///
/// Returns the next free row.
pub fn render_delete_prompt(
    out: &mut String,
    row: usize,
    prompt: &DeletePromptInfo,
    theme: &Theme,
    cols: usize,
) -> usize {
    let title = truncate(&format!("Delete try: {}", prompt.name), cols);
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.danger_fg));
    out.push_str(&title);
    out.push_str(Theme::reset());
    out.push_str(&" ".repeat(cols.saturating_sub(visual_len(&title))));

    let label = format!("Type {DELETE_CONFIRMATION} to confirm: ");
    let line = truncate(&format!("{label}{}", prompt.buffer), cols);
    let label_len = visual_len(&label).min(visual_len(&line));
    position_cursor(out, row + 2, 1);
    out.push_str(&Theme::fg(&theme.colors.prompt_fg));
    out.extend(line.chars().take(label_len));
    out.push_str(&Theme::fg(&theme.colors.text_normal));
    out.extend(line.chars().skip(label_len));
    out.push_str(Theme::reset());
    out.push_str(&" ".repeat(cols.saturating_sub(visual_len(&line))));

    row + 3
}
