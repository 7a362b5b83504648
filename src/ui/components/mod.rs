//! Composable UI component renderers.
//!
//! Each component appends one part of the screen to the frame buffer and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Prompt line with the live query and match counter
//! - [`list`]: Entry rows and the create-new row
//! - [`prompt`]: Delete confirmation
//! - [`empty`]: Message shown when nothing is listed
//! - [`footer`]: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Entry rows / create-new row / empty state]   or   [Delete prompt]
//! [Blank padding]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod list;
mod prompt;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DeletePromptInfo, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use list::{render_create_row, render_rows};
use prompt::render_delete_prompt;

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the browsing layout: the ranked list with the create-new row.
pub fn render_browsing_mode(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let (body_start, body_end) = render_chrome(out, vm, theme, cols, rows);

    let mut current_row = render_rows(out, body_start, &vm.display_items, theme, cols);
    if let Some(create) = &vm.create_row {
        current_row = render_create_row(out, current_row, create, theme, cols);
    }
    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, current_row + 1, body_end, empty, theme, cols);
    }
}

/// Renders the delete confirmation layout in place of the list.
pub fn render_confirm_mode(
    out: &mut String,
    vm: &UIViewModel,
    prompt: &DeletePromptInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let (body_start, body_end) = render_chrome(out, vm, theme, cols, rows);

    if body_start + 3 <= body_end {
        render_delete_prompt(out, body_start + 1, prompt, theme, cols);
    } else {
        render_delete_prompt(out, body_start, prompt, theme, cols);
    }
}

/// Draws header, borders and footer. Returns the first and last body rows.
fn render_chrome(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) -> (usize, usize) {
    let mut current_row = render_header(out, 1, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);

    let footer_row = rows.max(current_row + 2);
    let border_row = footer_row - 1;

    render_border(out, border_row, &theme.colors.border, cols);
    render_footer(out, footer_row, &vm.footer, theme, cols);

    (current_row, border_row - 1)
}
