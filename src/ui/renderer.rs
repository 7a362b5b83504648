//! Top-level rendering coordinator.
//!
//! Rendering is a pure function of [`AppState`]: it computes the view model
//! and lays out the components into one ANSI frame. Writing the frame to the
//! terminal is the caller's job.
//!
//! # Example
//!
//! ```rust
//! use tries::app::AppState;
//! use tries::ui::{render, Theme};
//!
//! let state = AppState::new("/tmp/tries".into(), vec![], "", Theme::default());
//! let frame = render(&state);
//! assert!(frame.contains("Create new"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Home the cursor and clear the screen.
const CLEAR_SCREEN: &str = "\u{1b}[H\u{1b}[2J";

/// Renders one frame for the state's current terminal size.
#[must_use]
pub fn render(state: &AppState) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, &state.theme, state.rows, state.cols)
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut out = String::from(CLEAR_SCREEN);

    if let Some(prompt) = &vm.delete_prompt {
        components::render_confirm_mode(&mut out, vm, prompt, theme, cols, rows);
    } else {
        components::render_browsing_mode(&mut out, vm, theme, cols, rows);
    }

    out
}
