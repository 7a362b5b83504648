//! View model types representing renderable UI state.
//!
//! View models are computed by [`AppState::compute_viewmodel`] and consumed by
//! the renderer. They hold display-ready data only: truncated names, formatted
//! ages, highlight ranges and selection flags.
//!
//! [`AppState::compute_viewmodel`]: crate::app::AppState::compute_viewmodel

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Prompt line with the live query.
    pub header: HeaderInfo,

    /// Entry rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// The "create new" row, when it falls inside the visible window.
    pub create_row: Option<CreateRowInfo>,

    /// Key hints.
    pub footer: FooterInfo,

    /// Message shown when no entry is listed.
    pub empty_state: Option<EmptyState>,

    /// Set while confirming a deletion; replaces the list.
    pub delete_prompt: Option<DeletePromptInfo>,
}

/// One entry row.
#[derive(Debug, Clone)]
pub struct DisplayItem {
    /// Entry name, truncated with `...` to fit.
    pub name: String,

    /// Relative "touched" age, e.g. `3h ago`.
    pub age: String,

    /// Whether the cursor is on this row.
    pub is_selected: bool,

    /// Character ranges to highlight, `(start, end)` with exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// The synthetic row that creates a new try from the query.
#[derive(Debug, Clone)]
pub struct CreateRowInfo {
    pub label: String,
    pub is_selected: bool,
}

/// Header line contents.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Static prompt, e.g. `try » `.
    pub prompt: String,
    /// Current query text.
    pub query: String,
    /// Matched/total counter.
    pub count: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Shown in place of the list when nothing is listed.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Delete confirmation screen contents.
#[derive(Debug, Clone)]
pub struct DeletePromptInfo {
    /// Name of the directory about to be deleted.
    pub name: String,
    /// Confirmation typed so far.
    pub buffer: String,
}
