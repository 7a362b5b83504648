//! Selector modes.
//!
//! The selector is either browsing the ranked list or asking the user to
//! confirm deletion of one entry. The delete target and the typed
//! confirmation only exist inside [`Mode::ConfirmingDelete`], so a target
//! can never linger while browsing.
//!
//! # Example
//!
//! ```rust
//! use tries::app::modes::{DeletePrompt, Mode};
//!
//! let mode = Mode::ConfirmingDelete(DeletePrompt::new("/tries/old".into()));
//! assert!(mode.is_confirming_delete());
//! ```

use std::path::PathBuf;

/// The exact text that authorises a deletion.
pub const DELETE_CONFIRMATION: &str = "YES";

/// Current interaction mode of the selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Typing filters the list; arrows move the cursor.
    #[default]
    Browsing,

    /// Typing fills the confirmation buffer for a pending deletion.
    ConfirmingDelete(DeletePrompt),
}

impl Mode {
    #[must_use]
    pub const fn is_confirming_delete(&self) -> bool {
        matches!(self, Self::ConfirmingDelete(_))
    }
}

/// A pending deletion awaiting the user's typed confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    /// Path of the entry that will be reported as deleted.
    pub target: PathBuf,
    /// What the user has typed so far.
    pub buffer: String,
}

impl DeletePrompt {
    #[must_use]
    pub const fn new(target: PathBuf) -> Self {
        Self {
            target,
            buffer: String::new(),
        }
    }

    /// Exact, case-sensitive comparison against [`DELETE_CONFIRMATION`].
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.buffer == DELETE_CONFIRMATION
    }
}
