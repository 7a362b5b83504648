//! Terminal outcomes of a selector session.
//!
//! The selector ends with exactly one [`Outcome`]. It only certifies what the
//! user asked for; turning that into shell commands is the job of
//! [`crate::script`], and the shell performs the directory change or removal.

use std::path::PathBuf;

/// How a selector session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Change into this directory (existing, or just created for a new try).
    Selected(PathBuf),

    /// Remove this directory; the user typed the confirmation.
    Deleted(PathBuf),

    /// The user backed out without choosing anything.
    Cancelled,
}

impl Outcome {
    /// Path carried by the outcome, if any.
    #[must_use]
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Selected(path) | Self::Deleted(path) => Some(path),
            Self::Cancelled => None,
        }
    }
}
