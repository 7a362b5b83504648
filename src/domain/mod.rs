//! Domain layer for the `try` picker.
//!
//! Core types shared by the catalog, the ranking engine and the selector,
//! independent of terminal or shell concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`entry`]: Workspace entries and their ranked form

pub mod entry;
pub mod error;

pub use entry::{Entry, ScoredEntry};
pub use error::{Result, TriesError};
