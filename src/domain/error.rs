//! Error types for the `try` picker.
//!
//! This module defines the centralized error type [`TriesError`] and a type alias
//! [`Result`] used throughout the crate. Only failures that prevent a usable
//! session from being built are represented here; per-entry anomalies and
//! rejected delete confirmations are absorbed into the data model instead.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for `try` operations.
///
/// # Examples
///
/// ```
/// use tries::domain::TriesError;
///
/// fn load() -> Result<(), TriesError> {
///     Err(TriesError::Config("unknown key `colour`".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum TriesError {
    /// The workspace root could not be created or listed.
    ///
    /// Fatal to the interactive session: no UI is shown when the catalog
    /// cannot be built.
    #[error("cannot list tries in {}: {source}", root.display())]
    Catalog {
        /// Root directory that failed.
        root: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme could not be loaded.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A clone target did not look like `https://host/user/repo` or `git@host:user/repo`.
    #[error("unable to parse git URI: {0}")]
    InvalidGitUri(String),

    /// The terminal could not be switched into (or out of) interactive mode.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// A specialized `Result` type for `try` operations.
pub type Result<T> = std::result::Result<T, TriesError>;
