//! tries: an interactive picker for dated scratch directories.
//!
//! Every experiment gets its own directory under one root (`~/src/tries` by
//! default), named `YYYY-MM-DD-name`. The picker lists them, ranks them by a
//! fuzzy match on the typed query blended with how recently each one was
//! created and touched, and lets the user jump into one, create a new one from
//! the query, clone a repository into a fresh one, or delete one after typing
//! `YES`.
//!
//! The binary never changes directory itself. It prints a shell script on
//! stdout which the wrapper installed by `try init` evaluates, and it draws its
//! UI on stderr.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Binary (main.rs): clap parsing, exit codes         │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌──────────────────┐  ┌──────────────────┐  ┌──────────────────┐
//! │ cli              │  │ terminal         │  │ script           │
//! │ - routing        │  │ - crossterm loop │  │ - cd/clone/delete│
//! │ - clone script   │  │ - key mapping    │  │ - init wrapper   │
//! └──────────────────┘  └──────────────────┘  └──────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/): selector state machine   │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI (ui/)      │   │ Ranking       │   │ Catalog       │
//! │ - view models │   │ - fuzzy match │   │ - listing     │
//! │ - rendering   │   │ - recency     │   │ - naming      │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (entries, errors), infrastructure (paths),  │
//! │  observability (tracing to a rotating log file)     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! An optional TOML file at `<config_dir>/tries/config.toml`:
//!
//! ```toml
//! path = "~/src/tries"
//! theme = "catppuccin-latte"
//! # theme_file = "~/.config/tries/my-theme.toml"
//! trace_level = "debug"
//! default_name = "scratch"
//! ```
//!
//! # Example
//!
//! ```rust
//! use tries::{handle_event, initialize, Config, Event, Outcome};
//!
//! let config = Config::default();
//! let mut state = initialize(&config, "/tmp/tries".into(), vec![], "redis");
//!
//! let (_, outcome) = handle_event(&mut state, &Event::Cancel);
//! assert_eq!(outcome, Some(Outcome::Cancelled));
//! ```

pub mod app;
pub mod catalog;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod ranking;
pub mod script;
pub mod terminal;
pub mod ui;

pub mod observability;

pub use app::{handle_event, AppState, Event, Mode, Outcome};
pub use domain::{Entry, Result, ScoredEntry, TriesError};
pub use ui::Theme;

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// User configuration read from `config.toml`.
///
/// Every key is optional; a missing file is the same as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Tries root. Overridden by `TRY_PATH` and `--path`.
    pub path: Option<String>,

    /// Built-in theme name: `catppuccin-mocha` (default) or `catppuccin-latte`.
    ///
    /// Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Log filter used when `RUST_LOG` is unset, e.g. `debug` or `tries=trace`.
    pub trace_level: Option<String>,

    /// Name for a new try created from a blank query. Default: `new-try`.
    pub default_name: Option<String>,
}

impl Config {
    /// Loads the config file from its platform location.
    ///
    /// # Errors
    ///
    /// Returns [`TriesError::Config`] if the file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        match infrastructure::config_path() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from `path`, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TriesError::Config`] if the file exists but cannot be read or
    /// parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(contents) => Self::from_toml_str(&contents)
                .map_err(|e| TriesError::Config(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(TriesError::Config(format!("failed to read {}: {e}", path.display()))),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TriesError::Config`] on malformed TOML or unknown keys.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tries::Config;
    ///
    /// let config = Config::from_toml_str("theme = \"catppuccin-latte\"").unwrap();
    /// assert_eq!(config.theme.as_deref(), Some("catppuccin-latte"));
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| TriesError::Config(e.to_string()))
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    ///
    /// A theme that fails to load is logged and replaced by the default.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme.as_ref().map_or_else(Theme::default, |theme_name| {
            Theme::from_name(theme_name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Builds a selector session over `entries` with `query` pre-typed.
///
/// Applies the configured theme and default name for new tries.
#[must_use]
pub fn initialize(config: &Config, root: PathBuf, entries: Vec<Entry>, query: &str) -> AppState {
    tracing::debug!(root = %root.display(), entry_count = entries.len(), query, "initializing selector");

    let mut state = AppState::new(root, entries, query, config.resolve_theme());
    if let Some(name) = config
        .default_name
        .as_deref()
        .map(catalog::sanitize_name)
        .filter(|name| !name.is_empty())
    {
        state.default_name = name;
    }
    state
}
