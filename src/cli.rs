//! Command-line interface and command routing.
//!
//! Parsing is done by `clap`; routing decides, for the words a user typed,
//! whether they are a selector query or a clone request. Running the
//! interactive selector itself is left to the binary.

use crate::domain::{Result, TriesError};
use crate::script::{clone_directory_name, emit_script, is_git_uri, script_clone};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser, Debug)]
#[command(name = "try")]
#[command(about = "Ephemeral workspace manager: pick, create, clone or delete dated scratch directories")]
#[command(version)]
#[command(arg_required_else_help = true)]
#[command(after_help = KEY_HELP)]
/// Command-line arguments.
pub struct Cli {
    /// Tries directory (overrides TRY_PATH and the config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub path: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Initial selector query
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive directory selector
    Cd {
        /// Initial query, or a git URI followed by an optional directory name
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    /// Clone a repository into a dated directory
    Clone {
        /// Repository to clone
        uri: String,
        /// Custom directory name
        #[arg(trailing_var_arg = true)]
        name: Vec<String>,
    },
    /// Print the shell function definition
    Init {
        /// Absolute tries directory to embed in the wrapper
        path: Option<String>,
    },
    /// Entry point used by the shell wrapper
    Exec {
        /// Explicit target command.
        #[command(subcommand)]
        target: Option<ExecTarget>,

        /// Initial query when no target is given
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
}

/// Targets of `try exec`.
#[derive(Subcommand, Debug)]
pub enum ExecTarget {
    /// Interactive directory selector
    Cd {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        query: Vec<String>,
    },
    /// Clone a repository into a dated directory
    Clone {
        uri: String,
        #[arg(trailing_var_arg = true)]
        name: Vec<String>,
    },
}

const KEY_HELP: &str = "\
Environment:
  TRY_PATH          Tries directory (default: ~/src/tries)

Keyboard:
  ↑/↓, Ctrl-P/N     Navigate
  Enter             Select / Create new
  Ctrl-D            Delete selected try (confirm with YES)
  Backspace         Delete character
  Esc               Cancel";

/// What the binary should do after parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Run the interactive selector with this initial query.
    Select(String),
    /// Emit a clone script.
    Clone {
        uri: String,
        name: Option<String>,
    },
    /// Print the shell wrapper, optionally pinned to a different root.
    Init(Option<String>),
}

impl Cli {
    /// Flattens the parsed arguments into a [`Route`].
    #[must_use]
    pub fn route(&self) -> Route {
        match &self.command {
            None => route_query(&self.query),
            Some(Command::Cd { query }) | Some(Command::Exec { target: Some(ExecTarget::Cd { query }), .. }) => {
                route_query(query)
            }
            Some(Command::Exec { target: None, query }) => route_query(query),
            Some(Command::Clone { uri, name }) | Some(Command::Exec { target: Some(ExecTarget::Clone { uri, name }), .. }) => {
                Route::Clone {
                    uri: uri.clone(),
                    name: join_words(name),
                }
            }
            Some(Command::Init { path }) => Route::Init(path.clone()),
        }
    }
}

/// Routes query words: a leading git URI becomes a clone, with the remaining
/// words as the directory name; anything else is a selector query.
#[must_use]
pub fn route_query(words: &[String]) -> Route {
    let query = words.join(" ");
    let parts: Vec<&str> = query.split_whitespace().collect();

    match parts.split_first() {
        Some((first, rest)) if is_git_uri(first) => Route::Clone {
            uri: (*first).to_string(),
            name: (!rest.is_empty()).then(|| rest.join(" ")),
        },
        _ => Route::Select(query),
    }
}

fn join_words(words: &[String]) -> Option<String> {
    let joined = words.join(" ");
    (!joined.trim().is_empty()).then_some(joined)
}

/// Builds the clone script for `uri` under `root`.
///
/// # Errors
///
/// Returns [`TriesError::InvalidGitUri`] if `uri` is blank, or if no custom
/// name is given and the URI cannot be parsed.
pub fn clone_script(uri: &str, name: Option<&str>, root: &Path, today: NaiveDate) -> Result<String> {
    if uri.trim().is_empty() {
        return Err(TriesError::InvalidGitUri("git URI required for clone command".to_string()));
    }

    let dir_name = clone_directory_name(uri, name, today)?;
    tracing::debug!(uri, dir_name = %dir_name, "clone requested");
    Ok(emit_script(&script_clone(&root.join(dir_name), uri)))
}
