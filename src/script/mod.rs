//! Shell scripts handed back to the calling shell.
//!
//! The binary never changes directory or removes anything itself. It prints a
//! short script on stdout and the shell wrapper installed by `try init`
//! evaluates it. Every script starts with a warning comment so that running
//! the binary directly, without the wrapper, explains what went wrong.
//!
//! # Example
//!
//! ```rust
//! use tries::script::{emit_script, script_cd};
//! use std::path::Path;
//!
//! let script = emit_script(&script_cd(Path::new("/tries/2024-05-01-demo")));
//! assert!(script.ends_with("  cd '/tries/2024-05-01-demo'\n"));
//! ```
//!
//! # Modules
//!
//! - [`git`]: Git URI detection and clone directory naming
//! - [`init`]: Shell wrapper function printed by `try init`

pub mod git;
pub mod init;

use crate::app::Outcome;
use std::path::Path;

pub use git::{clone_directory_name, is_git_uri, parse_git_uri, GitUri};
pub use init::{init_script, Shell};

/// First line of every emitted script.
pub const SCRIPT_WARNING: &str =
    "# if you can read this, you didn't launch try from an alias. run try --help.";

/// Single-quotes `s` for POSIX shells.
///
/// ```
/// use tries::script::shell_quote;
///
/// assert_eq!(shell_quote("it's"), r#"'it'"'"'s'"#);
/// ```
#[must_use]
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r#"'"'"'"#))
}

fn quote_path(path: &Path) -> String {
    shell_quote(&path.to_string_lossy())
}

/// Joins commands into a script: warning line, then the commands chained with
/// `&& \` continuations, continuation lines indented by two spaces.
#[must_use]
pub fn emit_script(commands: &[String]) -> String {
    let mut script = String::from(SCRIPT_WARNING);
    script.push('\n');

    for (i, command) in commands.iter().enumerate() {
        if i > 0 {
            script.push_str("  ");
        }
        script.push_str(command);
        if i + 1 < commands.len() {
            script.push_str(" && \\");
        }
        script.push('\n');
    }

    script
}

/// Touch the directory (bumping its "touched" time), echo it and change into it.
#[must_use]
pub fn script_cd(path: &Path) -> Vec<String> {
    let quoted = quote_path(path);
    vec![
        format!("touch {quoted}"),
        format!("echo {quoted}"),
        format!("cd {quoted}"),
    ]
}

/// Create the directory first, then [`script_cd`].
#[must_use]
pub fn script_mkdir_cd(path: &Path) -> Vec<String> {
    let mut commands = vec![format!("mkdir -p {}", quote_path(path))];
    commands.extend(script_cd(path));
    commands
}

/// Clone `uri` into `path`, then [`script_cd`].
#[must_use]
pub fn script_clone(path: &Path, uri: &str) -> Vec<String> {
    let quoted = quote_path(path);
    let message = format!("Using git clone to create this trial from {uri}.");

    let mut commands = vec![
        format!("mkdir -p {quoted}"),
        format!("echo {}", shell_quote(&message)),
        format!("git clone {} {quoted}", shell_quote(uri)),
    ];
    commands.extend(script_cd(path));
    commands
}

/// Remove `path` from inside `root`, then return to the previous directory,
/// or to `root` if the previous directory was the one removed.
#[must_use]
pub fn script_delete(path: &Path, root: &Path) -> Vec<String> {
    let name = path
        .file_name()
        .map_or_else(|| path.to_string_lossy(), |n| n.to_string_lossy());
    let quoted_name = shell_quote(&name);
    let quoted_root = quote_path(root);

    vec![
        "old_pwd=$PWD".to_string(),
        format!("cd {quoted_root}"),
        format!("test -d {quoted_name} && rm -rf {quoted_name}"),
        format!("cd \"$old_pwd\" 2>/dev/null || cd {quoted_root}"),
    ]
}

/// Script for a finished selector session, or `None` when it was cancelled.
///
/// A selected path that does not exist yet (a new try whose directory could
/// not be created up front) gets a `mkdir -p` in front of the `cd`.
#[must_use]
pub fn for_outcome(outcome: &Outcome, root: &Path) -> Option<String> {
    let commands = match outcome {
        Outcome::Selected(path) if path.is_dir() => script_cd(path),
        Outcome::Selected(path) => script_mkdir_cd(path),
        Outcome::Deleted(path) => script_delete(path, root),
        Outcome::Cancelled => return None,
    };
    Some(emit_script(&commands))
}
