//! Shell wrapper printed by `try init`.
//!
//! The wrapper runs `try exec`, lets the UI draw on the terminal through
//! stderr, and evaluates whatever lands on stdout when the exit status is 0.
//! On failure the output (`Cancelled.` or an error) is echoed instead.

use super::shell_quote;
use std::path::Path;

/// Which wrapper syntax to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// `bash`, `zsh` and other POSIX-style shells.
    Posix,
    Fish,
}

impl Shell {
    /// Picks fish when the `SHELL` value mentions it, POSIX otherwise.
    #[must_use]
    pub fn from_shell_var(shell: Option<&str>) -> Self {
        match shell {
            Some(shell) if shell.contains("fish") => Self::Fish,
            _ => Self::Posix,
        }
    }
}

/// Wrapper function for `shell` invoking `exe`, pinned to `root` when given.
#[must_use]
pub fn init_script(exe: &Path, root: Option<&Path>, shell: Shell) -> String {
    let exe = shell_quote(&exe.to_string_lossy());
    let path_arg = root
        .map(|root| format!(" --path {}", shell_quote(&root.to_string_lossy())))
        .unwrap_or_default();

    match shell {
        Shell::Fish => format!(
            "function try
  set -l out ({exe} exec{path_arg} $argv 2>/dev/tty | string collect)
  if test $pipestatus[1] -eq 0
    eval $out
  else
    echo $out
  end
end
"
        ),
        Shell::Posix => format!(
            "try() {{
  local out
  out=$({exe} exec{path_arg} \"$@\" 2>/dev/tty)
  if [ $? -eq 0 ]; then
    eval \"$out\"
  else
    echo \"$out\"
  fi
}}
"
        ),
    }
}
