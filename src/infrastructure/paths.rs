//! Path resolution for the tries root, config file and log directory.
//!
//! Platform directories come from `dirs`, so the config file and the log live
//! where the host OS expects them (`~/.config` and `~/.local/share` on Linux).

use std::env;
use std::path::PathBuf;

/// Environment variable that overrides the tries root.
pub const TRY_PATH_ENV: &str = "TRY_PATH";

/// Root used when nothing else is configured, relative to the home directory.
const DEFAULT_ROOT: &str = "src/tries";

/// Application directory name under the platform config and data dirs.
const APP_DIR: &str = "tries";

/// Expands a leading `~` or `~/` to the home directory.
///
/// Paths without a leading tilde, and `~user` forms, are returned unchanged.
/// If the home directory cannot be determined the input is returned as is.
///
/// # Examples
///
/// ```
/// use tries::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// assert_eq!(expand_tilde("~other/x"), PathBuf::from("~other/x"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let home = dirs::home_dir();
    match (path, home) {
        ("~", Some(home)) => home,
        (p, Some(home)) if p.starts_with("~/") => home.join(&p[2..]),
        (p, _) => PathBuf::from(p),
    }
}

/// Expands `~` and makes a relative path absolute against the current directory.
#[must_use]
pub fn absolutize(path: &str) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        return expanded;
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(expanded),
        Err(_) => expanded,
    }
}

/// Resolves the tries root.
///
/// Priority: an explicit `--path` flag, then `TRY_PATH` (trimmed, ignored when
/// blank), then `path` from the config file, then `~/src/tries`.
#[must_use]
pub fn resolve_root(flag: Option<&str>, env_value: Option<&str>, configured: Option<&str>) -> PathBuf {
    let chosen = [flag, env_value, configured]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|p| !p.is_empty());

    match chosen {
        Some(path) => absolutize(path),
        None => default_root(),
    }
}

/// `~/src/tries`, or `./src/tries` when there is no home directory.
#[must_use]
pub fn default_root() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(DEFAULT_ROOT)
}

/// Reads `TRY_PATH` from the environment.
#[must_use]
pub fn root_from_env() -> Option<String> {
    env::var(TRY_PATH_ENV).ok()
}

/// Directory holding the rotating log file.
#[must_use]
pub fn get_data_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR))
}

/// Location of the optional TOML config file.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}
