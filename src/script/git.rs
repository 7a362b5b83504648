//! Git URI detection and clone directory naming.

use crate::catalog::{dated_name, sanitize_name};
use crate::domain::{Result, TriesError};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Host, user and repository parsed from a clone URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitUri {
    pub host: String,
    pub user: String,
    pub repo: String,
}

fn https_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^https?://([^/]+)/([^/]+)/([^/]+)$").expect("static pattern compiles")
    })
}

fn ssh_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^git@([^:]+):([^/]+)/([^/]+)$").expect("static pattern compiles")
    })
}

/// Loose check used to route a query word to the clone flow.
///
/// ```
/// use tries::script::is_git_uri;
///
/// assert!(is_git_uri("https://github.com/me/repo"));
/// assert!(is_git_uri("git@gitlab.com:me/repo.git"));
/// assert!(!is_git_uri("redis experiment"));
/// ```
#[must_use]
pub fn is_git_uri(arg: &str) -> bool {
    let arg = arg.trim();
    if arg.is_empty() {
        return false;
    }

    ["http://", "https://", "git@"].iter().any(|p| arg.starts_with(p))
        || arg.contains("github.com")
        || arg.contains("gitlab.com")
        || arg.ends_with(".git")
}

/// Parses `https://host/user/repo` or `git@host:user/repo`, with or without a
/// trailing `.git`.
#[must_use]
pub fn parse_git_uri(uri: &str) -> Option<GitUri> {
    let trimmed = uri.trim();
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);
    if trimmed.is_empty() {
        return None;
    }

    let captures = https_pattern()
        .captures(trimmed)
        .or_else(|| ssh_pattern().captures(trimmed))?;

    Some(GitUri {
        host: captures[1].to_string(),
        user: captures[2].to_string(),
        repo: captures[3].to_string(),
    })
}

/// Directory name for a clone: the sanitized custom name when one is given,
/// otherwise `<today>-<user>-<repo>`.
///
/// # Errors
///
/// Returns [`TriesError::InvalidGitUri`] when no custom name is given and the
/// URI cannot be parsed.
pub fn clone_directory_name(uri: &str, custom: Option<&str>, today: NaiveDate) -> Result<String> {
    if let Some(custom) = custom.map(sanitize_name).filter(|name| !name.is_empty()) {
        return Ok(custom);
    }

    let parsed = parse_git_uri(uri).ok_or_else(|| TriesError::InvalidGitUri(uri.to_string()))?;
    Ok(dated_name(today, &format!("{}-{}", parsed.user, parsed.repo)))
}
