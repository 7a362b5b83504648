//! Workspace entry domain model.
//!
//! An [`Entry`] is one scratch directory found directly under the tries root.
//! A [`ScoredEntry`] is the same directory as seen through the current query:
//! its relevance score and the character positions the query matched.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A discovered workspace directory.
///
/// `path` identifies the entry within one catalog snapshot. `name` is the final
/// path component and is used for display, matching and tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    /// Creation time, or the modification time where the platform has none.
    pub created: DateTime<Utc>,
    /// Last modification time.
    pub touched: DateTime<Utc>,
}

impl Entry {
    /// Builds an entry from a path, deriving `name` from its final component.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use tries::domain::Entry;
    ///
    /// let now = Utc::now();
    /// let entry = Entry::new("/home/me/src/tries/2024-01-01-demo".into(), now, now);
    /// assert_eq!(entry.name, "2024-01-01-demo");
    /// ```
    #[must_use]
    pub fn new(path: PathBuf, created: DateTime<Utc>, touched: DateTime<Utc>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            path,
            created,
            touched,
        }
    }

    /// Returns a short description of how long ago the entry was touched.
    ///
    /// - Less than 1 minute (or in the future): "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - Otherwise: "Xd ago"
    #[must_use]
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        let diff = (now - self.touched).num_seconds();

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            format!("{}m ago", diff / SECONDS_PER_MINUTE)
        } else if diff < SECONDS_PER_DAY {
            format!("{}h ago", diff / SECONDS_PER_HOUR)
        } else {
            format!("{}d ago", diff / SECONDS_PER_DAY)
        }
    }
}

/// An entry ranked against the current query.
///
/// `highlights` holds strictly increasing character offsets into `entry.name`,
/// one per query character, and is empty for the empty query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredEntry {
    pub entry: Entry,
    pub score: f64,
    pub highlights: Vec<usize>,
}

impl ScoredEntry {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.entry.name
    }
}
