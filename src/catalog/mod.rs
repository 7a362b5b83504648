//! Entry catalog: the tries root as seen on disk.
//!
//! Lists the immediate subdirectories of the root as [`Entry`] values and
//! picks collision-free names for new tries. Listing is best-effort per child:
//! a directory whose metadata cannot be read is left out rather than failing
//! the whole listing. Only problems with the root itself are errors.
//!
//! # Example
//!
//! ```no_run
//! use tries::catalog::list_entries;
//! use std::path::Path;
//!
//! let entries = list_entries(Path::new("/home/me/src/tries"))?;
//! println!("{} tries", entries.len());
//! # Ok::<(), tries::TriesError>(())
//! ```

use crate::domain::{Entry, Result, TriesError};
use chrono::{DateTime, NaiveDate, Utc};
use std::fs;
use std::path::{Path, PathBuf};

/// Lists every directory directly under `root`, creating `root` first if needed.
///
/// Non-directory children are ignored. Ordering of the result is unspecified.
///
/// # Errors
///
/// Returns [`TriesError::Catalog`] if the root cannot be created or read.
pub fn list_entries(root: &Path) -> Result<Vec<Entry>> {
    let _span = tracing::debug_span!("list_entries", root = %root.display()).entered();

    let catalog_err = |source| TriesError::Catalog {
        root: root.to_path_buf(),
        source,
    };

    fs::create_dir_all(root).map_err(catalog_err)?;
    let children = fs::read_dir(root).map_err(catalog_err)?;

    let mut entries = Vec::new();
    for child in children {
        let child = match child {
            Ok(child) => child,
            Err(e) => {
                tracing::debug!(error = %e, "skipping unreadable directory entry");
                continue;
            }
        };

        let path = child.path();
        // Symlinks are not followed: a link to a directory is not a try.
        match child.file_type() {
            Ok(file_type) if file_type.is_dir() => {}
            Ok(_) => continue,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping entry without file type");
                continue;
            }
        }
        let metadata = match child.metadata() {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping entry without metadata");
                continue;
            }
        };

        let Ok(modified) = metadata.modified() else {
            tracing::debug!(path = %path.display(), "skipping entry without modification time");
            continue;
        };
        let created = metadata.created().unwrap_or(modified);

        entries.push(Entry::new(
            path,
            DateTime::<Utc>::from(created),
            DateTime::<Utc>::from(modified),
        ));
    }

    tracing::debug!(count = entries.len(), "catalog listed");
    Ok(entries)
}

/// Returns `path` if nothing exists there, otherwise the first free `path-N`
/// for `N = 2, 3, ...`.
///
/// Each candidate is checked against the filesystem at the time of the call,
/// so directories created by another process since listing are respected.
#[must_use]
pub fn unique_path(path: &Path) -> PathBuf {
    if !exists(path) {
        return path.to_path_buf();
    }

    let mut base = path.as_os_str().to_os_string();
    base.push("-");
    (2u64..)
        .map(|n| {
            let mut candidate = base.clone();
            candidate.push(n.to_string());
            PathBuf::from(candidate)
        })
        .find(|candidate| !exists(candidate))
        .unwrap_or_else(|| path.to_path_buf())
}

/// Unreadable candidates count as free; creating them then fails visibly
/// instead of the search never terminating.
fn exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}

/// Collapses runs of whitespace into single hyphens and trims the ends.
///
/// ```
/// use tries::catalog::sanitize_name;
///
/// assert_eq!(sanitize_name("  my   test "), "my-test");
/// assert_eq!(sanitize_name("   "), "");
/// ```
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Prefixes `name` with `date` in `YYYY-MM-DD-` form.
#[must_use]
pub fn dated_name(date: NaiveDate, name: &str) -> String {
    format!("{}-{name}", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_only_directories() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("alpha")).unwrap();
        fs::create_dir(root.path().join("beta")).unwrap();
        fs::write(root.path().join("notes.txt"), "x").unwrap();

        let mut names: Vec<String> = list_entries(root.path())
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn creates_missing_root() {
        let parent = tempfile::tempdir().unwrap();
        let root = parent.path().join("nested").join("tries");

        let entries = list_entries(&root).unwrap();
        assert!(entries.is_empty());
        assert!(root.is_dir());
    }

    #[test]
    fn root_that_is_a_file_is_a_catalog_error() {
        let parent = tempfile::tempdir().unwrap();
        let root = parent.path().join("file");
        fs::write(&root, "not a dir").unwrap();

        let err = list_entries(&root).unwrap_err();
        assert!(matches!(err, TriesError::Catalog { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_skipped_without_failing() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("real")).unwrap();
        std::os::unix::fs::symlink(root.path().join("missing"), root.path().join("dangling")).unwrap();

        let entries = list_entries(root.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["real"]);
    }

    #[cfg(unix)]
    #[test]
    fn symlink_to_directory_is_not_a_try() {
        let root = tempfile::tempdir().unwrap();
        let outside = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("real")).unwrap();
        std::os::unix::fs::symlink(outside.path(), root.path().join("link")).unwrap();

        let entries = list_entries(root.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["real"]);
    }

    #[test]
    fn entry_paths_are_under_root() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("one")).unwrap();

        let entries = list_entries(root.path()).unwrap();
        assert_eq!(entries[0].path, root.path().join("one"));
    }

    #[test]
    fn unique_path_returns_free_path_unchanged() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("2024-05-01-demo");
        assert_eq!(unique_path(&target), target);
    }

    #[test]
    fn unique_path_appends_counter() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("2024-05-01-demo");
        fs::create_dir(&target).unwrap();
        assert_eq!(unique_path(&target), root.path().join("2024-05-01-demo-2"));

        fs::create_dir(root.path().join("2024-05-01-demo-2")).unwrap();
        assert_eq!(unique_path(&target), root.path().join("2024-05-01-demo-3"));
    }

    #[test]
    fn sanitize_collapses_whitespace() {
        assert_eq!(sanitize_name("my test"), "my-test");
        assert_eq!(sanitize_name("a\t b\nc"), "a-b-c");
        assert_eq!(sanitize_name("already-fine"), "already-fine");
    }

    #[test]
    fn dated_name_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(dated_name(date, "demo"), "2024-03-07-demo");
    }
}
