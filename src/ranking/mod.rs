//! Ranking engine combining a recency prior with fuzzy match quality.
//!
//! The base score ([`recency`]) is independent of the query; the fuzzy score
//! ([`fuzzy`]) accumulates on top of it. With an empty query the list is simply
//! ordered by recency; with a query, entries that do not match are dropped and
//! the rest are re-ordered by match quality, with recency breaking near-ties.
//!
//! Everything here is a pure function of its inputs.

pub mod fuzzy;
pub mod recency;

pub use fuzzy::fuzzy_score;
pub use recency::{base_score, has_date_prefix};

use crate::domain::{Entry, ScoredEntry};
use chrono::{DateTime, Utc};

/// Scores every entry against `query` and returns the matches, best first.
///
/// Ties on score are broken by ascending name so the order is deterministic.
///
/// # Examples
///
/// ```
/// use chrono::{Duration, Utc};
/// use tries::domain::Entry;
/// use tries::ranking::rank;
///
/// let now = Utc::now();
/// let entries = vec![
///     Entry::new("/t/old".into(), now - Duration::days(10), now - Duration::days(10)),
///     Entry::new("/t/new".into(), now - Duration::hours(1), now - Duration::hours(1)),
/// ];
/// let ranked = rank(&entries, "", now);
/// assert_eq!(ranked[0].name(), "new");
/// ```
#[must_use]
pub fn rank(entries: &[Entry], query: &str, now: DateTime<Utc>) -> Vec<ScoredEntry> {
    let _span = tracing::debug_span!("rank", total = entries.len(), query_len = query.len()).entered();

    let mut ranked: Vec<ScoredEntry> = entries
        .iter()
        .filter_map(|entry| {
            let initial = base_score(entry, now);
            fuzzy_score(&entry.name, query, initial).map(|(score, highlights)| ScoredEntry {
                entry: entry.clone(),
                score,
                highlights,
            })
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.entry.name.cmp(&b.entry.name))
    });

    tracing::debug!(matched = ranked.len(), "entries ranked");
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry(name: &str, touched_ago: Duration, now: DateTime<Utc>) -> Entry {
        Entry::new(format!("/tries/{name}").into(), now - touched_ago, now - touched_ago)
    }

    fn names(ranked: &[ScoredEntry]) -> Vec<&str> {
        ranked.iter().map(ScoredEntry::name).collect()
    }

    #[test]
    fn empty_query_orders_by_recency() {
        let now = Utc::now();
        let entries = vec![
            entry("b", Duration::days(10), now),
            entry("a", Duration::hours(1), now),
        ];
        assert_eq!(names(&rank(&entries, "", now)), vec!["a", "b"]);
    }

    #[test]
    fn empty_query_score_is_base_score() {
        let now = Utc::now();
        let entries = vec![entry("2024-01-01-x", Duration::hours(3), now)];
        let ranked = rank(&entries, "", now);
        assert_eq!(ranked[0].score, base_score(&entries[0], now));
        assert!(ranked[0].highlights.is_empty());
    }

    #[test]
    fn non_matching_entries_are_dropped() {
        let now = Utc::now();
        let entries = vec![
            entry("rust-demo", Duration::hours(1), now),
            entry("python", Duration::hours(1), now),
        ];
        assert_eq!(names(&rank(&entries, "rd", now)), vec!["rust-demo"]);
    }

    #[test]
    fn ties_break_by_name() {
        let now = Utc::now();
        let entries = vec![
            entry("zeta", Duration::hours(2), now),
            entry("alfa", Duration::hours(2), now),
            entry("mike", Duration::hours(2), now),
        ];
        assert_eq!(names(&rank(&entries, "", now)), vec!["alfa", "mike", "zeta"]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let now = Utc::now();
        let entries = vec![
            entry("2024-02-02-api", Duration::hours(5), now),
            entry("apple", Duration::days(2), now),
            entry("map-demo", Duration::minutes(3), now),
        ];
        assert_eq!(rank(&entries, "ap", now), rank(&entries, "ap", now));
    }

    #[test]
    fn demo_highlights_inside_dated_name() {
        let now = Utc::now();
        let entries = vec![entry("2024-01-01-demo", Duration::hours(1), now)];
        let ranked = rank(&entries, "demo", now);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].highlights, vec![11, 12, 13, 14]);
    }

    #[test]
    fn better_match_outranks_more_recent() {
        let now = Utc::now();
        let entries = vec![
            entry("xdxexmxo-long-name", Duration::minutes(1), now),
            entry("demo", Duration::days(3), now),
        ];
        assert_eq!(rank(&entries, "demo", now)[0].name(), "demo");
    }
}
