//! Query-independent base score.
//!
//! Rewards the dated naming convention new tries are created with, plus two
//! smoothly decaying recency terms: age since creation, and time since the
//! directory was last touched (weighted higher).

use crate::domain::Entry;
use chrono::{DateTime, NaiveDate, Utc};

/// Flat bonus for names that start with `YYYY-MM-DD-`.
const DATE_PREFIX_BONUS: f64 = 2.0;

/// Weight of the creation-age term.
const CREATED_WEIGHT: f64 = 2.0;

/// Weight of the last-touched term.
const TOUCHED_WEIGHT: f64 = 3.0;

/// Number of seconds per hour for time conversion.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Length of `YYYY-MM-DD`.
const DATE_LEN: usize = 10;

/// Calculates the base score of an entry at time `now`.
///
/// ```text
/// score = [2 if dated] + 2 / sqrt(days_since_created + 1) + 3 / sqrt(hours_since_touched + 1)
/// ```
///
/// Timestamps in the future are treated as "now".
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use tries::domain::Entry;
/// use tries::ranking::base_score;
///
/// let now = Utc::now();
/// let fresh = Entry::new("/t/2024-01-01-demo".into(), now, now);
/// assert!((base_score(&fresh, now) - 7.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn base_score(entry: &Entry, now: DateTime<Utc>) -> f64 {
    let mut score = 0.0;

    if has_date_prefix(&entry.name) {
        score += DATE_PREFIX_BONUS;
    }

    let days = hours_between(entry.created, now) / 24.0;
    score += CREATED_WEIGHT / (days + 1.0).sqrt();

    let hours = hours_between(entry.touched, now);
    score += TOUCHED_WEIGHT / (hours + 1.0).sqrt();

    score
}

/// Returns `true` if `name` begins with a valid calendar date and a hyphen.
#[must_use]
pub fn has_date_prefix(name: &str) -> bool {
    let (Some(date), Some(b'-')) = (name.get(..DATE_LEN), name.as_bytes().get(DATE_LEN)) else {
        return false;
    };
    let digits_in_place = date
        .bytes()
        .enumerate()
        .all(|(i, b)| if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() });
    digits_in_place && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

#[allow(clippy::cast_precision_loss)]
fn hours_between(then: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let seconds = (now - then).num_seconds().max(0);
    seconds as f64 / SECONDS_PER_HOUR
}
