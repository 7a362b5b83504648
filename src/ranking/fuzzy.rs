//! Subsequence fuzzy matching with word-boundary and proximity bonuses.
//!
//! Every query character must appear in the name, in order, ignoring case.
//! The score starts from a caller-supplied initial value (the recency prior)
//! so that equally good matches still prefer recent entries.

/// Scores `text` against `query`, starting from `initial`.
///
/// Returns `None` when `query` is not an in-order subsequence of `text`
/// (case-insensitive). Otherwise returns the score and the matched character
/// offsets into `text`. The empty query matches everything with score
/// `initial` and no highlights.
///
/// # Scoring
///
/// 1. +1 per matched character
/// 2. +1 if the match starts the name or follows a character that is not an
///    ASCII lowercase letter or digit
/// 3. +1/sqrt(gap + 1) for each match after the first, `gap` being the number
///    of skipped characters since the previous match
/// 4. scaled by `query_len / (last_match + 1)`
/// 5. scaled by `10 / (text_len + 10)`
///
/// # Examples
///
/// ```
/// use tries::ranking::fuzzy_score;
///
/// let (_, highlights) = fuzzy_score("2024-01-01-demo", "demo", 0.0).unwrap();
/// assert_eq!(highlights, vec![11, 12, 13, 14]);
/// assert!(fuzzy_score("demo", "dx", 0.0).is_none());
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn fuzzy_score(text: &str, query: &str, initial: f64) -> Option<(f64, Vec<usize>)> {
    if query.is_empty() {
        return Some((initial, Vec::new()));
    }

    let text: Vec<char> = text.chars().map(fold_case).collect();
    let query: Vec<char> = query.chars().map(fold_case).collect();

    let mut score = initial;
    let mut highlights = Vec::with_capacity(query.len());
    let mut pos = 0;
    let mut last: Option<usize> = None;

    for &qc in &query {
        let found = pos + text[pos..].iter().position(|&tc| tc == qc)?;
        highlights.push(found);

        score += 1.0;
        if found == 0 || !is_word_char(text[found - 1]) {
            score += 1.0;
        }
        if let Some(prev) = last {
            let gap = found - prev - 1;
            score += 1.0 / ((gap + 1) as f64).sqrt();
        }

        last = Some(found);
        pos = found + 1;
    }

    let last = last.unwrap_or(0);
    score *= query.len() as f64 / (last + 1) as f64;
    score *= 10.0 / (text.len() as f64 + 10.0);

    Some((score, highlights))
}

/// Single-char lowercase so offsets stay aligned with the original name.
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}
