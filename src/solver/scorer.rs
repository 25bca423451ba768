//! Points for guessed words

use rustc_hash::FxHashSet;

/// Points for a word of the given character length
///
/// # Examples
/// ```
/// use boggle::solver::word_points;
///
/// assert_eq!(word_points("an"), 0);
/// assert_eq!(word_points("cat"), 1);
/// assert_eq!(word_points("crane"), 2);
/// assert_eq!(word_points("strange"), 5);
/// assert_eq!(word_points("quarters"), 11);
/// ```
#[must_use]
pub fn word_points(word: &str) -> u32 {
    match word.chars().count() {
        0..=2 => 0,
        3 | 4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

/// Total points for the guesses present in `authoritative`
///
/// Guesses are trimmed and lowercased, then deduplicated, before they are
/// compared, so `"STARE "` matches `"stare"`. Anything not on the board scores
/// nothing.
///
/// # Examples
/// ```
/// use boggle::solver::score;
/// use rustc_hash::FxHashSet;
///
/// let found: FxHashSet<String> = ["stare".to_string()].into_iter().collect();
/// assert_eq!(score([" STARE", "stare"], &found), 2);
/// assert_eq!(score(["tears"], &found), 0);
/// ```
#[must_use]
pub fn score<I, S>(guesses: I, authoritative: &FxHashSet<String>) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    report(guesses, authoritative).score
}

/// Breakdown of a submission against the found words
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScoreReport {
    pub score: u32,
    /// Guesses that are on the board, sorted
    pub accepted: Vec<String>,
    /// Guesses that are not on the board, sorted
    pub rejected: Vec<String>,
    /// Words on the board nobody guessed, sorted
    pub missed: Vec<String>,
}

/// Split guesses into accepted and rejected and total the accepted ones
///
/// Guesses are trimmed and lowercased; blank guesses are ignored.
#[must_use]
pub fn report<I, S>(guesses: I, authoritative: &FxHashSet<String>) -> ScoreReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let guesses: FxHashSet<String> = guesses
        .into_iter()
        .map(|g| g.as_ref().trim().to_lowercase())
        .filter(|g| !g.is_empty())
        .collect();

    let (mut accepted, mut rejected): (Vec<String>, Vec<String>) = guesses
        .into_iter()
        .partition(|g| authoritative.contains(g));
    accepted.sort();
    rejected.sort();

    let mut missed: Vec<String> = authoritative
        .iter()
        .filter(|&w| accepted.binary_search(w).is_err())
        .cloned()
        .collect();
    missed.sort();

    let score = accepted.iter().map(|w| word_points(w)).sum();

    ScoreReport {
        score,
        accepted,
        rejected,
        missed,
    }
}
