//! Word and prefix index used to prune the board search

use crate::core::BoggleError;
use log::debug;
use rustc_hash::FxHashSet;

/// Eligible words plus every proper prefix of them
///
/// Every word of length L contributes its prefixes of length `0..L`,
/// so the empty string is always present once any word is indexed.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    words: FxHashSet<String>,
    prefixes: FxHashSet<String>,
    min_length: usize,
}

impl DictionaryIndex {
    /// Index every raw entry at least `min_length` characters long
    ///
    /// Entries are trimmed and lowercased; blank entries are skipped.
    ///
    /// # Errors
    /// Returns `BoggleError::DictionaryUnavailable` if no entry survives the
    /// length filter.
    ///
    /// # Examples
    /// ```
    /// use boggle::solver::DictionaryIndex;
    ///
    /// let index = DictionaryIndex::build(["cat", "cats", "act"], 4).unwrap();
    /// assert!(index.is_word("cats"));
    /// assert!(!index.is_word("cat"));
    /// assert!(index.is_prefix("cat"));
    /// assert!(index.is_prefix(""));
    /// assert!(!index.is_prefix("cats"));
    /// ```
    pub fn build<I, S>(raw_words: I, min_length: usize) -> Result<Self, BoggleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = FxHashSet::default();
        let mut prefixes = FxHashSet::default();
        let mut seen = 0_usize;

        for entry in raw_words {
            let word = entry.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            seen += 1;
            if word.chars().count() < min_length {
                continue;
            }
            for (i, _) in word.char_indices() {
                if !prefixes.contains(&word[..i]) {
                    prefixes.insert(word[..i].to_string());
                }
            }
            words.insert(word);
        }

        if words.is_empty() {
            return Err(BoggleError::DictionaryUnavailable(format!(
                "none of {seen} entries has at least {min_length} letters"
            )));
        }

        debug!(
            "indexed {} words and {} prefixes from {seen} entries (min length {min_length})",
            words.len(),
            prefixes.len()
        );

        Ok(Self {
            words,
            prefixes,
            min_length,
        })
    }

    #[inline]
    #[must_use]
    pub fn is_word(&self, candidate: &str) -> bool {
        self.words.contains(candidate)
    }

    /// True if `candidate` is a proper prefix of some indexed word
    #[inline]
    #[must_use]
    pub fn is_prefix(&self, candidate: &str) -> bool {
        self.prefixes.contains(candidate)
    }

    #[must_use]
    pub const fn words(&self) -> &FxHashSet<String> {
        &self.words
    }

    #[must_use]
    pub const fn prefixes(&self) -> &FxHashSet<String> {
        &self.prefixes
    }

    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
