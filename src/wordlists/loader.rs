//! Raw word source adapters
//!
//! Every loader yields plain strings, one per entry. Filtering by length and
//! normalisation happen later in `DictionaryIndex::build`.

use crate::core::BoggleError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load one word per line from a file
///
/// # Errors
///
/// Returns `BoggleError::DictionaryUnavailable` if the file cannot be opened
/// or read, or holds no non-blank lines.
///
/// # Examples
/// ```no_run
/// use boggle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, BoggleError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        BoggleError::DictionaryUnavailable(format!("cannot open {}: {e}", path.display()))
    })?;
    load_from_reader(BufReader::new(file))
}

/// Load one word per line from any buffered reader
///
/// # Errors
///
/// Returns `BoggleError::DictionaryUnavailable` on a read error or if no
/// line holds a word.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Vec<String>, BoggleError> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| BoggleError::DictionaryUnavailable(e.to_string()))?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            words.push(trimmed.to_string());
        }
    }

    if words.is_empty() {
        return Err(BoggleError::DictionaryUnavailable(
            "word source is empty".to_string(),
        ));
    }
    Ok(words)
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use boggle::wordlists::loader::words_from_slice;
/// use boggle::wordlists::STARTER;
///
/// let words = words_from_slice(STARTER);
/// assert_eq!(words.len(), STARTER.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}
