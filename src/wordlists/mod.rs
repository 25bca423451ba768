//! Word lists for Boggle
//!
//! An embedded starter dictionary plus loaders for external word files.

mod embedded;
pub mod loader;

pub use embedded::{STARTER, STARTER_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::DictionaryIndex;

    #[test]
    fn starter_count_matches_const() {
        assert_eq!(STARTER.len(), STARTER_COUNT);
    }

    #[test]
    fn starter_words_are_lowercase_letters() {
        for &word in STARTER {
            assert!(
                !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn starter_indexes_for_smallest_board() {
        let index = DictionaryIndex::build(STARTER, 4).unwrap();
        assert!(index.len() > 300);
        assert!(index.is_word("stone"));
    }
}
