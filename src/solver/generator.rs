//! Random board generation with a solvability check
//!
//! Each attempt drafts a board, validates it with the word finder, and either
//! accepts it or rejects it and drafts again, up to a fixed attempt budget.

use super::{AdjacencyGraph, DictionaryIndex, WordFinder};
use crate::core::{Alphabet, Board, BoardSize, BoggleError};
use log::{debug, trace};
use rand::Rng;

/// Default cap on drafts before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// A board accepted by [`BoardGenerator::generate_solvable`]
#[derive(Debug, Clone)]
pub struct GeneratedBoard {
    pub board: Board,
    /// Drafts made, including the accepted one
    pub attempts: usize,
}

/// Draws boards from an alphabet
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    size: BoardSize,
    alphabet: Alphabet,
    max_attempts: usize,
}

impl BoardGenerator {
    /// # Errors
    /// Returns `BoggleError::InvalidConfiguration` if `max_attempts` is zero.
    pub fn new(
        size: BoardSize,
        alphabet: Alphabet,
        max_attempts: usize,
    ) -> Result<Self, BoggleError> {
        if max_attempts == 0 {
            return Err(BoggleError::InvalidConfiguration(
                "max attempts must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            size,
            alphabet,
            max_attempts,
        })
    }

    /// Draft one board with no solvability check
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Board {
        Board::random(self.size, &self.alphabet, rng)
    }

    /// Draft boards until one holds at least one word
    ///
    /// # Errors
    /// Returns `BoggleError::GenerationExhausted` if every draft within the
    /// attempt budget is empty.
    ///
    /// # Examples
    /// ```
    /// use boggle::core::{Alphabet, BoardSize};
    /// use boggle::solver::{AdjacencyGraph, BoardGenerator, DictionaryIndex};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let size = BoardSize::new(4).unwrap();
    /// let alphabet = Alphabet::parse("a,e,s,t").unwrap();
    /// let generator = BoardGenerator::new(size, alphabet, 100).unwrap();
    /// let adjacency = AdjacencyGraph::build(size);
    /// let dictionary = DictionaryIndex::build(["seat", "east", "eats", "teas"], 4).unwrap();
    ///
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let generated = generator
    ///     .generate_solvable(&adjacency, &dictionary, &mut rng)
    ///     .unwrap();
    /// assert!(generated.attempts >= 1);
    /// ```
    pub fn generate_solvable<R: Rng + ?Sized>(
        &self,
        adjacency: &AdjacencyGraph,
        dictionary: &DictionaryIndex,
        rng: &mut R,
    ) -> Result<GeneratedBoard, BoggleError> {
        for attempt in 1..=self.max_attempts {
            let board = self.generate(rng);
            if WordFinder::new(&board, adjacency, dictionary).has_any_word() {
                debug!("accepted board on attempt {attempt}");
                return Ok(GeneratedBoard {
                    board,
                    attempts: attempt,
                });
            }
            trace!("rejected empty draft {attempt}");
        }

        debug!("gave up after {} drafts", self.max_attempts);
        Err(BoggleError::GenerationExhausted {
            attempts: self.max_attempts,
        })
    }
}
