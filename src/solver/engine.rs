//! Boggle game session
//!
//! Ties a generated board to its adjacency graph and a shared dictionary, and
//! exposes the two operations a front end needs: solve and score.

use super::generator::DEFAULT_MAX_ATTEMPTS;
use super::scorer::{self, ScoreReport};
use super::{AdjacencyGraph, BoardGenerator, DictionaryIndex, WordFinder};
use crate::core::{Alphabet, Board, BoardSize, BoggleError, Path, Position};
use log::{debug, info};
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Settings for building a game
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub size: BoardSize,
    pub alphabet: Alphabet,
    /// Drafts allowed before generation gives up
    pub max_attempts: usize,
    /// Shortest word indexed; `None` uses the board size
    pub min_word_length: Option<usize>,
}

impl GameConfig {
    /// Default settings for a board of side `size`
    ///
    /// # Errors
    /// Returns `BoggleError::InvalidConfiguration` if `size` is out of range.
    pub fn new(size: usize) -> Result<Self, BoggleError> {
        Ok(Self {
            size: BoardSize::new(size)?,
            alphabet: Alphabet::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_word_length: None,
        })
    }

    #[must_use]
    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_min_word_length(mut self, min_word_length: Option<usize>) -> Self {
        self.min_word_length = min_word_length;
        self
    }

    /// Shortest word length the dictionary keeps
    #[must_use]
    pub fn word_length_floor(&self) -> usize {
        self.min_word_length.unwrap_or(self.size.get())
    }

    /// Index a raw word list for boards of this configuration
    ///
    /// # Errors
    /// Returns `BoggleError::DictionaryUnavailable` if no word is long enough.
    pub fn build_dictionary<I, S>(&self, raw_words: I) -> Result<DictionaryIndex, BoggleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        DictionaryIndex::build(raw_words, self.word_length_floor())
    }

    /// Generator matching this configuration
    ///
    /// # Errors
    /// Returns `BoggleError::InvalidConfiguration` if `max_attempts` is zero.
    pub fn generator(&self) -> Result<BoardGenerator, BoggleError> {
        BoardGenerator::new(self.size, self.alphabet.clone(), self.max_attempts)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BoardSize::default(),
            alphabet: Alphabet::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            min_word_length: None,
        }
    }
}

/// An accepted board with everything needed to solve and score it
pub struct Boggle<'a> {
    board: Board,
    adjacency: AdjacencyGraph,
    dictionary: &'a DictionaryIndex,
    attempts: usize,
}

impl<'a> Boggle<'a> {
    /// Generate a board holding at least one word
    ///
    /// # Errors
    /// Returns `BoggleError::InvalidConfiguration` for a zero attempt budget,
    /// or `BoggleError::GenerationExhausted` if no draft was solvable.
    ///
    /// # Examples
    /// ```
    /// use boggle::core::Alphabet;
    /// use boggle::solver::{Boggle, GameConfig};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let config = GameConfig::new(4)
    ///     .unwrap()
    ///     .with_alphabet(Alphabet::parse("a,e,r,s,t").unwrap());
    /// let dictionary = config.build_dictionary(["star", "rats", "tears", "rates"]).unwrap();
    ///
    /// let game = Boggle::generate(&config, &dictionary, &mut StdRng::seed_from_u64(8)).unwrap();
    /// let words = game.find_all_words();
    /// assert!(!words.is_empty());
    /// assert!(game.score(words.iter()) > 0);
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        config: &GameConfig,
        dictionary: &'a DictionaryIndex,
        rng: &mut R,
    ) -> Result<Self, BoggleError> {
        let generator = config.generator()?;
        let adjacency = AdjacencyGraph::build(config.size);
        let generated = generator.generate_solvable(&adjacency, dictionary, rng)?;

        info!(
            "generated {n}x{n} board after {} attempt(s)",
            generated.attempts,
            n = config.size.get()
        );

        Ok(Self {
            board: generated.board,
            adjacency,
            dictionary,
            attempts: generated.attempts,
        })
    }

    /// Wrap an existing board; it is not required to hold any words
    #[must_use]
    pub fn with_board(board: Board, dictionary: &'a DictionaryIndex) -> Self {
        if dictionary.min_length() != board.size() {
            debug!(
                "dictionary keeps words of {}+ letters on a {n}x{n} board",
                dictionary.min_length(),
                n = board.size()
            );
        }
        let adjacency = AdjacencyGraph::build(board.board_size());
        Self {
            board,
            adjacency,
            dictionary,
            attempts: 0,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn tile(&self, pos: Position) -> &str {
        self.board.tile(pos)
    }

    #[must_use]
    pub const fn adjacency(&self) -> &AdjacencyGraph {
        &self.adjacency
    }

    #[must_use]
    pub const fn dictionary(&self) -> &DictionaryIndex {
        self.dictionary
    }

    /// Drafts it took to generate this board; zero for supplied boards
    #[must_use]
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    fn finder(&self) -> WordFinder<'_> {
        WordFinder::new(&self.board, &self.adjacency, self.dictionary)
    }

    /// Every word findable on the board
    #[must_use]
    pub fn find_all_words(&self) -> FxHashSet<String> {
        self.finder().find_all_words()
    }

    /// Every findable word with one path that spells it
    #[must_use]
    pub fn find_all_paths(&self) -> FxHashMap<String, Path> {
        self.finder().find_all_paths()
    }

    /// Points earned by `guesses` against this board
    pub fn score<I, S>(&self, guesses: I) -> u32
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        scorer::score(guesses, &self.find_all_words())
    }

    /// Full breakdown of `guesses` against this board
    pub fn report<I, S>(&self, guesses: I) -> ScoreReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        scorer::report(guesses, &self.find_all_words())
    }
}

impl fmt::Display for Boggle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.board, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cats_game(dictionary: &DictionaryIndex) -> Boggle<'_> {
        let board = Board::parse("c a t s / x x x x / x x x x / x x x x").unwrap();
        Boggle::with_board(board, dictionary)
    }

    #[test]
    fn config_rejects_out_of_range_size() {
        assert!(matches!(
            GameConfig::new(3),
            Err(BoggleError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(17),
            Err(BoggleError::InvalidConfiguration(_))
        ));
        assert!(GameConfig::new(16).is_ok());
    }

    #[test]
    fn default_config_is_usable() {
        let config = GameConfig::default();
        assert_eq!(config.size.get(), 4);
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(config.generator().is_ok());
    }

    #[test]
    fn word_floor_defaults_to_size() {
        let config = GameConfig::new(5).unwrap();
        assert_eq!(config.word_length_floor(), 5);
        let config = config.with_min_word_length(Some(3));
        assert_eq!(config.word_length_floor(), 3);
    }

    #[test]
    fn default_floor_drops_short_words() {
        let config = GameConfig::new(4).unwrap();
        let dictionary = config.build_dictionary(["cat", "cats", "act"]).unwrap();
        let game = cats_game(&dictionary);

        let words: Vec<String> = game.find_all_words().into_iter().collect();
        assert_eq!(words, ["cats"]);
    }

    #[test]
    fn cats_example_end_to_end() {
        let config = GameConfig::new(4).unwrap().with_min_word_length(Some(3));
        let dictionary = config.build_dictionary(["cat", "cats", "act"]).unwrap();
        let game = cats_game(&dictionary);

        let mut words: Vec<String> = game.find_all_words().into_iter().collect();
        words.sort();
        assert_eq!(words, ["cat", "cats"]);

        assert_eq!(game.score(["cat", "dog"]), 1);
        assert_eq!(game.score(["cat", "cats"]), 2);
    }

    #[test]
    fn report_lists_missed_words() {
        let config = GameConfig::new(4).unwrap().with_min_word_length(Some(3));
        let dictionary = config.build_dictionary(["cat", "cats", "act"]).unwrap();
        let game = cats_game(&dictionary);

        let report = game.report(["cat", "act"]);
        assert_eq!(report.score, 1);
        assert_eq!(report.rejected, ["act"]);
        assert_eq!(report.missed, ["cats"]);
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let config = GameConfig::new(4)
            .unwrap()
            .with_alphabet(Alphabet::parse("a,e,r,s,t").unwrap());
        let dictionary = config
            .build_dictionary(["star", "rats", "arts", "tsar", "tears", "rates", "stare"])
            .unwrap();

        let a = Boggle::generate(&config, &dictionary, &mut StdRng::seed_from_u64(21)).unwrap();
        let b = Boggle::generate(&config, &dictionary, &mut StdRng::seed_from_u64(21)).unwrap();

        assert_eq!(a.board(), b.board());
        assert_eq!(a.find_all_words(), b.find_all_words());
        assert!(!a.find_all_words().is_empty());
        assert!(a.attempts() >= 1);
    }

    #[test]
    fn generation_exhaustion_surfaces() {
        let config = GameConfig::new(4)
            .unwrap()
            .with_alphabet(Alphabet::parse("x").unwrap())
            .with_max_attempts(3);
        let dictionary = config.build_dictionary(["star"]).unwrap();

        let result = Boggle::generate(&config, &dictionary, &mut StdRng::seed_from_u64(0));
        assert!(matches!(
            result,
            Err(BoggleError::GenerationExhausted { attempts: 3 })
        ));
    }

    #[test]
    fn display_matches_board() {
        let config = GameConfig::new(4).unwrap();
        let dictionary = config.build_dictionary(["cats"]).unwrap();
        let game = cats_game(&dictionary);
        assert_eq!(game.to_string(), "c a t s\nx x x x\nx x x x\nx x x x");
        assert_eq!(game.tile(Position::new(0, 3)), "s");
        assert_eq!(game.size(), 4);
    }
}
