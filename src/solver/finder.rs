//! Exhaustive backtracking word search
//!
//! Walks every simple path on the board, extending only while the letters
//! gathered so far are a dictionary prefix.

use super::{AdjacencyGraph, DictionaryIndex};
use crate::core::{Board, Path, Position};
use log::trace;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Finds every dictionary word traceable on a board
///
/// A word is traceable when its letters can be read along a path of adjacent
/// cells that visits no cell twice. Multi-letter tiles contribute their whole
/// string in one step.
pub struct WordFinder<'a> {
    board: &'a Board,
    adjacency: &'a AdjacencyGraph,
    dictionary: &'a DictionaryIndex,
}

impl<'a> WordFinder<'a> {
    /// # Panics
    /// Panics if `adjacency` was built for a different board size
    #[must_use]
    pub fn new(
        board: &'a Board,
        adjacency: &'a AdjacencyGraph,
        dictionary: &'a DictionaryIndex,
    ) -> Self {
        assert_eq!(board.size(), adjacency.size(), "adjacency size mismatch");
        Self {
            board,
            adjacency,
            dictionary,
        }
    }

    /// Every word on the board
    ///
    /// Starting cells are searched in parallel and their results merged.
    ///
    /// # Examples
    /// ```
    /// use boggle::core::Board;
    /// use boggle::solver::{AdjacencyGraph, DictionaryIndex, WordFinder};
    ///
    /// let board = Board::parse("c a t s / x x x x / x x x x / x x x x").unwrap();
    /// let adjacency = AdjacencyGraph::build(board.board_size());
    /// let dictionary = DictionaryIndex::build(["cat", "cats", "act"], 3).unwrap();
    ///
    /// let words = WordFinder::new(&board, &adjacency, &dictionary).find_all_words();
    /// let mut words: Vec<_> = words.into_iter().collect();
    /// words.sort();
    /// assert_eq!(words, ["cat", "cats"]);
    /// ```
    #[must_use]
    pub fn find_all_words(&self) -> FxHashSet<String> {
        self.find_all_paths().into_keys().collect()
    }

    /// Every word on the board with one witness path each
    ///
    /// When several paths spell the same word, the one found first from the
    /// earliest start cell in row-major order is kept.
    #[must_use]
    pub fn find_all_paths(&self) -> FxHashMap<String, Path> {
        let n = self.board.size();
        let found = (0..n * n)
            .into_par_iter()
            .map(|i| {
                let mut search = Search::new(self, false);
                search.run_from(Position::from_index(i, n));
                search.found
            })
            .reduce(FxHashMap::default, |mut acc, part| {
                for (word, path) in part {
                    acc.entry(word).or_insert(path);
                }
                acc
            });

        trace!("found {} words on {n}x{n} board", found.len());
        found
    }

    /// Words whose trace begins at `start`
    #[must_use]
    pub fn find_words_from(&self, start: Position) -> FxHashSet<String> {
        let mut search = Search::new(self, false);
        search.run_from(start);
        search.found.into_keys().collect()
    }

    /// True if at least one word is on the board
    ///
    /// Runs sequentially and stops at the first hit.
    #[must_use]
    pub fn has_any_word(&self) -> bool {
        let mut search = Search::new(self, true);
        for start in self.board.positions() {
            search.run_from(start);
            if search.is_done() {
                return true;
            }
        }
        false
    }
}

/// Depth-first state for one search
///
/// `visited`, `path` and `chars` grow on descent and shrink on backtrack, so
/// the reuse check is a single index lookup.
struct Search<'f, 'a> {
    finder: &'f WordFinder<'a>,
    visited: Vec<bool>,
    path: Path,
    chars: String,
    found: FxHashMap<String, Path>,
    stop_at_first: bool,
}

impl<'f, 'a> Search<'f, 'a> {
    fn new(finder: &'f WordFinder<'a>, stop_at_first: bool) -> Self {
        let n = finder.board.size();
        Self {
            finder,
            visited: vec![false; n * n],
            path: Vec::with_capacity(n * n),
            chars: String::new(),
            found: FxHashMap::default(),
            stop_at_first,
        }
    }

    fn is_done(&self) -> bool {
        self.stop_at_first && !self.found.is_empty()
    }

    /// The start cell alone is never checked against the prefix set: the
    /// empty prefix is always present, so every cell seeds a search.
    fn run_from(&mut self, start: Position) {
        let adjacency = self.finder.adjacency;
        let mark = self.enter(start);
        for &next in adjacency.neighbors(start) {
            if self.is_done() {
                break;
            }
            self.visit(next);
        }
        self.leave(start, mark);
    }

    fn visit(&mut self, pos: Position) {
        let adjacency = self.finder.adjacency;
        let dictionary = self.finder.dictionary;
        let n = self.finder.board.size();

        let mark = self.enter(pos);

        if dictionary.is_word(&self.chars) && !self.found.contains_key(&self.chars) {
            self.found.insert(self.chars.clone(), self.path.clone());
        }

        if dictionary.is_prefix(&self.chars) {
            for &next in adjacency.neighbors(pos) {
                if self.is_done() {
                    break;
                }
                if !self.visited[next.index(n)] {
                    self.visit(next);
                }
            }
        }

        self.leave(pos, mark);
    }

    fn enter(&mut self, pos: Position) -> usize {
        let mark = self.chars.len();
        self.chars.push_str(self.finder.board.tile(pos));
        self.path.push(pos);
        self.visited[pos.index(self.finder.board.size())] = true;
        mark
    }

    fn leave(&mut self, pos: Position, mark: usize) {
        self.chars.truncate(mark);
        self.path.pop();
        self.visited[pos.index(self.finder.board.size())] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, BoardSize};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "arts", "aster", "east", "eats", "ease", "rate", "rates", "rats", "rest", "sate", "seat",
        "star", "stare", "stars", "start", "tare", "tars", "tear", "tears", "tease", "teas",
        "test", "tree", "trees", "tsar", "street", "setter", "terse",
    ];

    fn sorted(words: FxHashSet<String>) -> Vec<String> {
        let mut words: Vec<String> = words.into_iter().collect();
        words.sort();
        words
    }

    fn spelled(board: &Board, path: &[Position]) -> String {
        path.iter().map(|&pos| board.tile(pos)).collect()
    }

    #[test]
    fn cats_example_finds_cat_and_cats() {
        let board = Board::parse("c a t s / x x x x / x x x x / x x x x").unwrap();
        let adjacency = AdjacencyGraph::build(board.board_size());
        let dictionary = DictionaryIndex::build(["cat", "cats", "act"], 3).unwrap();
        let finder = WordFinder::new(&board, &adjacency, &dictionary);

        assert_eq!(sorted(finder.find_all_words()), ["cat", "cats"]);
    }

    #[test]
    fn tiles_are_not_reused() {
        let board = Board::parse("a b x x / x x x x / x x x x / x x x x").unwrap();
        let adjacency = AdjacencyGraph::build(board.board_size());
        let dictionary = DictionaryIndex::build(["abab", "abxx"], 4).unwrap();
        let finder = WordFinder::new(&board, &adjacency, &dictionary);

        assert_eq!(sorted(finder.find_all_words()), ["abxx"]);
    }

    #[test]
    fn cluster_tile_is_one_step() {
        let board = Board::parse("qu i t x / x x x x / x x x x / x x x x").unwrap();
        let adjacency = AdjacencyGraph::build(board.board_size());
        let dictionary = DictionaryIndex::build(["quit", "quits", "qit"], 3).unwrap();
        let finder = WordFinder::new(&board, &adjacency, &dictionary);

        let paths = finder.find_all_paths();
        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths["quit"],
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn uniform_board_terminates() {
        let board = Board::parse("a a a a / a a a a / a a a a / a a a a").unwrap();
        let adjacency = AdjacencyGraph::build(board.board_size());
        let dictionary = DictionaryIndex::build(["aaaa", "aaaaaa", "aaab"], 4).unwrap();
        let finder = WordFinder::new(&board, &adjacency, &dictionary);

        assert_eq!(sorted(finder.find_all_words()), ["aaaa", "aaaaaa"]);
    }

    #[test]
    fn empty_board_has_no_words() {
        let board = Board::parse("x x x x / x x x x / x x x x / x x x x").unwrap();
        let adjacency = AdjacencyGraph::build(board.board_size());
        let dictionary = DictionaryIndex::build(WORDS, 4).unwrap();
        let finder = WordFinder::new(&board, &adjacency, &dictionary);

        assert!(finder.find_all_words().is_empty());
        assert!(!finder.has_any_word());
    }

    #[test]
    fn same_word_from_many_starts_is_deduplicated() {
        let board = Board::parse("s t a r / r a t s / s t a r / r a t s").unwrap();
        let adjacency = AdjacencyGraph::build(board.board_size());
        let dictionary = DictionaryIndex::build(["star", "rats"], 4).unwrap();
        let finder = WordFinder::new(&board, &adjacency, &dictionary);

        assert_eq!(sorted(finder.find_all_words()), ["rats", "star"]);
    }

    #[test]
    fn parallel_matches_union_of_starts() {
        let size = BoardSize::new(5).unwrap();
        let alphabet = Alphabet::parse("a,e,r,s,t").unwrap();
        let adjacency = AdjacencyGraph::build(size);
        let dictionary = DictionaryIndex::build(WORDS, 4).unwrap();

        for seed in 0..5 {
            let board = Board::random(size, &alphabet, &mut StdRng::seed_from_u64(seed));
            let finder = WordFinder::new(&board, &adjacency, &dictionary);

            let mut union = FxHashSet::default();
            for start in board.positions() {
                union.extend(finder.find_words_from(start));
            }

            let all = finder.find_all_words();
            assert_eq!(all, union);
            assert_eq!(finder.has_any_word(), !all.is_empty());
        }
    }

    #[test]
    fn witness_paths_spell_their_words() {
        let size = BoardSize::new(4).unwrap();
        let alphabet = Alphabet::parse("a,e,r,s,t").unwrap();
        let adjacency = AdjacencyGraph::build(size);
        let dictionary = DictionaryIndex::build(WORDS, 4).unwrap();

        for seed in 0..10 {
            let board = Board::random(size, &alphabet, &mut StdRng::seed_from_u64(seed));
            let finder = WordFinder::new(&board, &adjacency, &dictionary);

            for (word, path) in finder.find_all_paths() {
                assert!(word.len() >= size.get());
                assert!(dictionary.is_word(&word));
                assert_eq!(spelled(&board, &path), word);
                for (i, &p) in path.iter().enumerate() {
                    assert!(!path[i + 1..].contains(&p), "{word} reuses {p}");
                }
                for pair in path.windows(2) {
                    assert!(pair[0].is_adjacent(pair[1]), "{word} jumps at {}", pair[0]);
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "adjacency size mismatch")]
    fn mismatched_adjacency_is_rejected() {
        let board = Board::parse("c a t s / x x x x / x x x x / x x x x").unwrap();
        let adjacency = AdjacencyGraph::build(BoardSize::new(6).unwrap());
        let dictionary = DictionaryIndex::build(["cats"], 4).unwrap();
        let _ = WordFinder::new(&board, &adjacency, &dictionary);
    }

    #[test]
    fn words_from_single_start() {
        let board = Board::parse("c a t s / x x x x / x x x x / x x x x").unwrap();
        let adjacency = AdjacencyGraph::build(board.board_size());
        let dictionary = DictionaryIndex::build(["cat", "cats", "tac"], 3).unwrap();
        let finder = WordFinder::new(&board, &adjacency, &dictionary);

        assert_eq!(
            sorted(finder.find_words_from(Position::new(0, 0))),
            ["cat", "cats"]
        );
        assert_eq!(
            sorted(finder.find_words_from(Position::new(0, 2))),
            ["tac"]
        );
        assert!(finder.find_words_from(Position::new(3, 3)).is_empty());
    }
}
