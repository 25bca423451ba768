//! Solve command
//!
//! Lists every word on a board supplied by the user.

use crate::core::{Board, BoggleError, Path};
use crate::solver::{Boggle, DictionaryIndex, word_points};
use log::debug;

/// A word found on the board
pub struct FoundWord {
    pub word: String,
    pub points: u32,
    pub path: Path,
}

/// Result of solving a board
pub struct SolveResult {
    pub board: Board,
    /// Highest scoring first, then alphabetical
    pub words: Vec<FoundWord>,
    pub total_points: u32,
}

/// Parse `board_text` and find every word on it
///
/// The dictionary is indexed after parsing so the word length floor follows
/// the pasted board's size unless `min_word_length` overrides it.
///
/// # Errors
///
/// Returns an error if the board text is malformed, its size is unsupported,
/// or no raw word reaches the length floor.
pub fn solve_board<S: AsRef<str>>(
    board_text: &str,
    raw_words: &[S],
    min_word_length: Option<usize>,
) -> Result<SolveResult, BoggleError> {
    let board = Board::parse(board_text)?;
    let floor = min_word_length.unwrap_or(board.size());
    debug!("solving {n}x{n} board with word floor {floor}", n = board.size());

    let dictionary = DictionaryIndex::build(raw_words, floor)?;
    let game = Boggle::with_board(board, &dictionary);

    let mut words: Vec<FoundWord> = game
        .find_all_paths()
        .into_iter()
        .map(|(word, path)| FoundWord {
            points: word_points(&word),
            word,
            path,
        })
        .collect();
    words.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.word.cmp(&b.word)));

    let total_points = words.iter().map(|w| w.points).sum();

    Ok(SolveResult {
        board: game.board().clone(),
        words,
        total_points,
    })
}
