//! Generate command
//!
//! Produces one solvable board and reports how many words it holds.

use crate::core::{Board, BoggleError};
use crate::solver::{Boggle, DictionaryIndex, GameConfig};
use rand::Rng;

/// A freshly generated board
pub struct GenerateResult {
    pub board: Board,
    pub attempts: usize,
    pub word_count: usize,
}

/// Generate one solvable board
///
/// # Errors
///
/// Returns an error if the configuration is invalid or generation exhausts
/// its attempt budget.
pub fn generate_board<R: Rng + ?Sized>(
    config: &GameConfig,
    dictionary: &DictionaryIndex,
    rng: &mut R,
) -> Result<GenerateResult, BoggleError> {
    let game = Boggle::generate(config, dictionary, rng)?;
    let word_count = game.find_all_words().len();

    Ok(GenerateResult {
        board: game.board().clone(),
        attempts: game.attempts(),
        word_count,
    })
}
