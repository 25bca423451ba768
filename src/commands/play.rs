//! Interactive play mode
//!
//! Generates a board, reads the player's guesses, scores them, and repeats
//! until the player quits or input ends.

use crate::output::{print_board_intro, print_round_summary, print_welcome};
use crate::solver::{Boggle, DictionaryIndex, GameConfig, report};
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Totals over a play session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaySummary {
    pub rounds: usize,
    pub total_score: u32,
}

/// Run the interactive game loop, reading guesses from `input`
///
/// Each line is one round's submission: comma-separated words. An empty
/// input stream or `quit` ends the session.
///
/// # Errors
///
/// Returns an error if a board cannot be generated or input cannot be read.
pub fn run_play<R, G>(
    config: &GameConfig,
    dictionary: &DictionaryIndex,
    rng: &mut G,
    input: &mut R,
) -> Result<PlaySummary>
where
    R: BufRead,
    G: Rng + ?Sized,
{
    print_welcome(config.size.get());

    let mut summary = PlaySummary::default();

    loop {
        println!("Please wait while the board is initializing...");
        let game = Boggle::generate(config, dictionary, rng)
            .context("failed to generate a solvable board")?;
        let words = game.find_all_words();

        print_board_intro(game.board(), words.len());

        let start = Instant::now();
        let Some(line) = read_submission(input)? else {
            break;
        };
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            break;
        }
        let elapsed = start.elapsed();

        let guesses = line.split(',').map(str::trim).filter(|g| !g.is_empty());
        let round = report(guesses, &words);
        print_round_summary(&round, elapsed);

        summary.rounds += 1;
        summary.total_score += round.score;
        println!("Let's do better this time..\n");
    }

    println!("\n👋 Thanks for playing today! Have a great day\n");
    Ok(summary)
}

/// Read one line of guesses; `None` at end of input
fn read_submission<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    print!("> ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read guesses")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn setup() -> (GameConfig, DictionaryIndex) {
        let config = GameConfig::new(4)
            .unwrap()
            .with_alphabet(Alphabet::parse("a,e,r,s,t").unwrap());
        let dictionary = config
            .build_dictionary(["star", "rats", "arts", "tsar", "tears", "rates", "stare"])
            .unwrap();
        (config, dictionary)
    }

    #[test]
    fn quits_on_end_of_input() {
        let (config, dictionary) = setup();
        let mut rng = StdRng::seed_from_u64(1);
        let mut input = Cursor::new("");

        let summary = run_play(&config, &dictionary, &mut rng, &mut input).unwrap();
        assert_eq!(summary, PlaySummary::default());
    }

    #[test]
    fn plays_rounds_until_quit() {
        let (config, dictionary) = setup();
        let mut rng = StdRng::seed_from_u64(1);
        let mut input = Cursor::new("zzzz, qqqq\n\nquit\nstar\n");

        let summary = run_play(&config, &dictionary, &mut rng, &mut input).unwrap();
        assert_eq!(summary.rounds, 2);
        assert_eq!(summary.total_score, 0);
    }

    #[test]
    fn scores_match_generated_board() {
        let (config, dictionary) = setup();

        // Replay the same seed to learn which words the first board holds
        let mut probe_rng = StdRng::seed_from_u64(5);
        let game = Boggle::generate(&config, &dictionary, &mut probe_rng).unwrap();
        let mut words: Vec<String> = game.find_all_words().into_iter().collect();
        words.sort();
        let expected = game.score(&words);

        let mut rng = StdRng::seed_from_u64(5);
        let mut input = Cursor::new(format!("{}\n", words.join(", ")));
        let summary = run_play(&config, &dictionary, &mut rng, &mut input).unwrap();

        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.total_score, expected);
        assert!(expected > 0);
    }
}
