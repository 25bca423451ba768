//! Benchmark command
//!
//! Generates many boards and measures generation and search cost.

use crate::core::BoggleError;
use crate::solver::{Boggle, DictionaryIndex, GameConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_boards: usize,
    pub total_attempts: usize,
    pub min_attempts: usize,
    pub max_attempts: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub max_words: usize,
    /// Boards bucketed by word count, in buckets of ten
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub boards_per_second: f64,
}

/// Generate and solve `count` boards
///
/// # Errors
///
/// Returns an error if any board exhausts its attempt budget.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_benchmark<R: Rng + ?Sized>(
    config: &GameConfig,
    dictionary: &DictionaryIndex,
    count: usize,
    rng: &mut R,
) -> Result<BenchmarkResult, BoggleError> {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut total_attempts = 0;
    let mut min_attempts = usize::MAX;
    let mut max_attempts = 0;
    let mut total_words = 0;
    let mut max_words = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for _ in 0..count {
        let game = match Boggle::generate(config, dictionary, rng) {
            Ok(game) => game,
            Err(e) => {
                pb.abandon_with_message("generation failed");
                return Err(e);
            }
        };
        let words = game.find_all_words().len();

        total_attempts += game.attempts();
        min_attempts = min_attempts.min(game.attempts());
        max_attempts = max_attempts.max(game.attempts());
        total_words += words;
        max_words = max_words.max(words);
        *distribution.entry(words / 10).or_insert(0) += 1;

        pb.set_message(format!("{words} words"));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_boards: count,
        total_attempts,
        min_attempts: if count == 0 { 0 } else { min_attempts },
        max_attempts,
        total_words,
        average_words: if count == 0 {
            0.0
        } else {
            total_words as f64 / count as f64
        },
        max_words,
        distribution,
        duration,
        boards_per_second: count as f64 / duration.as_secs_f64(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

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
    fn benchmark_runs() {
        let (config, dictionary) = setup();
        let mut rng = StdRng::seed_from_u64(10);
        let result = run_benchmark(&config, &dictionary, 5, &mut rng).unwrap();

        assert_eq!(result.total_boards, 5);
        assert!(result.total_attempts >= 5);
        assert!(result.min_attempts >= 1);
        assert!(result.min_attempts <= result.max_attempts);
        assert!(result.average_words >= 1.0);
    }

    #[test]
    fn distribution_sums_to_board_count() {
        let (config, dictionary) = setup();
        let mut rng = StdRng::seed_from_u64(4);
        let result = run_benchmark(&config, &dictionary, 8, &mut rng).unwrap();

        let sum: usize = result.distribution.values().sum();
        assert_eq!(sum, result.total_boards);
    }

    #[test]
    fn zero_boards() {
        let (config, dictionary) = setup();
        let mut rng = StdRng::seed_from_u64(0);
        let result = run_benchmark(&config, &dictionary, 0, &mut rng).unwrap();

        assert_eq!(result.total_boards, 0);
        assert_eq!(result.min_attempts, 0);
        assert_eq!(result.total_words, 0);
    }

    #[test]
    fn exhaustion_propagates() {
        let config = GameConfig::new(4)
            .unwrap()
            .with_alphabet(Alphabet::parse("x").unwrap())
            .with_max_attempts(2);
        let dictionary = config.build_dictionary(["star"]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let result = run_benchmark(&config, &dictionary, 3, &mut rng);
        assert!(matches!(
            result,
            Err(BoggleError::GenerationExhausted { attempts: 2 })
        ));
    }
}
