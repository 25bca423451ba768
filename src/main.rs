//! Boggle - CLI
//!
//! Play Boggle in the terminal, solve a given board, or benchmark generation.

use anyhow::{Context, Result};
use boggle::{
    commands::{generate_board, run_benchmark, run_play, solve_board},
    core::Alphabet,
    output::{print_benchmark_result, print_generate_result, print_solve_result},
    solver::{DEFAULT_MAX_ATTEMPTS, DictionaryIndex, GameConfig},
    wordlists::{
        STARTER,
        loader::{load_from_file, words_from_slice},
    },
};
use clap::{Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "boggle",
    about = "Boggle board generator, exhaustive word finder, and scorer",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board side length (4 to 16)
    #[arg(short, long, global = true, default_value = "4")]
    size: usize,

    /// Dictionary file with one word per line (default: embedded starter list)
    #[arg(short, long, global = true)]
    dictionary: Option<String>,

    /// Seed for reproducible boards
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Drafts allowed before board generation gives up
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Shortest word to count (default: the board size)
    #[arg(long, global = true)]
    min_word_length: Option<usize>,

    /// Comma-separated tiles to draw from (default: a-z with "qu" for "q")
    #[arg(long, global = true)]
    alphabet: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game (default)
    Play,

    /// Find every word on a given board
    Solve {
        /// Rows separated by '/', tiles by spaces: "c a t s / x x x x / ..."
        board: String,

        /// Show the path traced for each word
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate one solvable board
    Generate,

    /// Generate many boards and report timing
    Benchmark {
        /// Number of boards to generate
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Build the game configuration from global flags
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::new(cli.size)?
        .with_max_attempts(cli.max_attempts)
        .with_min_word_length(cli.min_word_length);

    if let Some(list) = &cli.alphabet {
        config = config.with_alphabet(Alphabet::parse(list)?);
    }

    Ok(config)
}

/// Load the raw word list based on the -d flag
fn load_words(cli: &Cli) -> Result<Vec<String>> {
    match &cli.dictionary {
        Some(path) => Ok(load_from_file(path)?),
        None => Ok(words_from_slice(STARTER)),
    }
}

/// Index the raw words for boards of the configured size
fn load_dictionary(cli: &Cli, config: &GameConfig, words: &[String]) -> Result<DictionaryIndex> {
    let dictionary = config.build_dictionary(words).with_context(|| {
        format!(
            "no usable words in {}",
            cli.dictionary.as_deref().unwrap_or("the starter list")
        )
    })?;
    debug!("dictionary holds {} words", dictionary.len());
    Ok(dictionary)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let mut cli = Cli::parse();

    let config = load_config(&cli)?;
    let words = load_words(&cli)?;
    let mut rng = make_rng(cli.seed);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let dictionary = load_dictionary(&cli, &config, &words)?;
            let stdin = io::stdin();
            let summary = run_play(&config, &dictionary, &mut rng, &mut stdin.lock())?;
            debug!(
                "played {} round(s), {} points",
                summary.rounds, summary.total_score
            );
        }
        Commands::Solve { board, verbose } => {
            // Word floor follows the pasted board, not --size
            let result = solve_board(&board, &words, cli.min_word_length)?;
            print_solve_result(&result, verbose);
        }
        Commands::Generate => {
            let dictionary = load_dictionary(&cli, &config, &words)?;
            let result = generate_board(&config, &dictionary, &mut rng)?;
            print_generate_result(&result);
        }
        Commands::Benchmark { count } => {
            let dictionary = load_dictionary(&cli, &config, &words)?;
            println!("Generating {count} boards...");
            let result = run_benchmark(&config, &dictionary, count, &mut rng)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
