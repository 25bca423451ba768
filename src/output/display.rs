//! Display functions for command results

use super::formatters::{board_grid, create_progress_bar, word_with_points};
use crate::commands::{BenchmarkResult, GenerateResult, SolveResult};
use crate::core::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::solver::ScoreReport;
use colored::Colorize;
use std::time::Duration;

/// Print the banner shown when play mode starts
pub fn print_welcome(size: usize) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Welcome to the Boggle Game!                 ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("More info about the game: https://en.wikipedia.org/wiki/Boggle");
    println!(
        "Playing on a {size}x{size} board (supported sizes: {MIN_BOARD_SIZE} to {MAX_BOARD_SIZE})."
    );
    println!("Type 'quit' or press Ctrl-D to exit at any time.\n");
}

/// Print a new board with the hidden word count
pub fn print_board_intro(board: &Board, hidden_words: usize) {
    println!("{}", "Your board is ready!".green().bold());
    println!("Try to find all words in the following board.");
    println!("Enter multiple words separated by commas.");
    println!(
        "{} There is/are {} hidden word(s) in this board.\n",
        "HINT:".bright_yellow().bold(),
        hidden_words.to_string().bright_cyan().bold()
    );
    println!("{}\n", board_grid(board).bright_white().bold());
}

/// Print the outcome of one round of play
pub fn print_round_summary(report: &ScoreReport, elapsed: Duration) {
    println!("\n{}", "─".repeat(60).cyan());

    let submitted: Vec<&str> = report
        .accepted
        .iter()
        .chain(&report.rejected)
        .map(String::as_str)
        .collect();
    println!("Your submission: {}", submitted.join(", "));

    if !report.accepted.is_empty() {
        let accepted: Vec<String> = report
            .accepted
            .iter()
            .map(|w| word_with_points(w))
            .collect();
        println!("  {} {}", "✓".green(), accepted.join(", "));
    }
    if !report.rejected.is_empty() {
        println!("  {} {}", "✗".red(), report.rejected.join(", "));
    }

    println!(
        "\n{} {}",
        "YOU SCORED:".bright_cyan().bold(),
        report.score.to_string().bright_yellow().bold()
    );
    if report.missed.is_empty() {
        println!("{}", "You found every word!".green().bold());
    } else {
        println!("You missed these: {}", report.missed.join(", "));
    }
    println!("You took {} sec to solve", elapsed.as_secs());
    println!("{}", "─".repeat(60).cyan());
}

/// Print every word found on a solved board
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("{}", board_grid(&result.board).bright_white().bold());
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words on this board.".red().bold());
        return;
    }

    println!();
    for found in &result.words {
        if verbose {
            let path: Vec<String> = found.path.iter().map(ToString::to_string).collect();
            println!("  {:<28} {}", word_with_points(&found.word), path.join(" → "));
        } else {
            println!("  {}", word_with_points(&found.word));
        }
    }

    println!(
        "\n{}",
        format!(
            "✅ {} words worth {} points",
            result.words.len(),
            result.total_points
        )
        .green()
        .bold()
    );
}

/// Print a generated board
pub fn print_generate_result(result: &GenerateResult) {
    println!("{}", board_grid(&result.board));
    println!(
        "\n{} words, accepted after {} attempt(s)",
        result.word_count.to_string().bright_cyan().bold(),
        result.attempts
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Boards generated: {}", result.total_boards);
    println!("   Total attempts:   {}", result.total_attempts);
    println!(
        "   Attempts/board:   {} to {}",
        format!("{}", result.min_attempts).green(),
        format!("{}", result.max_attempts).yellow()
    );
    println!(
        "   Average words:    {}",
        format!("{:.1}", result.average_words).bright_yellow().bold()
    );
    println!("   Most words:       {}", result.max_words);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Boards/second:    {:.1}", result.boards_per_second);

    if result.total_boards == 0 {
        return;
    }

    println!("\n📈 {}", "Words per board:".bright_cyan().bold());
    let mut buckets: Vec<_> = result.distribution.iter().collect();
    buckets.sort();
    for (&bucket, &count) in buckets {
        let pct = (count as f64 / result.total_boards as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!(
            "   {:>4}-{:<4} {} {count:4} ({pct:5.1}%)",
            bucket * 10,
            bucket * 10 + 9,
            bar.green()
        );
    }
}
