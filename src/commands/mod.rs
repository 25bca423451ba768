//! Command implementations

pub mod benchmark;
pub mod generate;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use generate::{GenerateResult, generate_board};
pub use play::{PlaySummary, run_play};
pub use solve::{FoundWord, SolveResult, solve_board};
