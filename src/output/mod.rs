//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_board_intro, print_generate_result, print_round_summary,
    print_solve_result, print_welcome,
};
