//! Core domain types for Boggle
//!
//! Positions, tiles, boards, and the error type. These are plain values with
//! no knowledge of dictionaries or search.

mod alphabet;
mod board;
mod error;
mod position;

pub use alphabet::{Alphabet, DEFAULT_TILES};
pub use board::{Board, BoardSize, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::BoggleError;
pub use position::{Path, Position};
