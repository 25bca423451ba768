//! Boggle
//!
//! Generates random letter boards guaranteed to hold at least one word, finds
//! every word on a board by exhaustive path search, and scores guesses.
//!
//! # Quick Start
//!
//! ```rust
//! use boggle::solver::{Boggle, GameConfig};
//! use boggle::wordlists::STARTER;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let config = GameConfig::new(4).unwrap();
//! let dictionary = config.build_dictionary(STARTER).unwrap();
//!
//! let game = Boggle::generate(&config, &dictionary, &mut StdRng::seed_from_u64(1)).unwrap();
//! println!("{game}");
//!
//! let words = game.find_all_words();
//! assert!(!words.is_empty());
//! println!("Score for guessing everything: {}", game.score(&words));
//! ```

// Core domain types
pub mod core;

// Search, generation, and scoring
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
