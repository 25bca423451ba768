//! Boggle solving components
//!
//! Adjacency, dictionary indexing, exhaustive search, generation, and scoring,
//! plus the [`Boggle`] session that combines them.

mod adjacency;
mod dictionary;
mod engine;
mod finder;
mod generator;
mod scorer;

pub use adjacency::AdjacencyGraph;
pub use dictionary::DictionaryIndex;
pub use engine::{Boggle, GameConfig};
pub use finder::WordFinder;
pub use generator::{BoardGenerator, DEFAULT_MAX_ATTEMPTS, GeneratedBoard};
pub use scorer::{ScoreReport, report, score, word_points};
