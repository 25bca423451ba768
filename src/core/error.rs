//! Error type shared by every stage of board construction

use std::fmt;

/// Errors raised while configuring, indexing, or generating a board
///
/// Searching and scoring are total over well-formed inputs and never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoggleError {
    /// A configuration value is outside its supported range or malformed
    InvalidConfiguration(String),
    /// The raw word list could not be read or had no usable entries
    DictionaryUnavailable(String),
    /// Every draft within the attempt budget produced an empty board
    GenerationExhausted { attempts: usize },
}

impl fmt::Display for BoggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(reason) => {
                write!(f, "Invalid configuration: {reason}")
            }
            Self::DictionaryUnavailable(reason) => {
                write!(f, "Dictionary unavailable: {reason}")
            }
            Self::GenerationExhausted { attempts } => {
                write!(f, "No solvable board found after {attempts} attempts")
            }
        }
    }
}

impl std::error::Error for BoggleError {}
