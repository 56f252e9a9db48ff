//! Solver error taxonomy

use crate::core::{ConfigError, Score};
use thiserror::Error;

/// Ways a search can fail
///
/// Running out of rounds is not an error; it is the
/// [`SearchState::Exhausted`](super::SearchState::Exhausted) outcome.
#[derive(Error, Debug)]
pub enum SolverError {
    /// The configuration has no enumerable codes or breaks a resource budget.
    /// Raised before any round is played.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// Guess selection was asked to choose from an empty pool
    #[error("no candidate codes remain")]
    EmptyPool,

    /// The observed scores are mutually inconsistent; the game cannot continue
    #[error("contradiction in round {round}: no code is consistent with every score so far")]
    Contradiction { round: usize },

    /// A guess whose length differs from the configured code length
    #[error("guess has {got} symbols but codes have {expected}")]
    LengthMismatch { expected: usize, got: usize },

    /// A score that no pair of codes of this length can produce
    #[error("score ({score}) is impossible for codes of length {length}")]
    ImpossibleScore { score: Score, length: usize },
}
