//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::minimax::{calculate_max_remaining, select_next_guess};
use super::{CandidatePool, SolverError};
use crate::core::Code;

/// A strategy for selecting the next guess from a candidate pool
pub trait Strategy {
    /// Select the next guess among the pool's active candidates
    ///
    /// Returns the guess and the worst-case number of candidates that can
    /// remain after playing it.
    ///
    /// # Errors
    /// Returns `SolverError::EmptyPool` if no candidate is active.
    fn select_guess<'a>(&self, pool: &'a CandidatePool) -> Result<(&'a Code, usize), SolverError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Pure minimax optimization (default)
    Minimax(MinimaxStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(&self, pool: &'a CandidatePool) -> Result<(&'a Code, usize), SolverError> {
        match self {
            Self::Minimax(s) => s.select_guess(pool),
            Self::Random(s) => s.select_guess(pool),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "random".
    /// Defaults to minimax if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Minimax(_) => "minimax",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Minimax(MinimaxStrategy)
    }
}

/// Pure minimax strategy
///
/// Always selects the candidate that minimizes worst-case remaining candidates.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(&self, pool: &'a CandidatePool) -> Result<(&'a Code, usize), SolverError> {
        select_next_guess(pool)
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates. A baseline for benchmarks.
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(&self, pool: &'a CandidatePool) -> Result<(&'a Code, usize), SolverError> {
        use rand::prelude::IndexedRandom;

        let candidates = pool.active_codes();
        let &guess = candidates
            .choose(&mut rand::rng())
            .ok_or(SolverError::EmptyPool)?;

        Ok((guess, calculate_max_remaining(guess, &candidates)))
    }
}
