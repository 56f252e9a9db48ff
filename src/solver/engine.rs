//! Search driver
//!
//! Runs a game round by round: pick a guess, have it scored, shrink the pool.
//!
//! ```text
//! Searching ──(exact == L)─────────▶ Solved
//!   │  ▲
//!   │  └──(filtered, rounds left)
//!   └─────(round budget spent)─────▶ Exhausted
//! ```
//!
//! An empty pool at any point is a contradiction between the observed scores
//! and aborts the game with [`SolverError::Contradiction`].

use super::strategy::Strategy;
use super::{CandidatePool, SolverError};
use crate::core::{Code, Configuration, Score};

/// Where a search stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// Rounds remain and the code is unknown
    Searching,
    /// A guess scored all exact matches
    Solved,
    /// The round budget ran out first
    Exhausted,
}

impl SearchState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Searching)
    }
}

/// Anything that can score a guess against a hidden code
pub trait Oracle {
    fn score(&mut self, guess: &Code) -> Score;
}

/// One played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Largest pool the selector allowed for when it chose this guess
    pub worst_case: usize,
}

/// Search driver for one game
///
/// Owns the candidate pool for the whole game. The configuration is borrowed
/// and cannot change while the search is alive.
pub struct Search<'c, S: Strategy> {
    config: &'c Configuration,
    strategy: S,
    pool: CandidatePool,
    history: Vec<Round>,
    state: SearchState,
}

impl<'c, S: Strategy> Search<'c, S> {
    /// Start a search over every code legal under `config`
    ///
    /// # Errors
    /// Returns `SolverError::InvalidConfiguration` if the configuration is
    /// unplayable or over budget. No round is played in that case.
    pub fn new(strategy: S, config: &'c Configuration) -> Result<Self, SolverError> {
        let pool = CandidatePool::from_config(config)?;
        Ok(Self::with_pool(strategy, config, pool))
    }

    /// Start a search over an existing pool
    ///
    /// The pool must have been enumerated from `config`.
    pub fn with_pool(strategy: S, config: &'c Configuration, pool: CandidatePool) -> Self {
        log::info!(
            "search started: {} candidates, {} rounds allowed",
            pool.remaining(),
            config.max_rounds
        );

        Self {
            config,
            strategy,
            pool,
            history: Vec::new(),
            state: SearchState::Searching,
        }
    }

    #[must_use]
    pub const fn state(&self) -> SearchState {
        self.state
    }

    #[must_use]
    pub const fn config(&self) -> &Configuration {
        self.config
    }

    #[must_use]
    pub const fn pool(&self) -> &CandidatePool {
        &self.pool
    }

    /// Rounds played so far
    #[must_use]
    pub fn history(&self) -> &[Round] {
        &self.history
    }

    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    /// Candidates still consistent with every score
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.pool.remaining()
    }

    /// Choose the guess for the next round
    ///
    /// Returns the guess and the selector's worst-case pool size for it.
    ///
    /// # Errors
    /// Returns `SolverError::Contradiction` if no candidate remains.
    pub fn next_guess(&self) -> Result<(Code, usize), SolverError> {
        match self.strategy.select_guess(&self.pool) {
            Ok((guess, worst_case)) => {
                log::debug!(
                    "round {}: guessing {} (worst case {} of {})",
                    self.history.len() + 1,
                    self.config.alphabet.render(guess),
                    worst_case,
                    self.pool.remaining()
                );
                Ok((guess.clone(), worst_case))
            }
            Err(SolverError::EmptyPool) => Err(self.contradiction()),
            Err(err) => Err(err),
        }
    }

    /// Record the score a guess received and advance the state machine
    ///
    /// A solving score ends the search without filtering. Otherwise the pool
    /// is filtered and, if the round budget is spent, the search is exhausted.
    /// The round is kept in the history even when it leads to a
    /// contradiction, so it can be [undone](Self::undo).
    ///
    /// Once the search is solved or exhausted nothing more is recorded and
    /// the terminal state is returned as is.
    ///
    /// # Errors
    /// - `SolverError::LengthMismatch` if `guess` is not a code of this game's length
    /// - `SolverError::ImpossibleScore` if no two codes could score `score`
    /// - `SolverError::Contradiction` if no candidate survives the filter
    pub fn record(
        &mut self,
        guess: Code,
        score: Score,
        worst_case: usize,
    ) -> Result<SearchState, SolverError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let length = self.config.code_length;
        if guess.len() != length {
            return Err(SolverError::LengthMismatch {
                expected: length,
                got: guess.len(),
            });
        }
        if !score.fits(length) {
            return Err(SolverError::ImpossibleScore { score, length });
        }

        let candidates_before = self.pool.remaining();
        let solved = score.is_solved(length);
        let candidates_after = if solved {
            1
        } else {
            self.pool.filter(&guess, score)
        };

        self.history.push(Round {
            guess,
            score,
            candidates_before,
            candidates_after,
            worst_case,
        });

        if candidates_after == 0 {
            return Err(self.contradiction());
        }

        self.state = if solved {
            SearchState::Solved
        } else if self.history.len() >= self.config.max_rounds {
            SearchState::Exhausted
        } else {
            SearchState::Searching
        };

        log::debug!(
            "round {}: {} -> {} candidates, {:?}",
            self.history.len(),
            candidates_before,
            candidates_after,
            self.state
        );

        Ok(self.state)
    }

    /// Play one round against `oracle`
    ///
    /// Does nothing once the search has reached a terminal state.
    ///
    /// # Errors
    /// Returns `SolverError::Contradiction` if the oracle's scores are
    /// inconsistent with every code.
    pub fn step(&mut self, oracle: &mut impl Oracle) -> Result<SearchState, SolverError> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let (guess, worst_case) = self.next_guess()?;
        let score = oracle.score(&guess);
        self.record(guess, score, worst_case)
    }

    /// Play rounds against `oracle` until solved or out of rounds
    ///
    /// # Errors
    /// Returns `SolverError::Contradiction` if the oracle's scores are
    /// inconsistent with every code.
    pub fn run(&mut self, oracle: &mut impl Oracle) -> Result<SearchState, SolverError> {
        while !self.state.is_terminal() {
            self.step(oracle)?;
        }

        log::info!(
            "search finished: {:?} after {} rounds",
            self.state,
            self.history.len()
        );
        Ok(self.state)
    }

    /// Take back the last round
    ///
    /// The pool is rebuilt from scratch by replaying the remaining history.
    /// Returns the removed round, or `None` if nothing was played.
    pub fn undo(&mut self) -> Option<Round> {
        let undone = self.history.pop()?;

        self.pool.reset();
        for round in &self.history {
            self.pool.filter(&round.guess, round.score);
        }
        self.state = SearchState::Searching;

        Some(undone)
    }

    /// Forget every round and start over with the full pool
    pub fn restart(&mut self) {
        self.history.clear();
        self.pool.reset();
        self.state = SearchState::Searching;
    }

    fn contradiction(&self) -> SolverError {
        let round = self.history.len();
        log::warn!("contradiction after {round} rounds: no candidate remains");
        SolverError::Contradiction { round }
    }
}
