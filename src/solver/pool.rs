//! Candidate pool and consistency filter
//!
//! The pool keeps every enumerated code in its original order and marks
//! codes inactive as scores rule them out. Codes are never moved, so the
//! surviving candidates are always visited in enumeration order.

use super::{SolverError, enumerate};
use crate::core::{Code, Configuration, Score};

/// Codes still consistent with every score observed in a game
#[derive(Debug, Clone)]
pub struct CandidatePool {
    codes: Vec<Code>,
    active: Vec<bool>,
    remaining: usize,
}

impl CandidatePool {
    /// Create a pool with every code active
    #[must_use]
    pub fn new(codes: Vec<Code>) -> Self {
        let remaining = codes.len();
        Self {
            active: vec![true; remaining],
            codes,
            remaining,
        }
    }

    /// Create the full pool for a configuration
    ///
    /// # Errors
    /// Returns `SolverError::InvalidConfiguration` if the configuration is
    /// unplayable or over budget.
    pub fn from_config(config: &Configuration) -> Result<Self, SolverError> {
        enumerate(config).map(Self::new)
    }

    /// Number of active candidates
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.remaining
    }

    /// Number of codes the pool started with
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.codes.len()
    }

    /// Length of the codes in the pool, `None` if it holds no codes
    #[must_use]
    pub fn code_length(&self) -> Option<usize> {
        self.codes.first().map(Code::len)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Iterate over active candidates in enumeration order
    pub fn active(&self) -> impl Iterator<Item = &Code> + '_ {
        self.codes
            .iter()
            .zip(&self.active)
            .filter_map(|(code, &active)| active.then_some(code))
    }

    /// Collect references to the active candidates, in enumeration order
    #[must_use]
    pub fn active_codes(&self) -> Vec<&Code> {
        self.active().collect()
    }

    /// First active candidate in enumeration order
    #[must_use]
    pub fn first(&self) -> Option<&Code> {
        self.active().next()
    }

    /// Check whether `code` is still an active candidate
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.active().any(|c| c == code)
    }

    /// Deactivate every candidate that would not score `observed` against `guess`
    ///
    /// Returns the number of candidates left. Filtering twice with the same
    /// `(guess, observed)` changes nothing the second time.
    ///
    /// `guess` must have the pool's [code length](Self::code_length).
    pub fn filter(&mut self, guess: &Code, observed: Score) -> usize {
        for (code, active) in self.codes.iter().zip(self.active.iter_mut()) {
            if *active && Score::calculate(code, guess) != observed {
                *active = false;
                self.remaining -= 1;
            }
        }
        self.remaining
    }

    /// Reactivate every code
    pub fn reset(&mut self) {
        self.active.fill(true);
        self.remaining = self.codes.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_pool() -> CandidatePool {
        CandidatePool::from_config(&Configuration::default()).unwrap()
    }

    #[test]
    fn new_pool_is_fully_active() {
        let pool = full_pool();
        assert_eq!(pool.remaining(), 360);
        assert_eq!(pool.total(), 360);
        assert_eq!(pool.active().count(), 360);
        assert_eq!(pool.first(), Some(&Code::from_indices([0, 1, 2, 3])));
    }

    #[test]
    fn filter_keeps_only_consistent_codes() {
        let mut pool = full_pool();
        let secret = Code::from_indices([0, 1, 2, 3]);
        let guess = Code::from_indices([1, 0, 2, 3]);
        let observed = Score::calculate(&guess, &secret);

        let remaining = pool.filter(&guess, observed);

        assert_eq!(remaining, pool.active().count());
        assert!(pool.contains(&secret));
        assert!(
            pool.active()
                .all(|code| Score::calculate(code, &guess) == observed)
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let mut pool = full_pool();
        let guess = Code::from_indices([0, 1, 2, 3]);
        let observed = Score::new(1, 1);

        let first = pool.filter(&guess, observed);
        let snapshot = pool.active_codes().into_iter().cloned().collect::<Vec<_>>();
        let second = pool.filter(&guess, observed);

        assert_eq!(first, second);
        assert_eq!(pool.active().cloned().collect::<Vec<_>>(), snapshot);
    }

    #[test]
    fn filter_is_monotonic() {
        let mut pool = full_pool();
        let secret = Code::from_indices([3, 5, 0, 4]);
        let mut previous = pool.remaining();

        for guess in [[0, 1, 2, 3], [4, 5, 0, 1], [3, 5, 1, 0]] {
            let guess = Code::from_indices(guess);
            let remaining = pool.filter(&guess, Score::calculate(&guess, &secret));
            assert!(remaining <= previous);
            assert!(pool.contains(&secret));
            previous = remaining;
        }
    }

    #[test]
    fn filter_preserves_enumeration_order() {
        let mut pool = full_pool();
        pool.filter(&Code::from_indices([0, 1, 2, 3]), Score::new(0, 2));
        let active = pool.active_codes();
        assert!(active.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn inconsistent_scores_empty_the_pool() {
        let mut pool = full_pool();
        let guess = Code::from_indices([0, 1, 2, 3]);

        pool.filter(&guess, Score::new(4, 0));
        assert_eq!(pool.remaining(), 1);

        assert_eq!(pool.filter(&guess, Score::new(0, 0)), 0);
        assert!(pool.is_empty());
        assert_eq!(pool.first(), None);
    }

    #[test]
    fn reset_restores_everything() {
        let mut pool = full_pool();
        pool.filter(&Code::from_indices([0, 1, 2, 3]), Score::new(0, 0));
        assert!(pool.remaining() < 360);

        pool.reset();
        assert_eq!(pool.remaining(), 360);
        assert_eq!(pool.active().count(), 360);
    }
}
