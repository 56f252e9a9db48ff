//! Minimax worst-case calculation for Mastermind scores
//!
//! Given a guess and set of candidates, computes the maximum remaining candidates
//! for any possible score.

use crate::core::{Code, Score};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each possible score that could result from this guess:
/// - Count how many candidates would produce that score
/// - Return the maximum count (worst case)
///
/// Counting uses one dense slot per legal score, `(L+1)(L+2)/2` in all.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let guess = Code::from_indices([0, 1, 2, 3]);
/// let candidates = vec![
///     Code::from_indices([0, 1, 2, 3]),
///     Code::from_indices([3, 2, 1, 0]),
/// ];
/// let candidate_refs: Vec<&Code> = candidates.iter().collect();
///
/// assert_eq!(calculate_max_remaining(&guess, &candidate_refs), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[&Code]) -> usize {
    let length = guess.len();
    let mut buckets = vec![0usize; Score::bucket_count(length)];

    for &candidate in candidates {
        buckets[Score::calculate(candidate, guess).bucket(length)] += 1;
    }

    buckets.into_iter().max().unwrap_or(0)
}

/// Group candidates by the score they produce with the guess
///
/// Only scores that occur are present in the map.
#[must_use]
pub fn group_by_score(guess: &Code, candidates: &[&Code]) -> FxHashMap<Score, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let score = Score::calculate(candidate, guess);
        *counts.entry(score).or_insert(0) += 1;
    }

    counts
}
