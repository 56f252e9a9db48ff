//! Minimax-based guess selection strategy
//!
//! Always selects the guess that minimizes the worst-case remaining candidates.
//!
//! Every active candidate is scored against every other one, so a round
//! costs `O(n²)` score calculations for a pool of `n`. This is the dominant
//! cost of the whole engine; it is fine for pools in the low thousands.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use crate::solver::{CandidatePool, SolverError};
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the code with the lowest maximum remaining candidates and that
/// value, or `None` if the guess pool is empty. Ties go to the guess that
/// comes first in `guess_pool`.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Code;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let guesses = vec![
///     Code::from_indices([5, 5, 5, 5]),
///     Code::from_indices([0, 1, 2, 3]),
/// ];
/// let candidates = vec![
///     Code::from_indices([0, 1, 2, 3]),
///     Code::from_indices([3, 2, 1, 0]),
/// ];
///
/// let guess_refs: Vec<&Code> = guesses.iter().collect();
/// let candidate_refs: Vec<&Code> = candidates.iter().collect();
///
/// let (best, max_remaining) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
/// assert_eq!(best, &guesses[1]);
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Code],
    candidates: &[&Code],
) -> Option<(&'a Code, usize)> {
    // `min_by_key` on an indexed parallel iterator yields the first minimum,
    // keeping tie-breaks identical to a sequential scan.
    guess_pool
        .par_iter()
        .map(|&guess| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            (guess, max_remaining)
        })
        .min_by_key(|(_, max)| *max)
}

/// Choose the next guess from the active candidates of a pool
///
/// Only candidates are considered as guesses, so every guess can win.
///
/// # Errors
/// Returns `SolverError::EmptyPool` if no candidate is active.
pub fn select_next_guess(pool: &CandidatePool) -> Result<(&Code, usize), SolverError> {
    let candidates = pool.active_codes();
    select_best_guess(&candidates, &candidates).ok_or(SolverError::EmptyPool)
}
