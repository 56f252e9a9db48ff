//! Minimax-based Mastermind solver
//!
//! Implements worst-case minimization strategy for Mastermind solving.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_score};
pub use selector::{select_best_guess, select_next_guess};
