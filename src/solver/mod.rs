//! Mastermind solving algorithms
//!
//! Enumeration, filtering and guess selection, plus the driver that ties
//! them into a game.

mod engine;
mod enumerate;
mod error;
pub mod minimax;
mod pool;
pub mod strategy;

pub use engine::{Oracle, Round, Search, SearchState};
pub use enumerate::{all_codes, enumerate};
pub use error::SolverError;
pub use pool::CandidatePool;
pub use strategy::{MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
