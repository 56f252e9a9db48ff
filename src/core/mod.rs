//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types: codes, scores, the
//! alphabet they are drawn from, and the configuration that fixes them.
//! Everything here is pure and deterministic.

mod alphabet;
pub(crate) mod code;
mod config;
mod score;

pub use alphabet::{Alphabet, PALETTE, Symbol};
pub use code::{Code, CodeError, MAX_SYMBOLS};
pub use config::{
    ConfigError, Configuration, DEFAULT_CANDIDATE_BUDGET, MAX_ROUNDS, MIN_SYMBOLS, Preset,
};
pub use score::Score;
