//! Mastermind Solver
//!
//! An automated Mastermind codebreaker. Each round it plays the candidate
//! code whose worst-case answer leaves the fewest candidates (minimax), so
//! the number of rounds is bounded even against an adversarial secret.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Code, Configuration};
//! use mastermind_solver::game::Secret;
//! use mastermind_solver::solver::{MinimaxStrategy, Search, SearchState};
//!
//! let config = Configuration::default();
//! let mut secret = Secret::new(Code::parse("BYOR", &config).unwrap());
//!
//! let mut search = Search::new(MinimaxStrategy, &config).unwrap();
//! assert_eq!(search.run(&mut secret).unwrap(), SearchState::Solved);
//! assert!(search.rounds_played() <= 6);
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Game setup and front-end operations
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
