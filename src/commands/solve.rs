//! Code solving command
//!
//! Solves a specific secret and returns the solution path.

use crate::core::{Code, Configuration};
use crate::game::Secret;
use crate::solver::{Round, Search, SearchState, Strategy};
use anyhow::{Context, Result};

/// Result of solving a secret
#[derive(Debug)]
pub struct SolveResult {
    pub secret: Code,
    pub state: SearchState,
    pub rounds: Vec<Round>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.state == SearchState::Solved
    }
}

/// Solve the secret written as `secret` using the given strategy
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not parse under `config`
/// - The configuration is invalid or over budget
pub fn solve_code<S: Strategy>(
    strategy: S,
    config: &Configuration,
    secret: &str,
) -> Result<SolveResult> {
    let code = Code::parse(secret, config).with_context(|| format!("Invalid secret '{secret}'"))?;

    let mut search = Search::new(strategy, config)?;
    let state = search.run(&mut Secret::new(code.clone()))?;

    Ok(SolveResult {
        secret: code,
        state,
        rounds: search.history().to_vec(),
    })
}
