//! Candidate enumeration
//!
//! Produces every legal code for a configuration in lexicographic order of
//! symbol indices. Guess selection breaks ties by this order, so it must
//! never change.

use super::SolverError;
use crate::core::{Code, Configuration, MAX_SYMBOLS};

/// Enumerate every code legal under `config`
///
/// The configuration is validated first, so a game whose alphabet, length
/// and repetition flag admit no codes (or more codes than
/// `config.max_candidates`) is rejected before anything is allocated.
///
/// # Errors
/// Returns `SolverError::InvalidConfiguration` if `config` fails validation.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Configuration;
/// use mastermind_solver::solver::enumerate;
///
/// let codes = enumerate(&Configuration::default()).unwrap();
/// assert_eq!(codes.len(), 360);
/// assert_eq!(codes[0].symbols(), &[0, 1, 2, 3]);
/// ```
pub fn enumerate(config: &Configuration) -> Result<Vec<Code>, SolverError> {
    config.validate()?;
    Ok(all_codes(
        config.symbol_count(),
        config.code_length,
        config.allow_repetition,
    ))
}

/// Generate all codes of `length` over `symbols` symbols
///
/// With repetition this is the `symbols^length` Cartesian power; without,
/// the `length`-permutations of the alphabet. No size check is made: the
/// caller must bound `symbols` and `length` so the result fits in memory
/// (see [`Configuration::validate`]).
///
/// # Panics
/// Panics in debug mode if `symbols > MAX_SYMBOLS`
#[must_use]
pub fn all_codes(symbols: usize, length: usize, allow_repetition: bool) -> Vec<Code> {
    debug_assert!(symbols <= MAX_SYMBOLS, "alphabet too large");

    let mut walk = Walk {
        symbols: symbols as u8,
        length,
        allow_repetition,
        prefix: Vec::with_capacity(length),
        used: [false; MAX_SYMBOLS],
        out: Vec::new(),
    };
    walk.extend();
    walk.out
}

/// Depth-first walk over legal prefixes
struct Walk {
    symbols: u8,
    length: usize,
    allow_repetition: bool,
    prefix: Vec<u8>,
    used: [bool; MAX_SYMBOLS],
    out: Vec<Code>,
}

impl Walk {
    fn extend(&mut self) {
        if self.prefix.len() == self.length {
            self.out.push(Code::from_indices(self.prefix.iter().copied()));
            return;
        }

        for symbol in 0..self.symbols {
            let slot = symbol as usize;
            if !self.allow_repetition && self.used[slot] {
                continue;
            }

            self.used[slot] = true;
            self.prefix.push(symbol);
            self.extend();
            self.prefix.pop();
            self.used[slot] = false;
        }
    }
}
