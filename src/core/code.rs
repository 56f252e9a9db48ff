//! Mastermind code representation
//!
//! A code is a fixed-length sequence of symbol indices into an [`Alphabet`].
//! Codes know nothing about glyphs; rendering goes through the alphabet.
//!
//! [`Alphabet`]: super::Alphabet

use super::Configuration;
use thiserror::Error;

/// Upper bound on alphabet size (one symbol per ASCII letter)
pub const MAX_SYMBOLS: usize = 26;

/// An ordered sequence of symbol indices
///
/// Ordering is lexicographic over the indices, which is also the order
/// [`enumerate`](crate::solver::enumerate) produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    symbols: Box<[u8]>,
}

/// Error type for codes typed by a player
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("Code must have exactly {expected} symbols, got {got}")]
    InvalidLength { expected: usize, got: usize },
    #[error("'{0}' is not a symbol of this game")]
    UnknownSymbol(char),
    #[error("'{0}' is repeated but repetition is disabled")]
    RepeatedSymbol(char),
}

impl Code {
    /// Build a code directly from symbol indices
    ///
    /// # Panics
    /// Panics if an index is `>= MAX_SYMBOLS`
    #[must_use]
    pub fn from_indices(indices: impl IntoIterator<Item = u8>) -> Self {
        let symbols: Box<[u8]> = indices.into_iter().collect();
        assert!(
            symbols.iter().all(|&s| (s as usize) < MAX_SYMBOLS),
            "symbol index out of range"
        );
        Self { symbols }
    }

    /// Parse a code typed by a player
    ///
    /// Letters are matched case-insensitively against the configured
    /// alphabet; spaces, commas and other separators are ignored.
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - A letter is not in the alphabet
    /// - The number of letters differs from the code length
    /// - A symbol repeats while repetition is disabled
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Configuration};
    ///
    /// let config = Configuration::default();
    /// let code = Code::parse("r g b y", &config).unwrap();
    /// assert_eq!(code.symbols(), &[0, 1, 2, 3]);
    ///
    /// assert!(Code::parse("RGB", &config).is_err());
    /// assert!(Code::parse("RRGB", &config).is_err());
    /// ```
    pub fn parse(text: &str, config: &Configuration) -> Result<Self, CodeError> {
        let mut symbols = Vec::with_capacity(config.code_length);

        for ch in text.chars().filter(char::is_ascii_alphabetic) {
            let ch = ch.to_ascii_uppercase();
            let index = config
                .alphabet
                .index_of(ch)
                .ok_or(CodeError::UnknownSymbol(ch))?;
            symbols.push(index);
        }

        if symbols.len() != config.code_length {
            return Err(CodeError::InvalidLength {
                expected: config.code_length,
                got: symbols.len(),
            });
        }

        let code = Self::from_indices(symbols);
        if !config.allow_repetition
            && let Some(index) = code.first_repeat()
        {
            let glyph = config.alphabet.glyph(index).unwrap_or('?');
            return Err(CodeError::RepeatedSymbol(glyph));
        }

        Ok(code)
    }

    /// Get the symbol indices
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Code length
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether any symbol appears more than once
    #[must_use]
    pub fn has_repetition(&self) -> bool {
        self.first_repeat().is_some()
    }

    /// Check the code is legal under `config`
    #[must_use]
    pub fn fits(&self, config: &Configuration) -> bool {
        self.len() == config.code_length
            && self
                .symbols
                .iter()
                .all(|&s| (s as usize) < config.alphabet.len())
            && (config.allow_repetition || !self.has_repetition())
    }

    /// First symbol that occurs a second time, scanning left to right
    fn first_repeat(&self) -> Option<u8> {
        let mut seen = [false; MAX_SYMBOLS];
        self.symbols.iter().copied().find(|&s| {
            let repeated = seen[s as usize];
            seen[s as usize] = true;
            repeated
        })
    }
}
