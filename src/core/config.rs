//! Game configuration
//!
//! A [`Configuration`] fixes the universe of legal codes for a game: the
//! alphabet, the code length and whether symbols may repeat. It also carries
//! the round budget and a cap on how many candidate codes a search may hold.
//! Configurations can be written in YAML:
//!
//! ```yaml
//! code_length: 4
//! allow_repetition: true
//! max_rounds: 12
//! alphabet:
//!   - { glyph: R, name: Red }
//!   - { glyph: G, name: Green }
//!   - { glyph: B, name: Blue }
//! ```

use super::Alphabet;
use super::code::MAX_SYMBOLS;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Smallest alphabet that still makes a game
pub const MIN_SYMBOLS: usize = 2;

/// Longest game the round history is sized for
pub const MAX_ROUNDS: usize = 64;

/// Default cap on the enumerated candidate count
pub const DEFAULT_CANDIDATE_BUDGET: usize = 100_000;

/// Configuration loading and validation errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("alphabet must have between {min} and {max} symbols, got {0}", min = MIN_SYMBOLS, max = MAX_SYMBOLS)]
    AlphabetSize(usize),
    #[error("symbol '{0}' must be an uppercase ASCII letter")]
    InvalidGlyph(char),
    #[error("symbol '{0}' appears more than once in the alphabet")]
    DuplicateGlyph(char),
    #[error("code length must be at least 1")]
    EmptyCode,
    #[error("no codes of length {length} exist over {symbols} symbols without repetition")]
    NoCodes { length: usize, symbols: usize },
    #[error("configuration yields more than {budget} candidate codes")]
    TooManyCandidates { budget: usize },
    #[error("round budget must be between 1 and {max}, got {0}", max = MAX_ROUNDS)]
    RoundBudget(usize),
    #[error("unknown preset '{0}' (expected easy, intermediate, hard or expert)")]
    UnknownPreset(String),
}

/// Everything that defines a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Configuration {
    /// Symbols codes are drawn from
    pub alphabet: Alphabet,
    /// Number of symbols in a code
    pub code_length: usize,
    /// Whether a code may contain the same symbol twice
    pub allow_repetition: bool,
    /// Rounds allowed before the game is lost
    pub max_rounds: usize,
    /// Largest candidate pool a search may enumerate
    pub max_candidates: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            code_length: 4,
            allow_repetition: false,
            max_rounds: 10,
            max_candidates: DEFAULT_CANDIDATE_BUDGET,
        }
    }
}

impl Configuration {
    /// Load and validate a configuration from a YAML file
    ///
    /// Missing fields take their default values.
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read, is not valid YAML, or
    /// describes an unplayable game.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Alphabet size
    #[inline]
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.alphabet.len()
    }

    /// Number of legal codes, or `None` on overflow
    ///
    /// - With repetition: `A^L`
    /// - Without: `A·(A-1)·…·(A-L+1)`, zero when `L > A`
    ///
    /// ```
    /// use mastermind_solver::core::Configuration;
    ///
    /// let mut config = Configuration::default();
    /// assert_eq!(config.candidate_count(), Some(360));
    ///
    /// config.allow_repetition = true;
    /// assert_eq!(config.candidate_count(), Some(1296));
    /// ```
    #[must_use]
    pub fn candidate_count(&self) -> Option<usize> {
        let symbols = self.symbol_count();
        let length = self.code_length;

        if self.allow_repetition {
            let exponent = u32::try_from(length).ok()?;
            symbols.checked_pow(exponent)
        } else if length > symbols {
            Some(0)
        } else {
            (symbols - length + 1..=symbols).try_fold(1usize, usize::checked_mul)
        }
    }

    /// Check the configuration describes a playable game within budget
    ///
    /// # Errors
    /// Returns the first problem found, see [`ConfigError`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let symbols = self.symbol_count();
        if !(MIN_SYMBOLS..=MAX_SYMBOLS).contains(&symbols) {
            return Err(ConfigError::AlphabetSize(symbols));
        }
        if let Some(symbol) = self
            .alphabet
            .symbols()
            .iter()
            .find(|s| !s.glyph.is_ascii_uppercase())
        {
            return Err(ConfigError::InvalidGlyph(symbol.glyph));
        }
        if let Some(glyph) = self.alphabet.duplicate_glyph() {
            return Err(ConfigError::DuplicateGlyph(glyph));
        }
        if self.code_length == 0 {
            return Err(ConfigError::EmptyCode);
        }
        if !(1..=MAX_ROUNDS).contains(&self.max_rounds) {
            return Err(ConfigError::RoundBudget(self.max_rounds));
        }

        match self.candidate_count() {
            Some(0) => Err(ConfigError::NoCodes {
                length: self.code_length,
                symbols,
            }),
            Some(count) if count <= self.max_candidates => Ok(()),
            _ => Err(ConfigError::TooManyCandidates {
                budget: self.max_candidates,
            }),
        }
    }
}

/// Difficulty presets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// 3 colours, 20 rounds, repetition allowed
    Easy,
    /// 4 colours, 15 rounds, repetition allowed
    Intermediate,
    /// 5 colours, 10 rounds, no repetition
    Hard,
    /// 6 colours, 5 rounds, no repetition
    Expert,
}

impl Preset {
    pub const ALL: [Self; 4] = [Self::Easy, Self::Intermediate, Self::Hard, Self::Expert];

    /// Look a preset up by name
    ///
    /// # Errors
    /// Returns `ConfigError::UnknownPreset` for anything but
    /// `easy`, `intermediate`, `hard` or `expert`.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "intermediate" => Ok(Self::Intermediate),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            _ => Err(ConfigError::UnknownPreset(name.to_string())),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Intermediate => "intermediate",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }

    /// The configuration this preset stands for
    #[must_use]
    pub fn configuration(self) -> Configuration {
        let (colors, max_rounds, allow_repetition) = match self {
            Self::Easy => (3, 20, true),
            Self::Intermediate => (4, 15, true),
            Self::Hard => (5, 10, false),
            Self::Expert => (6, 5, false),
        };

        Configuration {
            alphabet: Alphabet::palette(colors).unwrap_or_default(),
            max_rounds,
            allow_repetition,
            ..Configuration::default()
        }
    }
}
