//! Game alphabet (the colour palette)

use super::Code;
use serde::{Deserialize, Serialize};

/// Default palette, in enumeration order
pub const PALETTE: [(char, &str); 6] = [
    ('R', "Red"),
    ('G', "Green"),
    ('B', "Blue"),
    ('Y', "Yellow"),
    ('O', "Orange"),
    ('P', "Purple"),
];

/// One symbol of the alphabet: the letter players type and a display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub glyph: char,
    pub name: String,
}

impl Symbol {
    #[must_use]
    pub fn new(glyph: char, name: impl Into<String>) -> Self {
        Self {
            glyph,
            name: name.into(),
        }
    }
}

/// Ordered set of symbols a code is drawn from
///
/// A symbol's index in the alphabet is the value stored in a [`Code`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alphabet {
    symbols: Vec<Symbol>,
}

impl Alphabet {
    /// Build an alphabet from explicit symbols
    ///
    /// Glyph validity and uniqueness are checked by
    /// [`Configuration::validate`](super::Configuration::validate).
    #[must_use]
    pub const fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// The first `size` colours of the default palette
    ///
    /// Returns `None` if `size` exceeds the palette.
    ///
    /// ```
    /// use mastermind_solver::core::Alphabet;
    ///
    /// let alphabet = Alphabet::palette(4).unwrap();
    /// assert_eq!(alphabet.glyphs(), "RGBY");
    /// assert!(Alphabet::palette(7).is_none());
    /// ```
    #[must_use]
    pub fn palette(size: usize) -> Option<Self> {
        (size <= PALETTE.len()).then(|| {
            Self::new(
                PALETTE[..size]
                    .iter()
                    .map(|&(glyph, name)| Symbol::new(glyph, name))
                    .collect(),
            )
        })
    }

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

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Glyph of the symbol at `index`
    #[must_use]
    pub fn glyph(&self, index: u8) -> Option<char> {
        self.symbols.get(index as usize).map(|s| s.glyph)
    }

    /// Index of the symbol with this glyph (case-sensitive)
    #[must_use]
    pub fn index_of(&self, glyph: char) -> Option<u8> {
        self.symbols
            .iter()
            .position(|s| s.glyph == glyph)
            .map(|i| i as u8)
    }

    /// All glyphs in order, e.g. `"RGBYOP"`
    #[must_use]
    pub fn glyphs(&self) -> String {
        self.symbols.iter().map(|s| s.glyph).collect()
    }

    /// Render a code as glyphs
    ///
    /// Indices outside the alphabet render as `?`.
    #[must_use]
    pub fn render(&self, code: &Code) -> String {
        code.symbols()
            .iter()
            .map(|&i| self.glyph(i).unwrap_or('?'))
            .collect()
    }

    /// First glyph that appears twice, if any
    pub(crate) fn duplicate_glyph(&self) -> Option<char> {
        self.symbols
            .iter()
            .enumerate()
            .find(|(i, s)| self.symbols[..*i].iter().any(|t| t.glyph == s.glyph))
            .map(|(_, s)| s.glyph)
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::new(
            PALETTE
                .iter()
                .map(|&(glyph, name)| Symbol::new(glyph, name))
                .collect(),
        )
    }
}
