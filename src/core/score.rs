//! Mastermind feedback score calculation and representation
//!
//! A score is the pair `(exact, partial)`:
//! - exact: symbols correct in both identity and position (black pegs)
//! - partial: symbols correct in identity but in the wrong position, each
//!   symbol occurrence matched at most once (white pegs)
//!
//! For a code length `L` the legal scores satisfy `exact + partial <= L`, so
//! there are exactly `(L+1)(L+2)/2` of them. [`Score::bucket`] maps each one
//! to a dense index in that range for partition counting.

use super::Code;
use super::code::MAX_SYMBOLS;
use std::fmt;

/// Feedback for a guess against a code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Score {
    exact: u8,
    partial: u8,
}

impl Score {
    /// Create a score from its two components
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        Self { exact, partial }
    }

    /// The winning score for codes of the given length
    #[inline]
    #[must_use]
    pub const fn solved(length: usize) -> Self {
        Self::new(length as u8, 0)
    }

    /// Symbols correct in identity and position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Symbols correct in identity but misplaced
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Check if this score means the code was found
    #[inline]
    #[must_use]
    pub const fn is_solved(self, length: usize) -> bool {
        self.exact as usize == length
    }

    /// Number of distinct scores possible for codes of `length` symbols
    ///
    /// ```
    /// use mastermind_solver::core::Score;
    ///
    /// assert_eq!(Score::bucket_count(4), 15);
    /// ```
    #[inline]
    #[must_use]
    pub const fn bucket_count(length: usize) -> usize {
        (length + 1) * (length + 2) / 2
    }

    /// Dense index of this score in `0..bucket_count(length)`
    ///
    /// Row `e` of the triangle holds the `L + 1 - e` scores with `exact == e`,
    /// so the row starts at `e(L+1) - e(e-1)/2`.
    #[inline]
    #[must_use]
    pub const fn bucket(self, length: usize) -> usize {
        let e = self.exact as usize;
        e * (length + 1) - e * e.saturating_sub(1) / 2 + self.partial as usize
    }

    /// Score `guess` against `code`
    ///
    /// Both codes must have the same length.
    ///
    /// # Algorithm
    /// 1. First pass: count positional matches and take them out of play
    /// 2. Second pass: tally the remaining symbols of each code and add
    ///    `min(count_in_a, count_in_b)` for every symbol seen in both
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Code, Score};
    ///
    /// let secret = Code::from_indices([0, 1, 2, 3]);
    /// let guess = Code::from_indices([1, 0, 2, 3]);
    ///
    /// assert_eq!(Score::calculate(&guess, &secret), Score::new(2, 2));
    /// ```
    #[must_use]
    pub fn calculate(guess: &Code, code: &Code) -> Self {
        debug_assert_eq!(guess.len(), code.len(), "codes must share a length");

        let mut exact = 0u8;
        let mut guess_left = [0u8; MAX_SYMBOLS];
        let mut code_left = [0u8; MAX_SYMBOLS];

        for (&g, &c) in guess.symbols().iter().zip(code.symbols()) {
            if g == c {
                exact += 1;
            } else {
                guess_left[g as usize] += 1;
                code_left[c as usize] += 1;
            }
        }

        let partial = guess_left
            .iter()
            .zip(&code_left)
            .filter(|&(&g, &c)| g > 0 && c > 0)
            .map(|(&g, &c)| g.min(c))
            .sum();

        Self { exact, partial }
    }

    /// Render as pegs: `●` per exact match, `○` per partial match
    #[must_use]
    pub fn to_pegs(self) -> String {
        let mut pegs = "●".repeat(self.exact as usize);
        pegs.push_str(&"○".repeat(self.partial as usize));
        pegs
    }

    /// Parse a score as typed by a human
    ///
    /// Accepts:
    /// - two numbers, `"2 1"`, `"2,1"`, `"2/1"`
    /// - a peg string, `B`/`b`/`●` for exact, `W`/`w`/`○` for partial,
    ///   `-`/`.` for an empty slot
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Score;
    ///
    /// assert_eq!(Score::from_str("2 1"), Some(Score::new(2, 1)));
    /// assert_eq!(Score::from_str("BBW-"), Some(Score::new(2, 1)));
    /// assert_eq!(Score::from_str("●●○"), Some(Score::new(2, 1)));
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Option API for prompts; FromStr also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        let numbers: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == '/')
            .filter(|part| !part.is_empty())
            .collect();
        if numbers.len() == 2
            && let (Ok(exact), Ok(partial)) = (numbers[0].parse(), numbers[1].parse())
        {
            return Some(Self::new(exact, partial));
        }

        let mut exact = 0u8;
        let mut partial = 0u8;
        for ch in s.chars() {
            match ch {
                'B' | 'b' | '●' => exact = exact.checked_add(1)?,
                'W' | 'w' | '○' => partial = partial.checked_add(1)?,
                '-' | '.' | ' ' => {}
                _ => return None,
            }
        }
        Some(Self::new(exact, partial))
    }

    /// Check the score is possible for codes of `length` symbols
    #[must_use]
    pub const fn fits(self, length: usize) -> bool {
        self.exact as usize + self.partial as usize <= length
            && !(self.exact as usize + 1 == length && self.partial == 1)
    }
}

impl std::str::FromStr for Score {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid score: {s}"))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::all_codes;
    use rstest::rstest;

    fn code(indices: &[u8]) -> Code {
        Code::from_indices(indices.iter().copied())
    }

    #[rstest]
    #[case(&[0, 1, 2, 3], &[0, 1, 2, 3], Score::new(4, 0))]
    #[case(&[1, 0, 2, 3], &[0, 1, 2, 3], Score::new(2, 2))]
    #[case(&[4, 5, 0, 1], &[0, 1, 2, 3], Score::new(0, 2))]
    #[case(&[4, 5, 4, 5], &[0, 1, 2, 3], Score::new(0, 0))]
    #[case(&[1, 2, 3, 0], &[0, 1, 2, 3], Score::new(0, 4))]
    fn scores_without_repetition(
        #[case] guess: &[u8],
        #[case] secret: &[u8],
        #[case] expected: Score,
    ) {
        assert_eq!(Score::calculate(&code(guess), &code(secret)), expected);
    }

    #[rstest]
    // Repeated guess symbols only count once per secret occurrence
    #[case(&[0, 0, 1, 1], &[1, 1, 0, 2], Score::new(0, 3))]
    #[case(&[0, 0, 0, 1], &[0, 1, 1, 1], Score::new(2, 0))]
    #[case(&[0, 0, 0, 0], &[0, 1, 2, 3], Score::new(1, 0))]
    #[case(&[1, 1, 2, 2], &[2, 2, 1, 1], Score::new(0, 4))]
    #[case(&[0, 1, 0, 1], &[0, 0, 1, 1], Score::new(2, 2))]
    fn scores_with_repetition(
        #[case] guess: &[u8],
        #[case] secret: &[u8],
        #[case] expected: Score,
    ) {
        assert_eq!(Score::calculate(&code(guess), &code(secret)), expected);
    }

    #[test]
    fn score_is_symmetric() {
        let codes = [
            code(&[0, 0, 1, 1]),
            code(&[1, 1, 0, 2]),
            code(&[0, 1, 2, 3]),
            code(&[3, 3, 3, 0]),
            code(&[5, 4, 3, 3]),
        ];
        for a in &codes {
            for b in &codes {
                assert_eq!(Score::calculate(a, b), Score::calculate(b, a));
            }
        }
    }

    #[rstest]
    #[case::with_repetition(6, 4, true)]
    #[case::without_repetition(6, 4, false)]
    #[case::long_codes(3, 6, true)]
    fn every_pair_scores_consistently(
        #[case] symbols: usize,
        #[case] length: usize,
        #[case] allow_repetition: bool,
    ) {
        let codes = all_codes(symbols, length, allow_repetition);

        for a in &codes {
            assert_eq!(Score::calculate(a, a), Score::solved(length));
            for b in &codes {
                let score = Score::calculate(a, b);
                assert_eq!(score, Score::calculate(b, a), "{a:?} vs {b:?}");
                assert!(score.exact() as usize + score.partial() as usize <= length);
                assert!(score.fits(length), "{score} for {a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn buckets_are_dense_and_distinct() {
        for length in 1..=6 {
            let mut seen = vec![false; Score::bucket_count(length)];
            for exact in 0..=length as u8 {
                for partial in 0..=(length as u8 - exact) {
                    let bucket = Score::new(exact, partial).bucket(length);
                    assert!(!seen[bucket], "bucket {bucket} reused for L={length}");
                    seen[bucket] = true;
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn solved_score() {
        assert!(Score::solved(4).is_solved(4));
        assert!(!Score::new(3, 0).is_solved(4));
        assert_eq!(Score::solved(4).bucket(4), Score::bucket_count(4) - 1);
    }

    #[test]
    fn pegs_rendering() {
        assert_eq!(Score::new(2, 1).to_pegs(), "●●○");
        assert_eq!(Score::new(0, 0).to_pegs(), "");
    }

    #[rstest]
    #[case("2 1", Some(Score::new(2, 1)))]
    #[case("0,3", Some(Score::new(0, 3)))]
    #[case("4/0", Some(Score::new(4, 0)))]
    #[case("bbw", Some(Score::new(2, 1)))]
    #[case("●○○-", Some(Score::new(1, 2)))]
    #[case("----", Some(Score::new(0, 0)))]
    #[case("", None)]
    #[case("2 x", None)]
    #[case("bbz", None)]
    fn parse_scores(#[case] input: &str, #[case] expected: Option<Score>) {
        assert_eq!(Score::from_str(input), expected);
    }

    #[test]
    fn fits_rejects_impossible_scores() {
        assert!(Score::new(4, 0).fits(4));
        assert!(Score::new(0, 4).fits(4));
        assert!(!Score::new(3, 1).fits(4));
        assert!(!Score::new(3, 2).fits(4));
    }
}
