//! Formatting utilities for terminal output

use crate::core::{Alphabet, Code, Score};
use colored::{ColoredString, Colorize};

/// Format a score as pegs, padding empty slots with `·`
///
/// `●` marks an exact match, `○` a partial one.
#[must_use]
pub fn score_to_pegs(score: Score, length: usize) -> String {
    let pegs = score.to_pegs();
    let used = (score.exact() + score.partial()) as usize;
    format!("{pegs}{}", "·".repeat(length.saturating_sub(used)))
}

/// Colour a single glyph the way it is named
///
/// Glyphs outside the default palette are left uncoloured.
#[must_use]
pub fn colored_glyph(glyph: char) -> ColoredString {
    let text = glyph.to_string();
    match glyph {
        'R' => text.red().bold(),
        'G' => text.green().bold(),
        'B' => text.blue().bold(),
        'Y' => text.yellow().bold(),
        'O' => text.truecolor(255, 165, 0).bold(),
        'P' => text.magenta().bold(),
        _ => text.bold(),
    }
}

/// Render a code with each glyph in its colour
#[must_use]
pub fn colored_code(alphabet: &Alphabet, code: &Code) -> String {
    alphabet
        .render(code)
        .chars()
        .map(|glyph| colored_glyph(glyph).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pegs_are_padded_to_length() {
        assert_eq!(score_to_pegs(Score::new(0, 0), 4), "····");
        assert_eq!(score_to_pegs(Score::new(2, 1), 4), "●●○·");
        assert_eq!(score_to_pegs(Score::new(4, 0), 4), "●●●●");
    }

    #[test]
    fn colored_code_keeps_glyphs() {
        colored::control::set_override(false);
        let alphabet = Alphabet::default();
        assert_eq!(colored_code(&alphabet, &Code::from_indices([0, 5, 4, 1])), "RPOG");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
