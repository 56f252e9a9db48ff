//! Simple interactive CLI mode
//!
//! The solver proposes guesses and a human, playing against a physical
//! board or a friend, types in the score each guess received.

use crate::core::{Configuration, Score};
use crate::output::formatters::{colored_code, score_to_pegs};
use crate::solver::{Search, SearchState, SolverError, Strategy};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What the user typed at the score prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    NewGame,
    Undo,
    Score(Score),
}

impl Command {
    fn parse(input: &str, length: usize) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => Some(Self::Quit),
            "new" | "n" => Some(Self::NewGame),
            "undo" | "u" => Some(Self::Undo),
            "win" | "solved" | "yes" => Some(Self::Score(Score::solved(length))),
            _ => Score::from_str(input).map(Self::Score),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if the configuration is invalid or on an I/O error.
pub fn run_simple<S: Strategy>(strategy: S, config: &Configuration) -> Result<()> {
    let mut search = Search::new(strategy, config)?;
    let stdin = io::stdin();
    play(&mut search, &mut stdin.lock(), &mut io::stdout())
}

/// Drive `search` from scores typed on `input`
///
/// End of input is treated as `quit`.
///
/// # Errors
///
/// Returns an error on an I/O error.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn play<S: Strategy, R: BufRead, W: Write>(
    search: &mut Search<'_, S>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let config = search.config().clone();
    let length = config.code_length;

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║            Mastermind Solver - Interactive Mode              ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Pick a secret of {length} from {} ({}). I'll try to find it within {} rounds.",
        config.alphabet.glyphs(),
        if config.allow_repetition {
            "repetition allowed"
        } else {
            "no repetition"
        },
        config.max_rounds
    )?;
    writeln!(out, "After each guess, enter its score:\n")?;
    writeln!(out, "  - Two numbers, exact then partial: '2 1' or '2,1'")?;
    writeln!(out, "  - Or pegs: B/● for exact, W/○ for partial, - for none")?;
    writeln!(out, "  - Or type 'win' if I got it right!\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last score\n")?;

    loop {
        let (guess, worst_case) = match search.next_guess() {
            Ok(next) => next,
            Err(SolverError::Contradiction { round }) => {
                writeln!(
                    out,
                    "\n❌ No code fits the scores given up to round {round}! One of them may be wrong."
                )?;
                writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;

                match prompt(input, out, "Command")?.and_then(|line| Command::parse(&line, length)) {
                    None | Some(Command::Quit) => return farewell(out),
                    Some(Command::Undo) => undo(search, out)?,
                    Some(Command::NewGame) => new_game(search, out)?,
                    Some(Command::Score(_)) => {}
                }
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let turn = search.rounds_played() + 1;
        let remaining = search.remaining();

        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(out, "Round {turn}/{}: {remaining} candidates remaining", config.max_rounds)?;
        writeln!(out, "────────────────────────────────────────────────────────────")?;
        writeln!(
            out,
            "\n📊 Suggested guess: {}",
            colored_code(&config.alphabet, &guess)
        )?;
        writeln!(out, "   Worst case:      {worst_case} candidates\n")?;

        if remaining <= 10 {
            writeln!(out, "Remaining candidates:")?;
            for candidate in search.pool().active() {
                writeln!(out, "  • {}", config.alphabet.render(candidate))?;
            }
            writeln!(out)?;
        }

        let command = loop {
            let Some(line) = prompt(input, out, "Enter score ('2 1', 'BBW', 'win', or command)")?
            else {
                return farewell(out);
            };
            if let Some(command) = Command::parse(&line, length) {
                break command;
            }
            writeln!(out, "❌ Invalid score! Use '2 1', 'BBW-', 'win' or a command\n")?;
        };

        match command {
            Command::Quit => return farewell(out),
            Command::NewGame => new_game(search, out)?,
            Command::Undo => undo(search, out)?,
            Command::Score(score) => match search.record(guess, score, worst_case) {
                Ok(SearchState::Solved) => {
                    celebrate(search, out)?;
                    if !play_again(input, out)? {
                        return farewell(out);
                    }
                    new_game(search, out)?;
                }
                Ok(SearchState::Exhausted) => {
                    writeln!(
                        out,
                        "\n{}",
                        format!("⌛ Out of rounds after {} guesses.", search.rounds_played())
                            .red()
                            .bold()
                    )?;
                    if !play_again(input, out)? {
                        return farewell(out);
                    }
                    new_game(search, out)?;
                }
                Ok(SearchState::Searching) => {}
                Err(err @ SolverError::ImpossibleScore { .. }) => {
                    writeln!(out, "❌ {err}\n")?;
                }
                // Reported when the next guess is requested
                Err(SolverError::Contradiction { .. }) => {}
                Err(err) => return Err(err.into()),
            },
        }
    }
}

fn celebrate<S: Strategy, W: Write>(search: &Search<'_, S>, out: &mut W) -> io::Result<()> {
    let alphabet = &search.config().alphabet;
    let length = search.config().code_length;
    let rounds = search.rounds_played();

    writeln!(out, "\n{}", "═".repeat(70).bright_cyan())?;
    writeln!(
        out,
        "{}",
        format!(
            "    🎉 Solved in {rounds} {}!",
            if rounds == 1 { "guess" } else { "guesses" }
        )
        .bright_green()
        .bold()
    )?;
    writeln!(out, "{}", "═".repeat(70).bright_cyan())?;

    writeln!(out, "\n  Guess history:")?;
    for (i, round) in search.history().iter().enumerate() {
        writeln!(
            out,
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_code(alphabet, &round.guess),
            score_to_pegs(round.score, length)
        )?;
    }
    writeln!(out)
}

fn undo<S: Strategy, W: Write>(search: &mut Search<'_, S>, out: &mut W) -> io::Result<()> {
    if search.undo().is_some() {
        writeln!(out, "✓ Undone! Back to round {}\n", search.rounds_played() + 1)
    } else {
        writeln!(out, "Nothing to undo!\n")
    }
}

fn new_game<S: Strategy, W: Write>(search: &mut Search<'_, S>, out: &mut W) -> io::Result<()> {
    search.restart();
    writeln!(out, "\n🔄 New game started!\n")
}

fn play_again<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<bool> {
    let answer = prompt(input, out, "Play again? (yes/no)")?;
    Ok(matches!(
        answer.as_deref().map(str::to_lowercase).as_deref(),
        Some("yes" | "y")
    ))
}

fn farewell<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Read one trimmed line after printing `text`; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
