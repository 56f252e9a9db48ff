//! Test all secrets - exhaustive solver evaluation
//!
//! Runs the solver against every code the configuration allows and generates
//! statistics.

use crate::core::{Alphabet, Code, Configuration};
use crate::game::Secret;
use crate::output::formatters::{colored_code, create_progress_bar};
use crate::solver::{Search, SearchState, SolverError, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// How one game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved(usize),
    Exhausted,
    Contradiction,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_codes: usize,
    pub solved: usize,
    pub exhausted: usize,
    pub contradictions: usize,
    /// Rounds needed, per solved secret
    pub round_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub max_rounds: usize,
    pub min_rounds: usize,
    /// Secrets that took the most rounds, hardest first
    pub worst_codes: Vec<(Code, usize)>,
    /// Secrets the solver failed on
    pub failures: Vec<(Code, Outcome)>,
}

impl TestAllStatistics {
    /// Tally per-secret outcomes
    #[must_use]
    pub fn from_outcomes(outcomes: &[(Code, Outcome)], total_time: Duration) -> Self {
        let mut round_distribution: FxHashMap<usize, usize> = FxHashMap::default();
        let mut solved_rounds = Vec::new();
        let mut failures = Vec::new();

        for (code, outcome) in outcomes {
            match *outcome {
                Outcome::Solved(rounds) => {
                    *round_distribution.entry(rounds).or_insert(0) += 1;
                    solved_rounds.push((code.clone(), rounds));
                }
                other => failures.push((code.clone(), other)),
            }
        }

        let solved = solved_rounds.len();
        let total_rounds: usize = solved_rounds.iter().map(|(_, n)| n).sum();
        let max_rounds = solved_rounds.iter().map(|&(_, n)| n).max().unwrap_or(0);
        let min_rounds = solved_rounds.iter().map(|&(_, n)| n).min().unwrap_or(0);

        // Stable sort keeps enumeration order among equals
        let mut worst_codes = solved_rounds;
        worst_codes.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
        worst_codes.truncate(10);

        Self {
            total_codes: outcomes.len(),
            solved,
            exhausted: failures
                .iter()
                .filter(|(_, o)| *o == Outcome::Exhausted)
                .count(),
            contradictions: failures
                .iter()
                .filter(|(_, o)| *o == Outcome::Contradiction)
                .count(),
            round_distribution,
            total_time,
            average_rounds: if solved > 0 {
                total_rounds as f64 / solved as f64
            } else {
                0.0
            },
            max_rounds,
            min_rounds,
            worst_codes,
            failures,
        }
    }
}

/// Play one game against `secret`, reusing `search`
///
/// # Errors
///
/// Propagates solver errors other than a contradiction, which is reported as
/// an outcome.
pub fn play_secret<S: Strategy>(
    search: &mut Search<'_, S>,
    secret: &Code,
) -> Result<Outcome, SolverError> {
    search.restart();
    match search.run(&mut Secret::new(secret.clone())) {
        Ok(SearchState::Solved) => Ok(Outcome::Solved(search.rounds_played())),
        Ok(_) => Ok(Outcome::Exhausted),
        Err(SolverError::Contradiction { .. }) => Ok(Outcome::Contradiction),
        Err(err) => Err(err),
    }
}

/// Run the solver on every code of the configuration (or a limited subset)
///
/// # Errors
///
/// Returns an error if the configuration is invalid or over budget.
pub fn run_test_all<S: Strategy>(
    strategy: S,
    config: &Configuration,
    limit: Option<usize>,
) -> Result<TestAllStatistics, SolverError> {
    let mut search = Search::new(strategy, config)?;
    let secrets: Vec<Code> = search
        .pool()
        .active()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    println!("🎯 Testing {} secrets...", secrets.len());

    // Progress bar
    let pb = ProgressBar::new(secrets.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();
    let mut outcomes = Vec::with_capacity(secrets.len());
    let mut solved_rounds = 0;
    let mut solved = 0;

    for (idx, secret) in secrets.into_iter().enumerate() {
        let outcome = play_secret(&mut search, &secret)?;
        if let Outcome::Solved(rounds) = outcome {
            solved += 1;
            solved_rounds += rounds;
        }
        outcomes.push((secret, outcome));

        if idx % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", solved_rounds as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    Ok(TestAllStatistics::from_outcomes(
        &outcomes,
        total_start.elapsed(),
    ))
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics, alphabet: &Alphabet) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let total = stats.total_codes.max(1) as f64;

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_codes);
    println!(
        "  Solved:               {} {}",
        stats.solved,
        format!("({:.1}%)", stats.solved as f64 / total * 100.0).green()
    );
    if stats.exhausted > 0 {
        println!(
            "  Out of rounds:        {} {}",
            stats.exhausted,
            format!("({:.1}%)", stats.exhausted as f64 / total * 100.0).red()
        );
    }
    if stats.contradictions > 0 {
        println!(
            "  Contradictions:       {} {}",
            stats.contradictions,
            format!("({:.1}%)", stats.contradictions as f64 / total * 100.0).red()
        );
    }
    println!(
        "  Average rounds:       {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!(
        "  Worst case:           {}",
        format!("{}", stats.max_rounds).yellow()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:      {:.2}ms",
        stats.total_time.as_secs_f64() * 1000.0 / total
    );

    // Round distribution
    println!("\n📈 {}", "Round Distribution".bright_cyan().bold());
    let max_count = stats.round_distribution.values().copied().max().unwrap_or(0);
    for rounds in 1..=stats.max_rounds {
        let count = stats.round_distribution.get(&rounds).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {rounds:2} rounds: {} {count:5} ({percentage:5.1}%)",
            bar.green()
        );
    }

    if !stats.worst_codes.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (code, rounds) in stats.worst_codes.iter().take(5) {
            println!("  {} ({rounds} rounds)", colored_code(alphabet, code));
        }
    }

    if !stats.failures.is_empty() {
        println!("\n❌ {}", "Unsolved Secrets".red().bold());
        for (code, outcome) in stats.failures.iter().take(10) {
            println!("  {} ({outcome:?})", colored_code(alphabet, code));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Preset;
    use crate::solver::MinimaxStrategy;

    #[test]
    fn tallies_outcomes() {
        let outcomes = vec![
            (Code::from_indices([0, 1]), Outcome::Solved(1)),
            (Code::from_indices([1, 0]), Outcome::Solved(3)),
            (Code::from_indices([0, 2]), Outcome::Solved(3)),
            (Code::from_indices([2, 0]), Outcome::Exhausted),
            (Code::from_indices([1, 2]), Outcome::Contradiction),
        ];

        let stats = TestAllStatistics::from_outcomes(&outcomes, Duration::ZERO);

        assert_eq!(stats.total_codes, 5);
        assert_eq!(stats.solved, 3);
        assert_eq!(stats.exhausted, 1);
        assert_eq!(stats.contradictions, 1);
        assert_eq!(stats.min_rounds, 1);
        assert_eq!(stats.max_rounds, 3);
        assert!((stats.average_rounds - 7.0 / 3.0).abs() < 1e-9);
        assert_eq!(stats.round_distribution[&3], 2);
        assert_eq!(stats.worst_codes[0], (Code::from_indices([1, 0]), 3));
        assert_eq!(stats.failures.len(), 2);
    }

    #[test]
    fn empty_outcomes() {
        let stats = TestAllStatistics::from_outcomes(&[], Duration::ZERO);

        assert_eq!(stats.total_codes, 0);
        assert_eq!(stats.max_rounds, 0);
        assert!(stats.worst_codes.is_empty());
    }

    #[test]
    fn test_all_with_limit() {
        let config = Configuration::default();
        let stats = run_test_all(MinimaxStrategy, &config, Some(12)).unwrap();

        assert_eq!(stats.total_codes, 12);
        assert_eq!(stats.solved, 12);
        // RGBY is the first code enumerated and the first guess
        assert_eq!(stats.min_rounds, 1);
    }

    #[test]
    fn test_all_plays_every_code_of_the_pool() {
        let config = Preset::Easy.configuration();
        let stats = run_test_all(MinimaxStrategy, &config, None).unwrap();

        assert_eq!(Some(stats.total_codes), config.candidate_count());
        assert_eq!(stats.solved, stats.total_codes);
        assert!(stats.failures.is_empty());
    }

    #[test]
    fn test_all_small_game() {
        let config = Preset::Intermediate.configuration();
        let config = Configuration {
            code_length: 3,
            ..config
        };

        let stats = run_test_all(MinimaxStrategy, &config, None).unwrap();

        assert_eq!(stats.total_codes, 64);
        assert_eq!(stats.solved, 64);
        assert_eq!(stats.max_rounds, 5);
        assert_eq!(stats.round_distribution[&1], 1);
        assert_eq!(stats.round_distribution[&2], 8);
        assert_eq!(stats.round_distribution[&3], 26);
        assert_eq!(stats.round_distribution[&4], 28);
        assert_eq!(stats.round_distribution[&5], 1);
    }

    #[test]
    fn play_secret_reports_exhaustion() {
        let config = Configuration {
            max_rounds: 1,
            ..Configuration::default()
        };
        let mut search = Search::new(MinimaxStrategy, &config).unwrap();

        assert_eq!(
            play_secret(&mut search, &Code::from_indices([0, 1, 2, 3])).unwrap(),
            Outcome::Solved(1)
        );
        assert_eq!(
            play_secret(&mut search, &Code::from_indices([5, 4, 3, 2])).unwrap(),
            Outcome::Exhausted
        );
    }
}
