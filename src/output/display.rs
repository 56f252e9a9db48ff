//! Display functions for command results

use super::formatters::{colored_code, create_progress_bar, score_to_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Alphabet;
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, alphabet: &Alphabet, verbose: bool) {
    let length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", colored_code(alphabet, &result.secret));
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            colored_code(alphabet, &round.guess),
            score_to_pegs(round.score, length)
        );

        if verbose {
            println!("  Score:      {}", round.score);
            println!(
                "  Candidates: {} → {}",
                round.candidates_before, round.candidates_after
            );
            println!("  Worst case: {} candidates", round.worst_case);
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("✅ Solved in {} rounds!", result.rounds.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} rounds", result.rounds.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of analyzing a guess
pub fn print_analysis_result(result: &AnalysisResult, alphabet: &Alphabet) {
    let length = result.code.len();

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        colored_code(alphabet, &result.code)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible secrets:", result.total_candidates);
    println!(
        "   Worst case:   {}",
        format!("{} candidates", result.worst_case).bright_yellow()
    );
    println!(
        "   Expected:     {:.1} candidates remain",
        result.expected_remaining
    );
    println!(
        "   Minimax best: {} (worst case {})",
        colored_code(alphabet, &result.best_code),
        result.best_worst_case
    );

    println!("\n📈 {}", "Partitions:".bright_cyan().bold());
    for (i, &(score, count)) in result.partitions.iter().enumerate() {
        let bar = create_progress_bar(count as f64, result.worst_case as f64, 30);
        let bar = if i == 0 { bar.yellow() } else { bar.green() };
        println!("   {} {bar} {count:5}", score_to_pegs(score, length));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for rounds in 1..=result.max_rounds {
        if let Some(&count) = result.distribution.get(&rounds) {
            let pct = (count as f64 / result.total_games as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {rounds:2}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }
}
