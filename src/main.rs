//! Mastermind Solver - CLI
//!
//! Mastermind codebreaker using the minimax (worst-case partition) strategy.
//! Solves the classic 6 colour, 4 peg game without repetition in at most 6
//! rounds.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use mastermind_solver::{
    commands::{
        analyze_code, print_test_all_statistics, run_benchmark, run_simple, run_test_all,
        solve_code,
    },
    core::{Alphabet, Configuration, PALETTE, Preset},
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::StrategyType,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind codebreaker using a minimax (worst-case partition) strategy",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: minimax (default), random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// YAML configuration file
    #[arg(short, long, global = true, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Difficulty preset: easy, intermediate, hard, expert
    #[arg(short, long, global = true)]
    preset: Option<String>,

    /// Number of colours, taken from R G B Y O P in order
    #[arg(long, global = true, value_parser = clap::value_parser!(u8).range(2..=6))]
    colors: Option<u8>,

    /// Number of pegs in a code
    #[arg(long, global = true)]
    length: Option<usize>,

    /// Whether a code may repeat a colour
    #[arg(long, global = true, value_name = "BOOL")]
    repetition: Option<bool>,

    /// Rounds allowed before the game is lost
    #[arg(long, global = true)]
    max_rounds: Option<usize>,

    /// Log more (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you score the solver's guesses (default)
    Simple,

    /// Solve a specific secret
    Solve {
        /// The secret code, e.g. RGBY
        secret: String,

        /// Show candidate counts for every round
        #[arg(short, long)]
        details: bool,
    },

    /// Show how a first guess partitions the candidates
    Analyze {
        /// Code to analyze
        code: String,
    },

    /// Benchmark solver performance on random secrets
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Seed for reproducible secrets
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Test solver on ALL possible secrets
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the effective configuration as YAML
    ShowConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = build_configuration(&cli)?;
    let strategy = StrategyType::from_name(&cli.strategy);

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(strategy, &config),
        Commands::Solve { secret, details } => {
            let result = solve_code(strategy, &config, &secret)?;
            print_solve_result(&result, &config.alphabet, details);
            Ok(())
        }
        Commands::Analyze { code } => {
            let result = analyze_code(&code, &config)?;
            print_analysis_result(&result, &config.alphabet);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!(
                "Running benchmark on {count} random secrets with the {} strategy...",
                strategy.name()
            );
            let result = run_benchmark(strategy, &config, count, seed)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => run_test_all_command(strategy, &config, limit),
        Commands::ShowConfig => {
            print!("{}", serde_yaml::to_string(&config)?);
            Ok(())
        }
    }
}

/// Install the logger; `RUST_LOG` overrides the `-v` level
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Layer command-line overrides over the file, preset or defaults
fn build_configuration(cli: &Cli) -> Result<Configuration> {
    let mut config = if let Some(path) = &cli.config {
        Configuration::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?
    } else if let Some(name) = &cli.preset {
        Preset::from_name(name)?.configuration()
    } else {
        Configuration::default()
    };

    if let Some(colors) = cli.colors {
        config.alphabet = Alphabet::palette(usize::from(colors))
            .with_context(|| format!("At most {} colours are available", PALETTE.len()))?;
    }
    if let Some(length) = cli.length {
        config.code_length = length;
    }
    if let Some(repetition) = cli.repetition {
        config.allow_repetition = repetition;
    }
    if let Some(max_rounds) = cli.max_rounds {
        config.max_rounds = max_rounds;
    }

    config.validate()?;
    log::info!(
        "configuration: {} colours, length {}, repetition {}, {} rounds",
        config.symbol_count(),
        config.code_length,
        config.allow_repetition,
        config.max_rounds
    );
    Ok(config)
}

fn run_test_all_command(
    strategy: StrategyType,
    config: &Configuration,
    limit: Option<usize>,
) -> Result<()> {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Mastermind Solver Test ");
    println!("{}", "═".repeat(70));
    println!(
        "\nColours: {}  Length: {}  Repetition: {}  Rounds: {}",
        config.alphabet.glyphs(),
        config.code_length,
        if config.allow_repetition { "yes" } else { "no" },
        config.max_rounds
    );
    println!("Strategy: {}", strategy.name());
    println!();

    let stats = run_test_all(strategy, config, limit)?;
    print_test_all_statistics(&stats, &config.alphabet);
    Ok(())
}
