//! Benchmark command
//!
//! Tests solver performance across random secrets.

use crate::core::Configuration;
use crate::game::generate_secret;
use crate::solver::{Search, SearchState, SolverError, Strategy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub solved: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds needed, per solved game
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Run `count` games against random secrets
///
/// The secrets are drawn from `seed` when given, so a run can be repeated.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or over budget.
pub fn run_benchmark<S: Strategy>(
    strategy: S,
    config: &Configuration,
    count: usize,
    seed: Option<u64>,
) -> Result<BenchmarkResult, SolverError> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let mut search = Search::new(strategy, config)?;

    let start = Instant::now();
    let mut solved = 0;
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for _ in 0..count {
        let mut secret = generate_secret(config, &mut rng);
        search.restart();
        let state = search.run(&mut secret)?;
        let rounds = search.rounds_played();

        total_rounds += rounds;
        min_rounds = min_rounds.min(rounds);
        max_rounds = max_rounds.max(rounds);
        if state == SearchState::Solved {
            solved += 1;
            *distribution.entry(rounds).or_insert(0) += 1;
        }
    }

    let duration = start.elapsed();

    Ok(BenchmarkResult {
        total_games: count,
        solved,
        total_rounds,
        average_rounds: if count > 0 {
            total_rounds as f64 / count as f64
        } else {
            0.0
        },
        min_rounds: if count > 0 { min_rounds } else { 0 },
        max_rounds,
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Preset;
    use crate::solver::{MinimaxStrategy, RandomStrategy};

    #[test]
    fn benchmark_runs() {
        let config = Configuration::default();
        let result = run_benchmark(MinimaxStrategy, &config, 10, Some(1)).unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.solved, 10);
        assert!(result.total_rounds >= 10);
        assert!(result.min_rounds >= 1);
        assert!(result.max_rounds <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let config = Preset::Intermediate.configuration();
        let result = run_benchmark(MinimaxStrategy, &config, 20, Some(2)).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn benchmark_is_reproducible_with_seed() {
        let config = Configuration::default();
        let a = run_benchmark(MinimaxStrategy, &config, 15, Some(42)).unwrap();
        let b = run_benchmark(MinimaxStrategy, &config, 15, Some(42)).unwrap();

        assert_eq!(a.total_rounds, b.total_rounds);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_no_games() {
        let config = Configuration::default();
        let result = run_benchmark(MinimaxStrategy, &config, 0, None).unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_rounds, 0);
        assert_eq!(result.min_rounds, 0);
        assert!(result.average_rounds.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let config = Preset::Hard.configuration();
        let result = run_benchmark(RandomStrategy, &config, 10, Some(5)).unwrap();

        assert!(result.average_rounds >= result.min_rounds as f64);
        assert!(result.average_rounds <= result.max_rounds as f64);
        for &rounds in result.distribution.keys() {
            assert!((1..=config.max_rounds).contains(&rounds));
        }
    }

    #[test]
    fn benchmark_rejects_invalid_configuration() {
        let config = Configuration {
            code_length: 0,
            ..Configuration::default()
        };
        assert!(run_benchmark(MinimaxStrategy, &config, 3, Some(0)).is_err());
    }
}
