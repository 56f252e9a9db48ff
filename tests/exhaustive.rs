//! Exhaustive games over every secret of small configurations

use mastermind_solver::core::{Code, Configuration, Preset};
use mastermind_solver::game::{Secret, new_game, next_guess, play_round};
use mastermind_solver::solver::{MinimaxStrategy, Search, SearchState, enumerate};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rstest::rstest;
use std::collections::BTreeMap;

/// Final state and rounds played for every secret, in enumeration order
fn play_every_secret(config: &Configuration) -> Vec<(Code, SearchState, usize)> {
    let mut search = Search::new(MinimaxStrategy, config).unwrap();

    enumerate(config)
        .unwrap()
        .into_iter()
        .map(|code| {
            search.restart();
            let state = search.run(&mut Secret::new(code.clone())).unwrap();
            (code, state, search.rounds_played())
        })
        .collect()
}

/// Rounds needed for every secret, which must all be solved
fn rounds_for_every_secret(config: &Configuration) -> Vec<(Code, usize)> {
    play_every_secret(config)
        .into_iter()
        .map(|(code, state, rounds)| {
            assert_eq!(state, SearchState::Solved, "failed on {code:?}");
            (code, rounds)
        })
        .collect()
}

fn distribution(rounds: &[(Code, usize)]) -> BTreeMap<usize, usize> {
    let mut counts = BTreeMap::new();
    for &(_, n) in rounds {
        *counts.entry(n).or_insert(0) += 1;
    }
    counts
}

#[test]
fn classic_game_is_solved_within_six_rounds() {
    let config = Configuration::default();
    let rounds = rounds_for_every_secret(&config);

    assert_eq!(rounds.len(), 360);
    assert_eq!(rounds.iter().map(|&(_, n)| n).max(), Some(6));
    assert_eq!(
        distribution(&rounds),
        BTreeMap::from([(1, 1), (2, 10), (3, 61), (4, 176), (5, 110), (6, 2)])
    );
}

#[test]
fn small_game_with_repetition() {
    let config = Configuration {
        code_length: 3,
        ..Preset::Intermediate.configuration()
    };
    let rounds = rounds_for_every_secret(&config);

    assert_eq!(rounds.len(), 64);
    assert_eq!(
        distribution(&rounds),
        BTreeMap::from([(1, 1), (2, 8), (3, 26), (4, 28), (5, 1)])
    );
}

#[rstest]
#[case::easy(Preset::Easy)]
#[case::intermediate(Preset::Intermediate)]
#[case::hard(Preset::Hard)]
fn presets_solve_within_their_round_budget(#[case] preset: Preset) {
    let config = preset.configuration();
    let rounds = rounds_for_every_secret(&config);

    assert!(rounds.iter().all(|&(_, n)| n <= config.max_rounds));
}

#[test]
fn expert_budget_loses_the_two_hardest_secrets() {
    let config = Preset::Expert.configuration();
    let games = play_every_secret(&config);

    let lost: Vec<_> = games
        .iter()
        .filter(|(_, state, _)| *state == SearchState::Exhausted)
        .collect();
    assert_eq!(lost.len(), 2);
    assert!(lost.iter().all(|&&(_, _, rounds)| rounds == config.max_rounds));
}

#[test]
fn every_round_shrinks_the_pool() {
    let config = Configuration::default();
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..25 {
        let (secret, mut pool) = new_game(&config, &mut rng).unwrap();
        loop {
            let before = pool.remaining();
            let guess = next_guess(&pool).unwrap();
            let observed = secret.score(&guess);
            if observed.is_solved(config.code_length) {
                assert_eq!(&guess, secret.reveal());
                break;
            }
            let after = play_round(&mut pool, &guess, observed).unwrap();
            assert!(after < before);
            assert!(pool.contains(secret.reveal()));
        }
    }
}
