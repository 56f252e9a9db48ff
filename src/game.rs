//! Game setup and the operations a front-end drives
//!
//! A front-end starts a game with [`new_game`], which draws a [`Secret`] and
//! builds the [`CandidatePool`]. Each round it asks [`next_guess`] for a
//! guess, scores it with the secret, and narrows the pool with
//! [`play_round`]. [`score`] also serves to compare a human's guess with the
//! secret.

use crate::core::{Code, Configuration, Score};
use crate::solver::minimax::select_next_guess;
use crate::solver::{CandidatePool, Oracle, SolverError};
use rand::Rng;
use rand::seq::SliceRandom;

/// The hidden code of a game
///
/// Solving logic only ever sees scores; the code itself is revealed for
/// display once the game is over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Secret(Code);

impl Secret {
    /// Wrap any code of the game's alphabet as a secret
    #[must_use]
    pub const fn new(code: Code) -> Self {
        Self(code)
    }

    /// Score `guess` against the secret
    #[must_use]
    pub fn score(&self, guess: &Code) -> Score {
        Score::calculate(guess, &self.0)
    }

    /// The hidden code
    #[must_use]
    pub const fn reveal(&self) -> &Code {
        &self.0
    }
}

impl Oracle for Secret {
    fn score(&mut self, guess: &Code) -> Score {
        Score::calculate(guess, &self.0)
    }
}

/// Draw a uniformly random secret
///
/// With repetition every position is an independent draw; without, the
/// alphabet is shuffled and the first `code_length` symbols are taken.
///
/// `config` must be valid (see [`Configuration::validate`]).
pub fn generate_secret<R: Rng + ?Sized>(config: &Configuration, rng: &mut R) -> Secret {
    let symbols = config.symbol_count() as u8;

    let code = if config.allow_repetition {
        Code::from_indices((0..config.code_length).map(|_| rng.random_range(0..symbols)))
    } else {
        let mut shuffled: Vec<u8> = (0..symbols).collect();
        shuffled.shuffle(rng);
        Code::from_indices(shuffled.into_iter().take(config.code_length))
    };

    Secret::new(code)
}

/// Start a game: validate the configuration, draw a secret, build the pool
///
/// # Errors
/// Returns `SolverError::InvalidConfiguration` if the configuration is
/// unplayable or over budget. No secret is drawn in that case.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Configuration;
/// use mastermind_solver::game::{new_game, next_guess, play_round};
///
/// let config = Configuration::default();
/// let (secret, mut pool) = new_game(&config, &mut rand::rng()).unwrap();
///
/// let guess = next_guess(&pool).unwrap();
/// let remaining = play_round(&mut pool, &guess, secret.score(&guess)).unwrap();
/// assert!(remaining >= 1 && remaining <= 360);
/// ```
pub fn new_game<R: Rng + ?Sized>(
    config: &Configuration,
    rng: &mut R,
) -> Result<(Secret, CandidatePool), SolverError> {
    let pool = CandidatePool::from_config(config)?;
    let secret = generate_secret(config, rng);
    Ok((secret, pool))
}

/// Narrow the pool with the score a guess received
///
/// Returns the number of candidates left.
///
/// # Errors
/// Returns `SolverError::LengthMismatch` if `guess` is not as long as the
/// pool's codes. The pool is left untouched in that case.
pub fn play_round(
    pool: &mut CandidatePool,
    guess: &Code,
    observed: Score,
) -> Result<usize, SolverError> {
    if let Some(expected) = pool.code_length()
        && guess.len() != expected
    {
        return Err(SolverError::LengthMismatch {
            expected,
            got: guess.len(),
        });
    }
    Ok(pool.filter(guess, observed))
}

/// Choose the next guess by minimax over the active candidates
///
/// # Errors
/// Returns `SolverError::EmptyPool` if no candidate is active, meaning the
/// scores played so far contradict each other.
pub fn next_guess(pool: &CandidatePool) -> Result<Code, SolverError> {
    select_next_guess(pool).map(|(guess, _)| guess.clone())
}

/// Score `guess` against `code`
#[must_use]
pub fn score(guess: &Code, code: &Code) -> Score {
    Score::calculate(guess, code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alphabet, Preset};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn reference_scores() {
        let config = Configuration::default();
        let secret = Secret::new(Code::parse("RGBY", &config).unwrap());

        let cases = [("RGBY", Score::new(4, 0)), ("GRBY", Score::new(2, 2)), ("OPRG", Score::new(0, 2))];
        for (guess, expected) in cases {
            let guess = Code::parse(guess, &config).unwrap();
            assert_eq!(secret.score(&guess), expected);
            assert_eq!(score(&guess, secret.reveal()), expected);
        }
    }

    #[test]
    fn secrets_respect_configuration() {
        let mut rng = StdRng::seed_from_u64(7);
        for preset in Preset::ALL {
            let config = preset.configuration();
            for _ in 0..200 {
                let secret = generate_secret(&config, &mut rng);
                assert!(secret.reveal().fits(&config));
            }
        }
    }

    #[test]
    fn secrets_are_reproducible_with_a_seed() {
        let config = Configuration::default();
        let a = generate_secret(&config, &mut StdRng::seed_from_u64(42));
        let b = generate_secret(&config, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn secrets_cover_the_alphabet() {
        let config = Preset::Easy.configuration();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 3];
        for _ in 0..100 {
            for &s in generate_secret(&config, &mut rng).reveal().symbols() {
                seen[s as usize] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn new_game_rejects_invalid_configuration() {
        let config = Configuration {
            alphabet: Alphabet::palette(2).unwrap(),
            ..Configuration::default()
        };
        assert!(matches!(
            new_game(&config, &mut StdRng::seed_from_u64(0)),
            Err(SolverError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn manual_game_loop_finds_secret() {
        let config = Configuration::default();
        let (secret, mut pool) = new_game(&config, &mut StdRng::seed_from_u64(3)).unwrap();

        let mut previous = pool.remaining();
        for _ in 0..config.max_rounds {
            let guess = next_guess(&pool).unwrap();
            let observed = secret.score(&guess);
            if observed.is_solved(config.code_length) {
                assert_eq!(&guess, secret.reveal());
                return;
            }
            let remaining = play_round(&mut pool, &guess, observed).unwrap();
            assert!(remaining < previous);
            previous = remaining;
        }
        panic!("secret not found within {} rounds", config.max_rounds);
    }

    #[test]
    fn play_round_is_idempotent() {
        let config = Configuration::default();
        let (secret, mut pool) = new_game(&config, &mut StdRng::seed_from_u64(9)).unwrap();
        let guess = Code::from_indices([0, 1, 2, 3]);
        let observed = secret.score(&guess);

        let first = play_round(&mut pool, &guess, observed).unwrap();
        let second = play_round(&mut pool, &guess, observed).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn play_round_rejects_guess_of_wrong_length() {
        let config = Configuration::default();
        let (_, mut pool) = new_game(&config, &mut StdRng::seed_from_u64(4)).unwrap();

        let result = play_round(&mut pool, &Code::from_indices([0, 1, 2]), Score::new(3, 0));

        assert!(matches!(
            result,
            Err(SolverError::LengthMismatch { expected: 4, got: 3 })
        ));
        assert_eq!(pool.remaining(), 360);
    }
}
