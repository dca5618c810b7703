//! Password construction
//!
//! Builds passwords from four character pools and guarantees at least one
//! character from each pool. Character picks always come from the operating
//! system entropy source, so two runs with the same seed still produce
//! different passwords.

use rand::rngs::OsRng;
use rand::{Rng, RngCore};

use crate::simulation::error::{SimulatorError, SimulatorResult};
use crate::types::config::defaults::MIN_PASSWORD_LENGTH;

/// Lowercase ASCII letters
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Uppercase ASCII letters
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII digits
pub const DIGITS: &[u8] = b"0123456789";

/// Punctuation that survives shell quoting and form validators
pub const SAFE_SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{}";

const POOLS: [&[u8]; 4] = [LOWERCASE, UPPERCASE, DIGITS, SAFE_SYMBOLS];

/// Build a password of exactly `length` characters
///
/// The result contains at least one character from each of the four pools.
/// Remaining positions draw from the union of all pools, and the final
/// ordering is shuffled with the caller's rng so pool membership does not
/// leak through character positions.
///
/// Returns [`SimulatorError::InvalidLength`] when `length` is below the
/// minimum password length.
pub fn build_password(rng: &mut dyn RngCore, length: usize) -> SimulatorResult<String> {
    if length < MIN_PASSWORD_LENGTH {
        return Err(SimulatorError::InvalidLength {
            length,
            minimum: MIN_PASSWORD_LENGTH,
        });
    }

    let mut chars: Vec<char> = Vec::with_capacity(length);
    for pool in POOLS {
        chars.push(pick(pool));
    }

    let union: Vec<u8> = POOLS.concat();
    for _ in 0..(length - POOLS.len()) {
        chars.push(pick(&union));
    }

    use rand::seq::SliceRandom;
    chars.shuffle(rng);

    Ok(chars.into_iter().collect())
}

/// Draw one character from a pool using OS entropy
fn pick(pool: &[u8]) -> char {
    pool[OsRng.gen_range(0..pool.len())] as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_password_has_requested_length() {
        let mut rng = test_rng();
        for length in [MIN_PASSWORD_LENGTH, 12, 20, 64] {
            let password = build_password(&mut rng, length).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_password_contains_one_char_from_each_pool() {
        let mut rng = test_rng();
        for _ in 0..50 {
            let password = build_password(&mut rng, 12).unwrap();
            let bytes = password.as_bytes();
            for pool in POOLS {
                assert!(
                    bytes.iter().any(|b| pool.contains(b)),
                    "password {:?} is missing a pool character",
                    password
                );
            }
        }
    }

    #[test]
    fn test_password_uses_only_pool_characters() {
        let mut rng = test_rng();
        let union: Vec<u8> = POOLS.concat();
        let password = build_password(&mut rng, 32).unwrap();
        for byte in password.as_bytes() {
            assert!(union.contains(byte));
        }
    }

    #[test]
    fn test_minimum_length_boundary() {
        let mut rng = test_rng();
        assert!(build_password(&mut rng, MIN_PASSWORD_LENGTH).is_ok());

        let err = build_password(&mut rng, MIN_PASSWORD_LENGTH - 1).unwrap_err();
        match err {
            SimulatorError::InvalidLength { length, minimum } => {
                assert_eq!(length, MIN_PASSWORD_LENGTH - 1);
                assert_eq!(minimum, MIN_PASSWORD_LENGTH);
            }
            other => panic!("expected InvalidLength, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        let mut rng = test_rng();
        assert!(build_password(&mut rng, 0).is_err());
    }

    #[test]
    fn test_passwords_differ_across_calls() {
        let mut rng = test_rng();
        let first = build_password(&mut rng, 16).unwrap();
        let second = build_password(&mut rng, 16).unwrap();
        // OS entropy feeds every character pick, so a collision at length 16
        // would point at a broken pool sampler.
        assert_ne!(first, second);
    }

    #[test]
    fn test_same_seed_still_yields_fresh_passwords() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = build_password(&mut rng_a, 16).unwrap();
        let b = build_password(&mut rng_b, 16).unwrap();
        assert_ne!(a, b);
    }
}
