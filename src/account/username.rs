//! Username allocation with collision tracking
//!
//! Allocates usernames of the form `<first>.<last><3 digits>` and keeps a
//! used-set so one generator never hands out the same username twice. When
//! the numeric suffix space for a name pair is exhausted the allocator falls
//! back to a hex suffix drawn from OS entropy.

use std::collections::HashSet;

use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use tracing::debug;

/// Suffix draws attempted before giving up on the numeric space
pub const MAX_SUFFIX_ATTEMPTS: usize = 10_000;

/// Tracks every username handed out within one generator's lifetime
#[derive(Debug, Clone, Default)]
pub struct UsernameAllocator {
    used: HashSet<String>,
    fallback_count: usize,
}

impl UsernameAllocator {
    /// Create an empty allocator
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a unique username for a name pair
    ///
    /// The base is the lowercased first and last name joined with a dot.
    /// Numeric suffixes in 100..=999 come from the caller's rng; the hex
    /// fallback draws from OS entropy and is accepted without a used-set
    /// check.
    pub fn allocate(&mut self, rng: &mut dyn RngCore, first_name: &str, last_name: &str) -> String {
        let base = format!(
            "{}.{}",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );

        for _ in 0..MAX_SUFFIX_ATTEMPTS {
            let candidate = format!("{}{}", base, rng.gen_range(100..=999));
            if !self.used.contains(&candidate) {
                self.used.insert(candidate.clone());
                return candidate;
            }
        }

        let fallback = format!("{}{:04x}", base, OsRng.gen::<u16>());
        debug!("Numeric suffixes exhausted for '{}', using hex fallback", base);
        self.fallback_count += 1;
        self.used.insert(fallback.clone());
        fallback
    }

    /// Number of usernames handed out so far
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Whether no usernames have been handed out yet
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Whether a specific username has already been handed out
    pub fn contains(&self, username: &str) -> bool {
        self.used.contains(username)
    }

    /// Number of allocations that needed the hex fallback
    pub fn fallback_count(&self) -> usize {
        self.fallback_count
    }
}
