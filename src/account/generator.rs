//! Account generation engine
//!
//! Produces complete fake account records by combining fabricated names,
//! allocated usernames, rotated recovery domains, and generated passwords.

use std::collections::HashSet;
use std::fmt;

use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{RngCore, SeedableRng};
use tracing::debug;

use crate::account::account::Account;
use crate::account::password::build_password;
use crate::account::username::UsernameAllocator;
use crate::simulation::error::{SimulatorError, SimulatorResult};
use crate::types::config::defaults;

/// Generates fake account records
///
/// Names, username suffixes, and recovery-domain picks draw from the
/// generator's rng, which can be seeded for reproducible identities.
/// Password characters always come from OS entropy, so passwords are never
/// reproducible even under a fixed seed.
pub struct AccountGenerator {
    rng: Box<dyn RngCore>,
    allocator: UsernameAllocator,
    recovery_domains: Vec<String>,
}

impl AccountGenerator {
    /// Create a generator backed by thread-local entropy
    pub fn new() -> Self {
        Self::from_rng(Box::new(rand::thread_rng()))
    }

    /// Create a generator with a fixed seed for reproducible identities
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(Box::new(StdRng::seed_from_u64(seed)))
    }

    fn from_rng(rng: Box<dyn RngCore>) -> Self {
        Self {
            rng,
            allocator: UsernameAllocator::new(),
            recovery_domains: defaults::RECOVERY_DOMAINS
                .iter()
                .map(|domain| domain.to_string())
                .collect(),
        }
    }

    /// Replace the recovery domain rotation list
    pub fn with_recovery_domains(mut self, domains: Vec<String>) -> Self {
        self.recovery_domains = domains;
        self
    }

    /// Generate one account record
    pub fn generate_account(&mut self, password_length: usize) -> SimulatorResult<Account> {
        let first_name: String = FirstName().fake_with_rng(&mut *self.rng);
        let last_name: String = LastName().fake_with_rng(&mut *self.rng);

        let username = self
            .allocator
            .allocate(&mut *self.rng, &first_name, &last_name);
        let email = format!("{}@gmail.com", username);

        let domain = self
            .recovery_domains
            .choose(&mut *self.rng)
            .ok_or_else(|| SimulatorError::generation_error("recovery domain list is empty"))?;
        let recovery_email = format!("{}@{}", username, domain);

        let password = build_password(&mut *self.rng, password_length)?;

        Ok(Account {
            first_name,
            last_name,
            email,
            password,
            recovery_email,
            phone_verified: false,
        })
    }

    /// Generate a batch of account records
    ///
    /// A zero count yields an empty batch without touching the rng.
    pub fn generate_accounts(
        &mut self,
        count: usize,
        password_length: usize,
    ) -> SimulatorResult<Vec<Account>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let mut accounts = Vec::with_capacity(count);
        for _ in 0..count {
            accounts.push(self.generate_account(password_length)?);
        }

        debug!("Generated batch of {} accounts", accounts.len());
        Ok(accounts)
    }

    /// Flip the demo phone-verification flag on a record
    ///
    /// Pure record edit; no external system is involved.
    pub fn simulate_phone_verification_bypass(&self, mut account: Account) -> Account {
        account.mark_phone_verified_demo();
        account
    }

    /// Number of distinct usernames handed out by this generator
    pub fn unique_username_count(&self) -> usize {
        self.allocator.len()
    }

    /// Summarize a batch produced by this generator
    pub fn account_stats(&self, accounts: &[Account]) -> AccountStats {
        let usernames: HashSet<&str> = accounts.iter().map(|account| account.username()).collect();

        AccountStats {
            total_accounts: accounts.len(),
            verified_accounts: accounts
                .iter()
                .filter(|account| account.phone_verified)
                .count(),
            unique_usernames: usernames.len(),
            fallback_usernames: self.allocator.fallback_count(),
        }
    }
}

impl Default for AccountGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AccountGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountGenerator")
            .field("allocated_usernames", &self.allocator.len())
            .field("recovery_domains", &self.recovery_domains)
            .finish()
    }
}

/// Aggregate numbers for a generated batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountStats {
    /// Records in the batch
    pub total_accounts: usize,
    /// Records with the demo verification flag set
    pub verified_accounts: usize,
    /// Distinct usernames across the batch
    pub unique_usernames: usize,
    /// Allocations that needed the hex fallback
    pub fallback_usernames: usize,
}

impl fmt::Display for AccountStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verified_pct = if self.total_accounts == 0 {
            0.0
        } else {
            (self.verified_accounts as f64 / self.total_accounts as f64) * 100.0
        };

        writeln!(f, "Account Generation Stats:")?;
        writeln!(f, "  Total accounts: {}", self.total_accounts)?;
        writeln!(
            f,
            "  Verified (demo): {} ({:.1}%)",
            self.verified_accounts, verified_pct
        )?;
        writeln!(f, "  Unique usernames: {}", self.unique_usernames)?;
        write!(f, "  Hex fallback usernames: {}", self.fallback_usernames)
    }
}
