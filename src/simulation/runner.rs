//! Simulation run orchestration
//!
//! This module contains the SimulationRunner that coordinates one
//! end-to-end generation run from resolved configuration to a finished
//! batch.

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument};

use crate::account::{Account, AccountGenerator};
use crate::simulation::error::{SimulatorError, SimulatorResult};
use crate::simulation::summary::RunSummary;
use crate::types::{RunId, SimulatorConfig};

/// Coordinates one generation run
#[derive(Debug)]
pub struct SimulationRunner {
    /// Resolved configuration for the run
    config: SimulatorConfig,
    /// Account generation engine
    generator: AccountGenerator,
    /// Identifier stamped on log output and the summary
    run_id: RunId,
    /// Wall-clock time of the most recent run
    last_run_duration: Duration,
}

impl SimulationRunner {
    /// Create a runner from resolved configuration
    #[instrument(skip(config), fields(count = config.count, password_length = config.password_length))]
    pub fn new(config: SimulatorConfig) -> Self {
        let generator = if let Some(seed) = config.seed {
            info!("Using deterministic seed: {}", seed);
            AccountGenerator::with_seed(seed)
        } else {
            debug!("Using entropy-based random seed");
            AccountGenerator::new()
        };
        let generator = generator.with_recovery_domains(config.recovery_domains.clone());

        Self {
            config,
            generator,
            run_id: RunId::new(),
            last_run_duration: Duration::ZERO,
        }
    }

    /// Identifier for this run
    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    /// Resolved configuration backing this run
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Execute the run and return the generated batch
    ///
    /// Oversized requests are refused before a single account is generated.
    #[instrument(skip(self), fields(run_id = %self.run_id))]
    pub fn run(&mut self) -> SimulatorResult<Vec<Account>> {
        if self.config.count > self.config.max_accounts {
            return Err(SimulatorError::RequestTooLarge {
                requested: self.config.count,
                maximum: self.config.max_accounts,
            });
        }

        info!(
            "Starting account generation run {} for {} accounts",
            self.run_id, self.config.count
        );
        let start_time = Instant::now();

        let mut accounts = self
            .generator
            .generate_accounts(self.config.count, self.config.password_length)?;

        if self.config.bypass_verification {
            info!(
                "Applying demo phone-verification bypass to {} accounts",
                accounts.len()
            );
            accounts = accounts
                .into_iter()
                .map(|account| self.generator.simulate_phone_verification_bypass(account))
                .collect();
        }

        self.last_run_duration = start_time.elapsed();

        info!(
            "Run {} generated {} accounts in {:.2} seconds",
            self.run_id,
            accounts.len(),
            self.last_run_duration.as_secs_f64()
        );

        Ok(accounts)
    }

    /// Summarize the most recent run
    pub fn summarize(&self, accounts: &[Account]) -> RunSummary {
        RunSummary::new(
            self.run_id,
            &self.generator.account_stats(accounts),
            self.last_run_duration,
        )
    }
}
