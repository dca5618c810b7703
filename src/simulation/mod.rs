//! Simulation orchestration and control
//!
//! This module contains the run orchestration, summary reporting, error
//! handling, and logging setup.
//!
//! # Overview
//!
//! The simulation module drives the account generation run end to end:
//!
//! - **SimulationRunner**: Controller that turns resolved configuration into
//!   a generated batch
//! - **RunSummary**: Per-run metrics with report rendering
//! - **SimulatorError**: Comprehensive error handling for simulator operations
//! - **LoggingConfig**: Structured logging setup built on tracing
//!
//! # Usage Example
//!
//! ```rust
//! use gmail_account_simulator::simulation::*;
//! use gmail_account_simulator::types::*;
//!
//! // Create run configuration
//! let config = SimulatorConfig {
//!     count: 3,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! // Execute the run
//! let mut runner = SimulationRunner::new(config);
//! let accounts = runner.run().unwrap();
//!
//! let summary = runner.summarize(&accounts);
//! assert_eq!(summary.total_accounts, 3);
//! ```

pub mod error;
pub mod logging;
pub mod runner;
pub mod summary;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use runner::*;
pub use summary::*;
