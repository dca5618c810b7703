//! Gmail Account Simulator
//!
//! A simulation tool that fabricates fake Gmail-style account records in batch,
//! for populating demos, load tests, and UI mockups with plausible data.
//!
//! # Overview
//!
//! This library generates complete fake account records: fabricated names, a
//! collision-free username, a `@gmail.com` address, a pool-based password, a
//! recovery address on a rotated alternate domain, and a demo verification
//! flag. Nothing here talks to any real service; every record is invented
//! locally.
//!
//! ## Key Features
//!
//! - **Fabricated Identities**: Names drawn from realistic name lists with
//!   collision-tracked username allocation
//! - **Password Construction**: Four character pools with a guaranteed pick
//!   from each, backed by OS entropy
//! - **Reproducible Identities**: An optional seed replays the same name and
//!   address sequence while passwords stay fresh
//! - **Batch Export**: JSON and CSV writers with stable key and column order
//! - **Run Summaries**: Per-run metrics with report and table rendering
//! - **Configurable Runs**: Layered configuration from file, flags, and
//!   defaults with validation
//!
//! ## Quick Start
//!
//! ```rust
//! use gmail_account_simulator::*;
//!
//! // Create a run configuration
//! let config = SimulatorConfig {
//!     count: 3,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! // Execute the run
//! let mut runner = SimulationRunner::new(config);
//! let accounts = runner.run()?;
//!
//! // Summarize the results
//! let summary = runner.summarize(&accounts);
//! println!("Generated {} accounts", summary.total_accounts);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Core types, identifiers, and configuration
//! - [`account`]: Account records, passwords, usernames, and generation
//! - [`export`]: JSON and CSV serialization to disk
//! - [`simulation`]: Run orchestration, summaries, errors, and logging
//!
//! ## Architecture
//!
//! The library follows a modular architecture with clear separation of concerns:
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │   Account   │
//! │             │    │             │
//! │ Identifiers │◄───┤ Generator   │
//! │ Enums       │    │ Passwords   │
//! │ Config      │    │ Usernames   │
//! └─────────────┘    └─────────────┘
//!        ▲                   ▲
//!        │                   │
//! ┌─────────────┐    ┌─────────────┐
//! │   Export    │    │ Simulation  │
//! │             │    │             │
//! │ JSON        │◄───┤ Runner      │
//! │ CSV         │    │ Summary     │
//! └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod account;
pub mod export;
pub mod simulation;

pub mod types;

// Re-export all public types for convenience

// Core types and identifiers
pub use types::{
    CliArgs,
    ConfigError,
    ConfigFile,
    ConfigValidationError,
    OutputFormat,
    // Identifiers
    RunId,
    // Configuration
    SimulatorConfig,
};

// Account types and functionality
pub use account::{build_password, Account, AccountGenerator, AccountStats, UsernameAllocator};

// Export functionality
pub use export::{export_accounts, export_csv, export_json};

// Simulation types and functionality
pub use simulation::{
    render_accounts_table, LoggingConfig, RunSummary, SimulationRunner, SimulatorError,
    SimulatorResult,
};
