//! Core types and identifiers for the account simulator
//!
//! This module contains fundamental types, identifiers, and configuration
//! structures used throughout the simulation system.
//!
//! # Overview
//!
//! The types module provides the foundational data types for the simulator:
//!
//! - **Identifiers**: UUID-based run identifier for log correlation
//! - **Enums**: Type-safe enumeration of export output formats
//! - **Configuration**: Simulator configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use gmail_account_simulator::types::*;
//!
//! // Identify a generation run
//! let run_id = RunId::new();
//!
//! // Use enums for type safety
//! let format = OutputFormat::Json;
//!
//! // Configure the simulator
//! let config = SimulatorConfig {
//!     count: 10,
//!     password_length: 16,
//!     ..Default::default()
//! };
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
