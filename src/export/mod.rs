//! Export module
//!
//! # Overview
//!
//! Serializes generated batches to disk:
//!
//! - **export_json**: Pretty-printed JSON array, always written (empty
//!   batches produce `[]`)
//! - **export_csv**: Header plus one row per record with minimal quoting;
//!   empty batches create no file
//! - **export_accounts**: Dispatches on [`OutputFormat`]
//!
//! [`OutputFormat`]: crate::types::OutputFormat

pub mod csv;
pub mod json;

pub use csv::export_csv;
pub use json::export_json;

use std::path::Path;

use crate::account::Account;
use crate::simulation::error::SimulatorResult;
use crate::types::OutputFormat;

/// Export a batch in the requested format
pub fn export_accounts<P: AsRef<Path>>(
    accounts: &[Account],
    format: OutputFormat,
    output_path: P,
) -> SimulatorResult<()> {
    match format {
        OutputFormat::Json => export_json(accounts, output_path),
        OutputFormat::Csv => export_csv(accounts, output_path),
    }
}
