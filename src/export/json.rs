//! JSON export
//!
//! Writes a batch as a pretty-printed JSON array. The target file is
//! created fresh on every export, so an existing file is overwritten.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::account::Account;
use crate::simulation::error::{SimulatorError, SimulatorResult};

/// Export a batch of accounts as a JSON array
///
/// An empty batch still produces a file containing `[]`.
pub fn export_json<P: AsRef<Path>>(accounts: &[Account], output_path: P) -> SimulatorResult<()> {
    let path = output_path.as_ref();

    let file = File::create(path).map_err(|e| {
        SimulatorError::ExportError(format!(
            "Failed to create JSON output file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, accounts)?;
    writer.flush()?;

    info!("Exported {} accounts to {}", accounts.len(), path.display());
    Ok(())
}
