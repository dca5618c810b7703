//! CSV export
//!
//! Writes a batch as CSV with a header row and minimal quoting. Fields are
//! quoted only when they contain a delimiter, a quote, or a line break, and
//! inner quotes are doubled. Lines end with `\n`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::account::Account;
use crate::simulation::error::{SimulatorError, SimulatorResult};

/// Export a batch of accounts as CSV
///
/// An empty batch writes nothing at all; no file is created.
pub fn export_csv<P: AsRef<Path>>(accounts: &[Account], output_path: P) -> SimulatorResult<()> {
    let path = output_path.as_ref();

    if accounts.is_empty() {
        info!("No accounts to export, skipping CSV file creation");
        return Ok(());
    }

    let file = File::create(path).map_err(|e| {
        SimulatorError::ExportError(format!(
            "Failed to create CSV output file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    let columns = Account::csv_columns();
    writeln!(writer, "{}", columns.join(","))?;

    for account in accounts {
        let row: Vec<String> = columns
            .iter()
            .map(|column| escape_csv_field(&account.csv_value(column).unwrap_or_default()))
            .collect();
        writeln!(writer, "{}", row.join(","))?;
    }

    writer.flush()?;

    info!("Exported {} accounts to {}", accounts.len(), path.display());
    Ok(())
}

/// Quote a field only when it contains a delimiter, a quote, or a line break
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
