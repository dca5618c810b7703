//! Run summaries and console rendering
//!
//! This module contains the per-run summary record and the plain-text
//! account table printed after generation.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::account::{Account, AccountStats};
use crate::types::RunId;

/// Summary of one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Identifier of the run this summary describes
    pub run_id: RunId,
    /// When the summary was produced
    pub generated_at: DateTime<Utc>,
    /// Records generated in the run
    pub total_accounts: usize,
    /// Records with the demo verification flag set
    pub verified_accounts: usize,
    /// Distinct usernames across the run
    pub unique_usernames: usize,
    /// Allocations that needed the hex fallback
    pub fallback_usernames: usize,
    /// Wall-clock time the run took
    pub run_duration: Duration,
}

impl RunSummary {
    /// Build a summary from batch stats
    pub fn new(run_id: RunId, stats: &AccountStats, run_duration: Duration) -> Self {
        Self {
            run_id,
            generated_at: Utc::now(),
            total_accounts: stats.total_accounts,
            verified_accounts: stats.verified_accounts,
            unique_usernames: stats.unique_usernames,
            fallback_usernames: stats.fallback_usernames,
            run_duration,
        }
    }

    /// Get the percentage of accounts with the demo verification flag set
    pub fn verified_percentage(&self) -> f64 {
        if self.total_accounts == 0 {
            0.0
        } else {
            (self.verified_accounts as f64 / self.total_accounts as f64) * 100.0
        }
    }

    /// Generate a comprehensive summary report
    pub fn generate_summary_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Account Simulation Summary ===\n\n");

        report.push_str(&format!("Run ID: {}\n", self.run_id));
        report.push_str(&format!(
            "Generated At: {}\n",
            self.generated_at.to_rfc3339()
        ));
        report.push_str(&format!(
            "Run Duration: {:.2} seconds\n\n",
            self.run_duration.as_secs_f64()
        ));

        report.push_str("Account Breakdown:\n");
        report.push_str(&format!("  • Total Accounts: {}\n", self.total_accounts));
        report.push_str(&format!(
            "  • Verified (demo): {} ({:.1}%)\n",
            self.verified_accounts,
            self.verified_percentage()
        ));
        report.push_str(&format!(
            "  • Unique Usernames: {}\n",
            self.unique_usernames
        ));
        report.push_str(&format!(
            "  • Hex Fallback Usernames: {}\n",
            self.fallback_usernames
        ));

        report
    }

    /// Generate a compact one-line summary suitable for logging
    pub fn generate_compact_summary(&self) -> String {
        format!(
            "Run {}: {} accounts ({} verified, {} unique usernames, {} hex fallbacks) in {:.2}s",
            self.run_id,
            self.total_accounts,
            self.verified_accounts,
            self.unique_usernames,
            self.fallback_usernames,
            self.run_duration.as_secs_f64()
        )
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.generate_compact_summary())
    }
}

/// Render a batch as an aligned plain-text table
///
/// Column widths adapt to the widest cell. The verified column renders as
/// `yes [demo]` or `no` so the flag is never mistaken for a real
/// verification state.
pub fn render_accounts_table(accounts: &[Account]) -> String {
    const HEADERS: [&str; 6] = [
        "First Name",
        "Last Name",
        "Email",
        "Password",
        "Recovery Email",
        "Verified",
    ];

    let rows: Vec<[String; 6]> = accounts
        .iter()
        .map(|account| {
            [
                account.first_name.clone(),
                account.last_name.clone(),
                account.email.clone(),
                account.password.clone(),
                account.recovery_email.clone(),
                if account.phone_verified {
                    "yes [demo]".to_string()
                } else {
                    "no".to_string()
                },
            ]
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|header| header.len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let render_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
    };

    let header_cells: Vec<String> = HEADERS.iter().map(|header| header.to_string()).collect();
    let separator = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut table = String::new();
    table.push_str(&render_row(&header_cells));
    table.push('\n');
    table.push_str(&separator);
    table.push('\n');
    for row in &rows {
        table.push_str(&render_row(row));
        table.push('\n');
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountGenerator;

    fn sample_stats() -> AccountStats {
        AccountStats {
            total_accounts: 4,
            verified_accounts: 1,
            unique_usernames: 4,
            fallback_usernames: 0,
        }
    }

    #[test]
    fn test_verified_percentage() {
        let summary = RunSummary::new(RunId::new(), &sample_stats(), Duration::from_millis(50));
        assert!((summary.verified_percentage() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_verified_percentage_empty_run() {
        let stats = AccountStats {
            total_accounts: 0,
            verified_accounts: 0,
            unique_usernames: 0,
            fallback_usernames: 0,
        };
        let summary = RunSummary::new(RunId::new(), &stats, Duration::from_millis(1));
        assert_eq!(summary.verified_percentage(), 0.0);
    }

    #[test]
    fn test_summary_report_sections() {
        let summary = RunSummary::new(RunId::new(), &sample_stats(), Duration::from_millis(50));
        let report = summary.generate_summary_report();

        assert!(report.starts_with("=== Account Simulation Summary ==="));
        assert!(report.contains("Run ID: RUN_"));
        assert!(report.contains("Total Accounts: 4"));
        assert!(report.contains("Verified (demo): 1 (25.0%)"));
        assert!(report.contains("Unique Usernames: 4"));
    }

    #[test]
    fn test_compact_summary() {
        let summary = RunSummary::new(RunId::new(), &sample_stats(), Duration::from_millis(50));
        let compact = summary.generate_compact_summary();

        assert!(compact.contains("4 accounts"));
        assert!(compact.contains("1 verified"));
        assert_eq!(compact, summary.to_string());
    }

    #[test]
    fn test_summary_serialization_roundtrip() {
        let summary = RunSummary::new(RunId::new(), &sample_stats(), Duration::from_millis(50));
        let json = serde_json::to_string(&summary).unwrap();
        let restored: RunSummary = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.run_id, summary.run_id);
        assert_eq!(restored.total_accounts, summary.total_accounts);
        assert_eq!(restored.run_duration, summary.run_duration);
    }

    #[test]
    fn test_table_rendering() {
        let mut generator = AccountGenerator::with_seed(61);
        let mut accounts = generator.generate_accounts(3, 12).unwrap();
        accounts[1].mark_phone_verified_demo();

        let table = render_accounts_table(&accounts);
        let lines: Vec<&str> = table.lines().collect();

        // Header, separator, and one line per record
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("First Name"));
        assert!(lines[0].contains("Verified"));
        assert!(lines[1].chars().all(|c| c == '-' || c == '+'));
        assert_eq!(lines[0].len(), lines[1].len());

        assert!(lines[3].contains("yes [demo]"));
        assert!(lines[2].contains("no"));
        for line in &lines[2..] {
            assert!(line.contains("@gmail.com"));
        }
    }

    #[test]
    fn test_table_rendering_empty_batch() {
        let table = render_accounts_table(&[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("First Name"));
    }
}
