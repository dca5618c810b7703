//! Core account record and methods
//!
//! This module contains the Account struct and its record-level operations.

use serde::{Deserialize, Serialize};
use tracing::info;

/// A fabricated account record
///
/// Field declaration order doubles as the key order for JSON export and the
/// column order for CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Fabricated first name
    pub first_name: String,
    /// Fabricated last name
    pub last_name: String,
    /// Primary address, always `<username>@gmail.com`
    pub email: String,
    /// Generated password
    pub password: String,
    /// Recovery address, the same username at a rotated alternate domain
    pub recovery_email: String,
    /// Whether the demo phone-verification flag has been flipped
    pub phone_verified: bool,
}

impl Account {
    /// The username local part shared by `email` and `recovery_email`
    pub fn username(&self) -> &str {
        self.email
            .split_once('@')
            .map(|(local, _)| local)
            .unwrap_or(&self.email)
    }

    /// Flip the demo phone-verification flag
    ///
    /// Only edits this fake record. Idempotent; the flag never moves back
    /// to false.
    pub fn mark_phone_verified_demo(&mut self) {
        if self.phone_verified {
            return;
        }
        self.phone_verified = true;
        info!("Marking phone verification as TRUE for {} [DEMO]", self.email);
    }

    /// CSV column names, in record key order
    pub fn csv_columns() -> &'static [&'static str] {
        &[
            "first_name",
            "last_name",
            "email",
            "password",
            "recovery_email",
            "phone_verified",
        ]
    }

    /// Look up a column value by name
    ///
    /// Returns None for columns this record does not carry, so rows built
    /// from a header silently drop unknown keys.
    pub fn csv_value(&self, column: &str) -> Option<String> {
        match column {
            "first_name" => Some(self.first_name.clone()),
            "last_name" => Some(self.last_name.clone()),
            "email" => Some(self.email.clone()),
            "password" => Some(self.password.clone()),
            "recovery_email" => Some(self.recovery_email.clone()),
            "phone_verified" => Some(self.phone_verified.to_string()),
            _ => None,
        }
    }
}
