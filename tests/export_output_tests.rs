//! Tests for JSON and CSV export behavior
//!
//! These tests verify export files on disk: array layout and key order for
//! JSON, header and quoting rules for CSV, and the empty-batch contracts.

use gmail_account_simulator::account::{Account, AccountGenerator};
use gmail_account_simulator::export::{export_accounts, export_csv, export_json};
use gmail_account_simulator::types::OutputFormat;
use tempfile::Builder;

fn generate_batch(count: usize) -> Vec<Account> {
    let mut generator = AccountGenerator::with_seed(300);
    generator.generate_accounts(count, 12).unwrap()
}

/// Test a full JSON round trip through the filesystem
#[test]
fn test_json_export_round_trip() {
    let accounts = generate_batch(5);

    let file = Builder::new().suffix(".json").tempfile().unwrap();
    export_json(&accounts, file.path()).unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    let restored: Vec<Account> = serde_json::from_str(&contents).unwrap();
    assert_eq!(restored, accounts);
}

/// Test that JSON objects keep the record key order
#[test]
fn test_json_export_key_order() {
    let accounts = generate_batch(1);

    let file = Builder::new().suffix(".json").tempfile().unwrap();
    export_json(&accounts, file.path()).unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    let keys = [
        "\"first_name\"",
        "\"last_name\"",
        "\"email\"",
        "\"password\"",
        "\"recovery_email\"",
        "\"phone_verified\"",
    ];
    let positions: Vec<usize> = keys.iter().map(|key| contents.find(key).unwrap()).collect();
    for pair in positions.windows(2) {
        assert!(pair[0] < pair[1], "JSON keys out of order");
    }
}

/// Test that an empty batch still produces a JSON array
#[test]
fn test_json_export_empty_batch() {
    let file = Builder::new().suffix(".json").tempfile().unwrap();
    export_json(&[], file.path()).unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    assert_eq!(contents.trim(), "[]");
}

/// Test the CSV header row and row count
#[test]
fn test_csv_export_header_and_rows() {
    let accounts = generate_batch(4);

    let file = Builder::new().suffix(".csv").tempfile().unwrap();
    export_csv(&accounts, file.path()).unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "first_name,last_name,email,password,recovery_email,phone_verified"
    );
    for line in &lines[1..] {
        assert_eq!(line.matches("@gmail.com").count(), 1);
        assert!(line.ends_with(",false"));
    }
}

/// Test that an empty batch creates no CSV file at all
#[test]
fn test_csv_export_empty_batch_creates_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("accounts.csv");

    export_csv(&[], &path).unwrap();
    assert!(!path.exists());
}

/// Test CSV quoting rules on fields containing delimiters and quotes
#[test]
fn test_csv_quoting_rules() {
    let account = Account {
        first_name: "Ann".to_string(),
        last_name: "Lee, Jr".to_string(),
        email: "annlee123@gmail.com".to_string(),
        password: "say\"hi\"2Me!".to_string(),
        recovery_email: "annlee123@outlook.com".to_string(),
        phone_verified: false,
    };

    let file = Builder::new().suffix(".csv").tempfile().unwrap();
    export_csv(&[account], file.path()).unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    let row = contents.lines().nth(1).unwrap();

    // Comma-bearing field is quoted, quote-bearing field doubles its quotes
    assert!(row.contains("\"Lee, Jr\""));
    assert!(row.contains("\"say\"\"hi\"\"2Me!\""));
    // Untouched fields stay bare
    assert!(row.starts_with("Ann,"));
}

/// Test that exports overwrite an existing file
#[test]
fn test_export_overwrites_existing_file() {
    let big_batch = generate_batch(6);
    let small_batch = generate_batch(2);

    let file = Builder::new().suffix(".json").tempfile().unwrap();
    export_json(&big_batch, file.path()).unwrap();
    export_json(&small_batch, file.path()).unwrap();

    let contents = std::fs::read_to_string(file.path()).unwrap();
    let restored: Vec<Account> = serde_json::from_str(&contents).unwrap();
    assert_eq!(restored.len(), 2);
    assert_eq!(restored, small_batch);
}

/// Test the format dispatcher writes the right flavor
#[test]
fn test_export_accounts_dispatch() {
    let accounts = generate_batch(2);

    let json_file = Builder::new().suffix(".json").tempfile().unwrap();
    export_accounts(&accounts, OutputFormat::Json, json_file.path()).unwrap();
    let json_contents = std::fs::read_to_string(json_file.path()).unwrap();
    assert!(json_contents.trim_start().starts_with('['));

    let csv_file = Builder::new().suffix(".csv").tempfile().unwrap();
    export_accounts(&accounts, OutputFormat::Csv, csv_file.path()).unwrap();
    let csv_contents = std::fs::read_to_string(csv_file.path()).unwrap();
    assert!(csv_contents.starts_with("first_name,"));
}

/// Test that the verified flag lands in both export flavors
#[test]
fn test_verified_flag_round_trips_through_exports() {
    let mut accounts = generate_batch(2);
    accounts[0].mark_phone_verified_demo();

    let json_file = Builder::new().suffix(".json").tempfile().unwrap();
    export_json(&accounts, json_file.path()).unwrap();
    let restored: Vec<Account> =
        serde_json::from_str(&std::fs::read_to_string(json_file.path()).unwrap()).unwrap();
    assert!(restored[0].phone_verified);
    assert!(!restored[1].phone_verified);

    let csv_file = Builder::new().suffix(".csv").tempfile().unwrap();
    export_csv(&accounts, csv_file.path()).unwrap();
    let csv_contents = std::fs::read_to_string(csv_file.path()).unwrap();
    let rows: Vec<&str> = csv_contents.lines().collect();
    assert!(rows[1].ends_with(",true"));
    assert!(rows[2].ends_with(",false"));
}
