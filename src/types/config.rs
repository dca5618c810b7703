//! Configuration structures for the account simulator
//!
//! This module contains the simulator configuration structure and validation
//! logic used to control batch size, password policy, export behavior, and
//! reproducibility of account generation.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Generation limits and default tunables
pub mod defaults {
    /// Default number of accounts per run
    pub const ACCOUNT_COUNT: usize = 5;

    /// Default generated password length
    pub const PASSWORD_LENGTH: usize = 12;

    /// Minimum password length accepted by the password builder
    pub const MIN_PASSWORD_LENGTH: usize = 8;

    /// Maximum password length accepted by the CLI
    pub const MAX_PASSWORD_LENGTH: usize = 128;

    /// Maximum number of accounts a single run may request
    pub const MAX_ACCOUNTS_PER_RUN: usize = 1000;

    /// Environment variable that acknowledges the simulation notice
    pub const ACKNOWLEDGE_ENV_VAR: &str = "GMAIL_SIM_I_UNDERSTAND_SIMULATION";

    /// Recovery email domains rotated through when none are configured
    pub const RECOVERY_DOMAINS: [&str; 5] = [
        "outlook.com",
        "yahoo.com",
        "proton.me",
        "zoho.com",
        "example.com",
    ];
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gmail-account-simulator",
    version = "1.0.0",
    about = "Gmail Account Simulator - Fabricates fake account records for demos and testing",
    long_about = "Fabricates batches of fake Gmail-style account records (names, emails, passwords, recovery addresses) for demos, testing, and training material. Every record is synthetic; nothing is created or registered anywhere.

EXAMPLES:
    # Generate five accounts with default settings
    gmail-account-simulator

    # Generate ten accounts and export them as JSON
    gmail-account-simulator --count 10 --output-format json

    # Reproducible identities
    gmail-account-simulator --count 3 --seed 123

    # Use a configuration file
    gmail-account-simulator --config config.json

    # Generate configuration template
    gmail-account-simulator --print-config > my-config.json

    # Validate configuration without generating
    gmail-account-simulator --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of accounts to generate
    #[arg(
        short,
        long,
        help = "Number of accounts to generate",
        long_help = "Number of fake accounts to fabricate in this run. Must be between 1 and the configured maximum (default: 1000). Default: 5"
    )]
    pub count: Option<usize>,

    /// Output format for exported accounts
    #[arg(
        short,
        long,
        help = "Output format (json or csv)",
        long_help = "Export format for generated accounts. Supported formats: json, csv. When omitted, no file is written."
    )]
    pub output_format: Option<String>,

    /// Output path for exported accounts
    #[arg(
        long,
        help = "Output path for exported accounts",
        long_help = "Path of the export file. Defaults to generated_accounts.json or generated_accounts.csv depending on the chosen format."
    )]
    pub output_path: Option<String>,

    /// Length of generated passwords
    #[arg(
        long,
        help = "Length of generated passwords (8-128)",
        long_help = "Length of generated passwords. Must be between 8 and 128. Default: 12"
    )]
    pub password_length: Option<usize>,

    /// Random seed for reproducible results
    #[arg(
        long,
        help = "Random seed for reproducible identities",
        long_help = "Seed for the identity stream (names, username suffixes, recovery domains). Passwords stay unpredictable even with a fixed seed."
    )]
    pub seed: Option<u64>,

    /// Mark every generated account as phone verified (demo only)
    #[arg(
        long,
        help = "Mark generated accounts as phone verified (demo only)",
        long_help = "Flip the phone_verified flag on every generated record. This only edits the fake data; no verification of any kind takes place."
    )]
    pub bypass_verification: bool,

    /// Acknowledge the simulation notice
    #[arg(
        long,
        help = "Acknowledge the simulation notice and silence the reminder",
        long_help = "Confirms you understand this tool only fabricates data. Setting the GMAIL_SIM_I_UNDERSTAND_SIMULATION environment variable has the same effect."
    )]
    pub acknowledge_simulation: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without generating accounts
    #[arg(long, help = "Validate configuration without generating accounts")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of accounts to generate
    pub count: Option<usize>,

    /// Length of generated passwords
    pub password_length: Option<usize>,

    /// Random seed for reproducible identity streams
    pub seed: Option<u64>,

    /// Output format for exported accounts
    pub output_format: Option<String>,

    /// Output path for exported accounts
    pub output_path: Option<String>,

    /// Maximum number of accounts a single run may request
    pub max_accounts: Option<usize>,

    /// Recovery email domains to rotate through
    pub recovery_domains: Option<Vec<String>>,

    /// Mark every generated account as phone verified (demo only)
    pub bypass_verification: Option<bool>,

    /// Acknowledge the simulation notice
    pub acknowledge_simulation: Option<bool>,
}

/// Configuration for the account simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Number of accounts to generate
    pub count: usize,

    /// Length of generated passwords
    pub password_length: usize,

    /// Random seed for reproducible identity streams
    pub seed: Option<u64>,

    /// Output format for exported accounts (json or csv); no export when unset
    pub output_format: Option<String>,

    /// Output path for exported accounts
    pub output_path: Option<String>,

    /// Maximum number of accounts a single run may request
    pub max_accounts: usize,

    /// Recovery email domains to rotate through
    pub recovery_domains: Vec<String>,

    /// Mark every generated account as phone verified (demo only)
    pub bypass_verification: bool,

    /// Acknowledge the simulation notice
    pub acknowledge_simulation: bool,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulator configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Account count is invalid
    #[error("Account count must be greater than 0, got {0}")]
    InvalidCount(usize),

    /// Maximum account limit is invalid
    #[error("Maximum accounts per run must be greater than 0, got {0}")]
    InvalidMaxAccounts(usize),

    /// Password length is out of range
    #[error("Password length must be between {minimum} and {maximum}, got {length}")]
    InvalidPasswordLength {
        /// The rejected password length
        length: usize,
        /// Smallest accepted length
        minimum: usize,
        /// Largest accepted length
        maximum: usize,
    },

    /// Output format string is not recognized
    #[error("Unknown output format: {0} (supported: json, csv)")]
    InvalidOutputFormat(String),

    /// No recovery domains to rotate through
    #[error("Recovery domain list must not be empty")]
    EmptyRecoveryDomains,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            count: defaults::ACCOUNT_COUNT,
            password_length: defaults::PASSWORD_LENGTH,
            seed: None,
            output_format: None,
            output_path: None,
            max_accounts: defaults::MAX_ACCOUNTS_PER_RUN,
            recovery_domains: defaults::RECOVERY_DOMAINS
                .iter()
                .map(|domain| domain.to_string())
                .collect(),
            bypass_verification: false,
            acknowledge_simulation: false,
        }
    }
}

impl SimulatorConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            count: config_file.count.unwrap_or(defaults.count),
            password_length: config_file
                .password_length
                .unwrap_or(defaults.password_length),
            seed: config_file.seed.or(defaults.seed),
            output_format: config_file.output_format.or(defaults.output_format),
            output_path: config_file.output_path.or(defaults.output_path),
            max_accounts: config_file.max_accounts.unwrap_or(defaults.max_accounts),
            recovery_domains: config_file
                .recovery_domains
                .unwrap_or(defaults.recovery_domains),
            bypass_verification: config_file
                .bypass_verification
                .unwrap_or(defaults.bypass_verification),
            acknowledge_simulation: config_file
                .acknowledge_simulation
                .unwrap_or(defaults.acknowledge_simulation),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.count {
            config.count = value;
        }
        if let Some(value) = args.password_length {
            config.password_length = value;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.output_format {
            config.output_format = Some(value);
        }
        if let Some(value) = args.output_path {
            config.output_path = Some(value);
        }

        // Flags can only turn behavior on; absent flags keep file/default values
        if args.bypass_verification {
            config.bypass_verification = true;
        }
        if args.acknowledge_simulation {
            config.acknowledge_simulation = true;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        // Validate account count
        if self.count == 0 {
            return Err(ConfigValidationError::InvalidCount(self.count));
        }

        // Validate the per-run limit
        if self.max_accounts == 0 {
            return Err(ConfigValidationError::InvalidMaxAccounts(self.max_accounts));
        }

        // Validate password length range
        if self.password_length < defaults::MIN_PASSWORD_LENGTH
            || self.password_length > defaults::MAX_PASSWORD_LENGTH
        {
            return Err(ConfigValidationError::InvalidPasswordLength {
                length: self.password_length,
                minimum: defaults::MIN_PASSWORD_LENGTH,
                maximum: defaults::MAX_PASSWORD_LENGTH,
            });
        }

        // Validate output format when one was requested
        if let Some(format) = &self.output_format {
            if format.parse::<OutputFormat>().is_err() {
                return Err(ConfigValidationError::InvalidOutputFormat(format.clone()));
            }
        }

        // Validate recovery domain rotation
        if self.recovery_domains.is_empty() {
            return Err(ConfigValidationError::EmptyRecoveryDomains);
        }

        Ok(())
    }

    /// Get the export format as an enum value, if exporting was requested
    pub fn get_output_format(&self) -> Result<Option<OutputFormat>, String> {
        match &self.output_format {
            Some(raw) => raw.parse::<OutputFormat>().map(Some),
            None => Ok(None),
        }
    }

    /// Resolve the export path: the explicit output path or the format default
    pub fn export_path(&self, format: OutputFormat) -> String {
        match &self.output_path {
            Some(path) => path.clone(),
            None => format!("generated_accounts.{}", format.file_extension()),
        }
    }

    /// Whether the simulation notice was acknowledged via flag or environment
    pub fn simulation_acknowledged(&self) -> bool {
        if self.acknowledge_simulation {
            return true;
        }
        std::env::var(defaults::ACKNOWLEDGE_ENV_VAR)
            .map(|value| !value.is_empty())
            .unwrap_or(false)
    }
}
