// Gmail Account Simulator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/gmail-account-simulator
// ```
//
// Or with custom configuration:
//
// ```console
// $ ./target/release/gmail-account-simulator --count 10 --output-format json --verbose
// ```

use gmail_account_simulator::export::export_accounts;
use gmail_account_simulator::simulation::{
    render_accounts_table, LoggingConfig, SimulationRunner, SimulatorError,
};
use gmail_account_simulator::types::config::{defaults, CliArgs};
use gmail_account_simulator::types::SimulatorConfig;
use clap::Parser;
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = SimulatorConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().with_level(tracing::Level::WARN).init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Gmail Account Simulator");

    // Load configuration from CLI arguments and optional config file
    let config = match SimulatorConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - accounts will not be generated.");
        print_configuration_summary(&config);
        return;
    }

    // Refuse oversized requests before the banner so nothing else runs
    if config.count > config.max_accounts {
        eprintln!(
            "Refusing to generate {} accounts: limit is {} per run",
            config.count, config.max_accounts
        );
        process::exit(2);
    }

    // Print startup banner and configuration
    print_startup_banner(&config);

    // Run the generation
    let mut runner = SimulationRunner::new(config.clone());
    let accounts = match runner.run() {
        Ok(accounts) => accounts,
        Err(e) => {
            error!("Account generation failed: {}", e);
            eprintln!("{}", e);
            match e {
                SimulatorError::RequestTooLarge { .. } => process::exit(2),
                _ => process::exit(1),
            }
        }
    };

    for (index, account) in accounts.iter().enumerate() {
        eprintln!("[{}/{}] Created {}", index + 1, accounts.len(), account.email);
    }
    eprintln!();

    // Results table goes to stdout; everything else stays on stderr
    println!("{}", render_accounts_table(&accounts));

    // Export when a format was chosen
    match config.get_output_format() {
        Ok(Some(format)) => {
            let output_path = config.export_path(format);
            if let Err(e) = export_accounts(&accounts, format, &output_path) {
                error!("Failed to export accounts: {}", e);
                process::exit(1);
            }
            eprintln!("Accounts written to: {}", output_path);
        }
        Ok(None) => {
            info!("No output format requested, skipping file export");
        }
        Err(e) => {
            error!("Failed to resolve output format: {}", e);
            process::exit(1);
        }
    }

    // Print the run summary
    let summary = runner.summarize(&accounts);
    eprintln!("{}", summary.generate_summary_report());
    info!("{}", summary.generate_compact_summary());

    info!("Gmail Account Simulator completed successfully");
}

/// Print startup banner, simulation disclaimer, and configuration summary
fn print_startup_banner(config: &SimulatorConfig) {
    eprintln!("Gmail Account Simulator");
    eprintln!("=======================");
    eprintln!("Fabricates fake account records for demos and testing");
    eprintln!();
    eprintln!("SIMULATION ONLY: this tool invents data locally. It does not create");
    eprintln!("real Gmail accounts, does not contact Google, and does not bypass");
    eprintln!("any verification or security measure.");
    eprintln!();

    if !config.simulation_acknowledged() {
        eprintln!(
            "Tip: pass --acknowledge-simulation (or set {}) to silence this notice.",
            defaults::ACKNOWLEDGE_ENV_VAR
        );
        eprintln!();
    }

    print_configuration_summary(config);
}

/// Print configuration summary
fn print_configuration_summary(config: &SimulatorConfig) {
    eprintln!("Configuration:");
    eprintln!("  Account Count: {}", config.count);
    eprintln!("  Password Length: {}", config.password_length);
    eprintln!("  Max Accounts per Run: {}", config.max_accounts);
    eprintln!("  Recovery Domains: {}", config.recovery_domains.join(", "));
    match &config.output_format {
        Some(format) => eprintln!("  Output Format: {}", format),
        None => eprintln!("  Output Format: none (no file export)"),
    }
    if let Some(path) = &config.output_path {
        eprintln!("  Output Path: {}", path);
    }
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!(
        "  Bypass Verification (demo): {}",
        config.bypass_verification
    );
    eprintln!();
}
