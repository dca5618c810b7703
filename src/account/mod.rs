//! Account domain module
//!
//! # Overview
//!
//! This module owns everything that makes up a fabricated account record:
//!
//! - **Account**: The record itself, with JSON key order and CSV column
//!   order fixed by field declaration order
//! - **AccountGenerator**: Batch engine combining fake names, username
//!   allocation, recovery-domain rotation, and password construction
//! - **UsernameAllocator**: Collision-tracked username allocation with a
//!   hex fallback once the numeric suffix space runs dry
//! - **build_password**: Pool-based password construction backed by OS
//!   entropy
//!
//! # Usage Example
//!
//! ```
//! use gmail_account_simulator::account::AccountGenerator;
//!
//! let mut generator = AccountGenerator::with_seed(42);
//! let account = generator.generate_account(12)?;
//!
//! assert!(account.email.ends_with("@gmail.com"));
//! assert_eq!(account.password.chars().count(), 12);
//! # Ok::<(), gmail_account_simulator::simulation::error::SimulatorError>(())
//! ```

#[allow(clippy::module_inception)]
pub mod account;
pub mod generator;
pub mod password;
pub mod username;

pub use account::Account;
pub use generator::{AccountGenerator, AccountStats};
pub use password::build_password;
pub use username::UsernameAllocator;
