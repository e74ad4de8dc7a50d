//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account and Money types
//! - `error`: Error types for the ledger

pub mod account;
pub mod error;

pub use account::{Account, AccountName, Money};
pub use error::LedgerError;
