//! Error types for the bank ledger
//!
//! This module defines all error types that can occur while operating on
//! accounts. The `Display` text is meant for logs; the interactive session
//! maps each variant to its own user-facing message.
//!
//! # Error Categories
//!
//! - **Validation Errors**: empty name, duplicate name, unparsable or non-positive amount
//! - **Domain Errors**: insufficient funds, balance overflow
//! - **Storage Errors**: corrupt or unreadable records, unusable storage keys, I/O failures

use crate::types::Money;
use thiserror::Error;

/// Main error type for the ledger
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Account name is empty after trimming
    ///
    /// Recoverable: account creation asks for another name.
    #[error("Account name must not be empty")]
    InvalidName,

    /// An account with this name is already stored
    ///
    /// Recoverable: account creation asks for another name. The existing
    /// record is left untouched.
    #[error("Account '{name}' already exists")]
    AccountExists {
        /// The colliding name
        name: String,
    },

    /// No record is stored under this name
    #[error("Account '{name}' does not exist")]
    AccountNotFound {
        /// The name that was looked up
        name: String,
    },

    /// Amount text could not be parsed, is not positive, or has sub-cent digits
    #[error("Invalid amount '{input}'")]
    InvalidAmount {
        /// The text as typed by the user
        input: String,
    },

    /// Withdrawal larger than the current balance
    ///
    /// The record is left unchanged.
    #[error("Insufficient funds in '{name}': balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Account name
        name: String,
        /// Balance at the time of the request
        balance: Money,
        /// Requested withdrawal
        requested: Money,
    },

    /// Deposit would overflow the balance
    #[error("Deposit would overflow the balance of '{name}'")]
    BalanceOverflow {
        /// Account name
        name: String,
    },

    /// The stored record exists but cannot be read or parsed
    ///
    /// Never masked as a zero balance, and never overwritten by the ledger.
    #[error("Account '{name}' could not be read: {reason}")]
    CorruptRecord {
        /// Account name
        name: String,
        /// What went wrong while reading or decoding
        reason: String,
    },

    /// The name cannot be used as a file name inside the storage root
    #[error("'{name}' cannot be used as a storage key")]
    InvalidStorageKey {
        /// The rejected name
        name: String,
    },

    /// I/O error while writing records or talking to the terminal
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(error: serde_json::Error) -> Self {
        LedgerError::Io {
            message: format!("record serialization failed: {}", error),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an AccountExists error
    pub fn account_exists(name: &str) -> Self {
        LedgerError::AccountExists {
            name: name.to_string(),
        }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(name: &str) -> Self {
        LedgerError::AccountNotFound {
            name: name.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(input: &str) -> Self {
        LedgerError::InvalidAmount {
            input: input.to_string(),
        }
    }

    /// Create an InsufficientFunds error
    pub fn insufficient_funds(name: &str, balance: Money, requested: Money) -> Self {
        LedgerError::InsufficientFunds {
            name: name.to_string(),
            balance,
            requested,
        }
    }

    /// Create a BalanceOverflow error
    pub fn balance_overflow(name: &str) -> Self {
        LedgerError::BalanceOverflow {
            name: name.to_string(),
        }
    }

    /// Create a CorruptRecord error
    pub fn corrupt_record(name: &str, reason: &str) -> Self {
        LedgerError::CorruptRecord {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an InvalidStorageKey error
    pub fn invalid_storage_key(name: &str) -> Self {
        LedgerError::InvalidStorageKey {
            name: name.to_string(),
        }
    }
}
