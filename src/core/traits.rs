//! Core traits for record storage
//!
//! This module defines the storage abstraction that lets the ledger run
//! against files on disk or an in-memory map interchangeably.

use crate::types::{Account, LedgerError};

/// Result of looking up a stored record
///
/// A missing record and an unreadable one are kept apart so callers can
/// tell a brand-new name from damaged data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The record was read and decoded
    Found(Account),

    /// No record is stored under the name
    NotFound,

    /// A record exists but could not be read or decoded
    Corrupt {
        /// What went wrong
        reason: String,
    },
}

/// Trait for storing account records keyed by account name
///
/// Every `save` replaces the whole record; there are no partial updates.
pub trait RecordStore {
    /// Make sure the storage container exists
    ///
    /// Idempotent. Called once before any other method.
    fn ensure_root(&self) -> Result<(), LedgerError>;

    /// Check whether a record is stored under `name`
    fn exists(&self, name: &str) -> bool;

    /// Load the record stored under `name`
    fn load(&self, name: &str) -> Lookup;

    /// Replace the record stored under `account.name`
    fn save(&mut self, account: &Account) -> Result<(), LedgerError>;
}
