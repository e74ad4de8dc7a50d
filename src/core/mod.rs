//! Core business logic module
//!
//! This module contains the account components:
//! - `traits` - Record store abstraction and the tagged lookup result
//! - `ledger` - Account operations over a record store
//! - `file_store` - One JSON file per account
//! - `memory_store` - HashMap-backed store for unit tests

pub mod file_store;
pub mod ledger;
#[cfg(test)]
pub(crate) mod memory_store;
pub mod traits;

pub use file_store::FileStore;
pub use ledger::Ledger;
pub use traits::{Lookup, RecordStore};
