//! In-memory record store for unit tests
//!
//! Keeps encoded records in a HashMap instead of files. Records are held in
//! their encoded text form so the decode path (and its corrupt-record
//! handling) is the same one the file store goes through.

use crate::core::traits::{Lookup, RecordStore};
use crate::io::record_format::{decode_record, encode_record};
use crate::types::{Account, AccountName, LedgerError};
use std::collections::HashMap;

/// Record store backed by a HashMap of encoded records
#[derive(Debug, Default)]
pub struct InMemoryStore {
    /// Map of account name to record text
    records: HashMap<AccountName, String>,

    /// Number of successful saves
    writes: usize,
}

impl InMemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw record text under `name`, bypassing encoding
    ///
    /// Useful to simulate damaged records.
    pub fn insert_raw(&mut self, name: &str, text: &str) {
        self.records.insert(name.to_string(), text.to_string());
    }

    /// Number of records written through `save`
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RecordStore for InMemoryStore {
    fn ensure_root(&self) -> Result<(), LedgerError> {
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    fn load(&self, name: &str) -> Lookup {
        match self.records.get(name) {
            None => Lookup::NotFound,
            Some(text) => match decode_record(name, text) {
                Ok(account) => Lookup::Found(account),
                Err(reason) => Lookup::Corrupt { reason },
            },
        }
    }

    fn save(&mut self, account: &Account) -> Result<(), LedgerError> {
        let text = encode_record(account)?;
        self.records.insert(account.name.clone(), text);
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Money;

    #[test]
    fn test_save_and_load() {
        let mut store = InMemoryStore::new();
        let account = Account::with_balance("alice", Money::from_cents(1050));

        store.save(&account).unwrap();

        assert!(store.exists("alice"));
        assert_eq!(store.load("alice"), Lookup::Found(account));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_load_missing() {
        let store = InMemoryStore::new();
        assert!(!store.exists("nobody"));
        assert_eq!(store.load("nobody"), Lookup::NotFound);
    }

    #[test]
    fn test_load_corrupt() {
        let mut store = InMemoryStore::new();
        store.insert_raw("carol", "{not json");

        assert!(store.exists("carol"));
        assert!(matches!(store.load("carol"), Lookup::Corrupt { .. }));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = InMemoryStore::new();
        store.save(&Account::new("alice")).unwrap();
        store
            .save(&Account::with_balance("alice", Money::from_cents(500)))
            .unwrap();

        assert_eq!(
            store.load("alice"),
            Lookup::Found(Account::with_balance("alice", Money::from_cents(500)))
        );
        assert_eq!(store.writes(), 2);
    }
}
