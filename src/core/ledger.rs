//! Account operations
//!
//! This module provides the `Ledger`, which composes record store calls with
//! validation to implement the four account operations:
//! - Create an account with a zero balance
//! - Query the balance of an account
//! - Deposit (credit) a positive amount
//! - Withdraw (debit) a positive amount no larger than the balance
//!
//! Each operation is one read-modify-write of a single record. The ledger
//! keeps no state of its own between operations.

use crate::core::traits::{Lookup, RecordStore};
use crate::types::{Account, LedgerError, Money};
use tracing::{info, warn};

/// Account operations over a record store
pub struct Ledger<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> Ledger<S> {
    /// Create a ledger over `store`
    pub fn new(store: S) -> Self {
        Ledger { store }
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create a new account with a zero balance
    ///
    /// The name is trimmed before use.
    ///
    /// # Arguments
    ///
    /// * `name` - The requested account name
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The stored account
    /// * `Err(LedgerError)` - If the name is unusable or already taken
    ///
    /// # Errors
    ///
    /// - `InvalidName` if the trimmed name is empty
    /// - `AccountExists` if a record with that name is already stored
    /// - `InvalidStorageKey` / `Io` if the record cannot be written
    pub fn create_account(&mut self, name: &str) -> Result<Account, LedgerError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(LedgerError::InvalidName);
        }

        if self.store.exists(name) {
            return Err(LedgerError::account_exists(name));
        }

        let account = Account::new(name);
        self.store.save(&account)?;

        info!(account = name, "account created");
        Ok(account)
    }

    /// Ensure an account exists without loading it
    ///
    /// Used to reject unknown names before asking for an amount.
    pub fn ensure_exists(&self, name: &str) -> Result<(), LedgerError> {
        let name = name.trim();
        if !name.is_empty() && self.store.exists(name) {
            Ok(())
        } else {
            Err(LedgerError::account_not_found(name))
        }
    }

    /// Current balance of an account
    ///
    /// Performs no writes.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if no record is stored under the name
    /// - `CorruptRecord` if the record cannot be read or decoded
    pub fn balance(&self, name: &str) -> Result<Money, LedgerError> {
        self.load(name.trim()).map(|account| account.balance)
    }

    /// Deposit a positive amount into an account
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the amount is zero
    /// - `AccountNotFound` / `CorruptRecord` if the account cannot be loaded
    /// - `BalanceOverflow` if the new balance does not fit
    /// - `Io` if the record cannot be written
    pub fn deposit(&mut self, name: &str, amount: Money) -> Result<Money, LedgerError> {
        let name = name.trim();
        ensure_positive(amount)?;

        let mut account = self.load(name)?;
        account.balance = account
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::balance_overflow(name))?;
        self.store.save(&account)?;

        info!(account = name, %amount, balance = %account.balance, "deposit applied");
        Ok(account.balance)
    }

    /// Withdraw a positive amount from an account
    ///
    /// The balance never goes negative: a withdrawal larger than the balance
    /// is rejected and the record is left unchanged.
    ///
    /// # Returns
    ///
    /// The new balance.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if the amount is zero
    /// - `AccountNotFound` / `CorruptRecord` if the account cannot be loaded
    /// - `InsufficientFunds` if the amount exceeds the balance
    /// - `Io` if the record cannot be written
    pub fn withdraw(&mut self, name: &str, amount: Money) -> Result<Money, LedgerError> {
        let name = name.trim();
        ensure_positive(amount)?;

        let mut account = self.load(name)?;
        let current = account.balance;
        account.balance = current.checked_sub(amount).ok_or_else(|| {
            warn!(account = name, %amount, balance = %current, "withdrawal rejected");
            LedgerError::insufficient_funds(name, current, amount)
        })?;
        self.store.save(&account)?;

        info!(account = name, %amount, balance = %account.balance, "withdrawal applied");
        Ok(account.balance)
    }

    fn load(&self, name: &str) -> Result<Account, LedgerError> {
        match self.store.load(name) {
            Lookup::Found(account) => Ok(account),
            Lookup::NotFound => Err(LedgerError::account_not_found(name)),
            Lookup::Corrupt { reason } => Err(LedgerError::corrupt_record(name, &reason)),
        }
    }
}

fn ensure_positive(amount: Money) -> Result<(), LedgerError> {
    if amount == Money::ZERO {
        return Err(LedgerError::invalid_amount(&amount.to_string()));
    }
    Ok(())
}
