//! Account-related types for the bank ledger
//!
//! This module defines the Account structure and the Money value type used
//! for every balance and amount in the system.

use std::fmt;

/// Account name, also used as the storage key
pub type AccountName = String;

/// A non-negative amount of money held as an integer count of cents
///
/// Balances never go through binary floating point, in memory or on disk:
/// parsing and formatting happen at the boundary (see [`crate::io::amount`]),
/// arithmetic happens on whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(u64);

impl Money {
    /// Zero balance
    pub const ZERO: Self = Money(0);

    /// Create a value from a count of cents
    pub const fn from_cents(cents: u64) -> Self {
        Money(cents)
    }

    /// The value as a count of cents
    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Add two values, returning `None` on overflow
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Subtract `rhs`, returning `None` if the result would be negative
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }
}

impl fmt::Display for Money {
    /// Formats with exactly two decimal places (`70.00`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Account state
///
/// The name is the identity of the account; only the balance is written
/// into the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// The account name (non-empty, trimmed)
    pub name: AccountName,

    /// Current balance, never negative
    pub balance: Money,
}

impl Account {
    /// Create a new account with a zero balance
    ///
    /// # Arguments
    ///
    /// * `name` - The account name
    pub fn new(name: impl Into<AccountName>) -> Self {
        Account {
            name: name.into(),
            balance: Money::ZERO,
        }
    }

    /// Create an account with an existing balance
    pub fn with_balance(name: impl Into<AccountName>, balance: Money) -> Self {
        Account {
            name: name.into(),
            balance,
        }
    }
}
