//! Rust Bank Ledger Library
//! # Overview
//!
//! This library provides a single-user, interactive command-line ledger that
//! stores each account as its own JSON record on disk.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Money, LedgerError)
//! - [`cli`] - CLI arguments, the terminal and the interactive session
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Account operations (create, balance, deposit, withdraw)
//!   - [`core::traits`] - The record store abstraction
//!   - [`core::file_store`] - One JSON file per account
//! - [`io`] - Amount parsing/formatting and the record format
//! - [`logging`] - tracing subscriber setup
//!
//! # Operations
//!
//! - **Create**: store a new account with a zero balance
//! - **Check Balance**: show the balance with two decimal places
//! - **Deposit**: credit a positive amount
//! - **Withdraw**: debit a positive amount no larger than the balance
//!
//! # Money
//!
//! Balances are integer counts of cents. Amounts typed by the user accept
//! both `.` and `,` as the fractional separator.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod types;

pub use crate::core::{FileStore, Ledger, Lookup, RecordStore};
pub use io::{format_amount, parse_amount};
pub use types::{Account, AccountName, LedgerError, Money};
