//! JSON format of a stored account record
//!
//! Each account is stored as a single JSON object holding only its balance in
//! major units:
//!
//! ```json
//! {"balance": 70.5}
//! ```
//!
//! The balance is written as an exact decimal number, so every balance the
//! ledger can hold reads back to the same cent count. Records written by
//! older versions as binary floats are still accepted.
//!
//! The name is not part of the record; it is the storage key.
//! All functions are pure (no I/O) for easy testing.

use crate::io::amount::{money_from_major, money_to_major};
use crate::types::{Account, LedgerError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// On-disk shape of an account record
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct StoredRecord {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub balance: Decimal,
}

/// Serialize an account into its record text
///
/// # Errors
///
/// Returns `LedgerError::Io` if serialization fails.
pub fn encode_record(account: &Account) -> Result<String, LedgerError> {
    let record = StoredRecord {
        balance: money_to_major(account.balance),
    };
    Ok(serde_json::to_string(&record)?)
}

/// Parse record text stored under `name`
///
/// # Returns
///
/// * `Ok(Account)` - The decoded account
/// * `Err(String)` - Why the text is not a valid record (bad JSON, missing
///   or non-numeric balance, negative or oversized balance)
pub fn decode_record(name: &str, text: &str) -> Result<Account, String> {
    let record: StoredRecord = serde_json::from_str(text).map_err(|e| e.to_string())?;

    let balance = money_from_major(record.balance)
        .ok_or_else(|| format!("balance {} is not a valid amount", record.balance))?;

    Ok(Account::with_balance(name, balance))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Money;
    use rstest::rstest;

    #[rstest]
    #[case::integer_zero(r#"{"balance": 0}"#, 0)]
    #[case::float_zero(r#"{"balance":0.0}"#, 0)]
    #[case::fraction(r#"{"balance":70.5}"#, 7050)]
    #[case::float_noise(r#"{"balance":0.30000000000000004}"#, 30)]
    #[case::extra_fields(r#"{"balance":12.34,"owner":"x"}"#, 1234)]
    #[case::exponent(r#"{"balance":1.5e2}"#, 15000)]
    #[case::beyond_f64_precision(r#"{"balance":90071992547409.93}"#, 9007199254740993)]
    #[case::largest(r#"{"balance":184467440737095516.15}"#, u64::MAX)]
    fn test_decode_valid_record(#[case] text: &str, #[case] expected_cents: u64) {
        let account = decode_record("alice", text).unwrap();
        assert_eq!(account.name, "alice");
        assert_eq!(account.balance, Money::from_cents(expected_cents));
    }

    #[rstest]
    #[case::empty("")]
    #[case::not_json("balance=10")]
    #[case::truncated(r#"{"balance": 1"#)]
    #[case::missing_balance(r#"{}"#)]
    #[case::null_balance(r#"{"balance":null}"#)]
    #[case::boolean_balance(r#"{"balance":true}"#)]
    #[case::negative_balance(r#"{"balance":-1}"#)]
    #[case::oversized_balance(r#"{"balance":1e30}"#)]
    fn test_decode_corrupt_record(#[case] text: &str) {
        assert!(decode_record("alice", text).is_err());
    }

    #[rstest]
    #[case::zero(0, r#"{"balance":0}"#)]
    #[case::whole(7000, r#"{"balance":70}"#)]
    #[case::fraction(7050, r#"{"balance":70.5}"#)]
    #[case::beyond_f64_precision(9007199254740993, r#"{"balance":90071992547409.93}"#)]
    fn test_encode_record(#[case] cents: u64, #[case] expected: &str) {
        let account = Account::with_balance("alice", Money::from_cents(cents));
        assert_eq!(encode_record(&account).unwrap(), expected);
    }

    #[rstest]
    #[case::one_cent(1)]
    #[case::past_f64_integers((1 << 53) + 1)]
    #[case::largest(u64::MAX)]
    fn test_encoded_record_decodes_to_same_balance(#[case] cents: u64) {
        let account = Account::with_balance("bob", Money::from_cents(cents));
        let text = encode_record(&account).unwrap();
        assert_eq!(decode_record("bob", &text), Ok(account));
    }
}
