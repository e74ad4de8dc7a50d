//! I/O module
//!
//! Handles the boundary formats of the ledger.
//!
//! # Components
//!
//! - `amount` - Amount parsing (user input) and formatting (output)
//! - `record_format` - JSON encoding and decoding of stored account records

pub mod amount;
pub mod record_format;

pub use amount::{format_amount, parse_amount};
pub use record_format::{decode_record, encode_record, StoredRecord};
