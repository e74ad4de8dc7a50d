//! Amount parsing and formatting
//!
//! Money crosses the boundary of the ledger in two places: amounts typed by
//! the user, and balances stored as JSON numbers. Both are converted to and
//! from [`Money`] here and nowhere else.

use crate::types::{LedgerError, Money};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Number of fractional digits kept for every amount
const MINOR_UNIT_DIGITS: u32 = 2;

/// Parse an amount typed by the user
///
/// Accepts both `.` and `,` as the fractional separator (`"10,50"` and
/// `"10.50"` are the same amount). Surrounding whitespace is ignored.
///
/// # Arguments
///
/// * `input` - The raw text as typed
///
/// # Returns
///
/// * `Ok(Money)` - A strictly positive amount
/// * `Err(LedgerError::InvalidAmount)` - Otherwise
///
/// # Errors
///
/// Returns an error if the text:
/// - is not a decimal number
/// - is zero or negative
/// - has more than two fractional digits that are not zero
/// - does not fit in the balance type (more than `184467440737095516.15`)
pub fn parse_amount(input: &str) -> Result<Money, LedgerError> {
    let normalized = input.trim().replace(',', ".");

    let value = Decimal::from_str(&normalized)
        .map_err(|_| LedgerError::invalid_amount(input))?
        .normalize();

    if value <= Decimal::ZERO || value.scale() > MINOR_UNIT_DIGITS {
        return Err(LedgerError::invalid_amount(input));
    }

    to_money(value).ok_or_else(|| LedgerError::invalid_amount(input))
}

/// Convert a stored balance (major units) into [`Money`]
///
/// Values carrying float noise from older records (`0.30000000000000004`)
/// are rounded to the nearest cent. Negative values, or values that do not
/// fit in [`Money`], yield `None`.
pub fn money_from_major(value: Decimal) -> Option<Money> {
    if value.is_zero() {
        return Some(Money::ZERO);
    }
    if value.is_sign_negative() {
        return None;
    }

    let rounded =
        value.round_dp_with_strategy(MINOR_UNIT_DIGITS, RoundingStrategy::MidpointAwayFromZero);
    to_money(rounded)
}

/// Convert [`Money`] into major units for storage
///
/// The result is exact and carries no trailing zeros (`7000` cents is `70`,
/// `7050` cents is `70.5`).
pub fn money_to_major(money: Money) -> Decimal {
    Decimal::from_i128_with_scale(i128::from(money.cents()), MINOR_UNIT_DIGITS).normalize()
}

/// Format an amount with a currency symbol and two decimal places
///
/// ```
/// use rust_bank_ledger::io::amount::format_amount;
/// use rust_bank_ledger::types::Money;
///
/// assert_eq!(format_amount("$", Money::from_cents(7000)), "$70.00");
/// ```
pub fn format_amount(currency: &str, money: Money) -> String {
    format!("{}{}", currency, money)
}

fn to_money(value: Decimal) -> Option<Money> {
    value
        .checked_mul(Decimal::ONE_HUNDRED)?
        .trunc()
        .to_u64()
        .map(Money::from_cents)
}
