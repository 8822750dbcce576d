//! Currency text handling for order values
//!
//! Order values are stored exactly as typed (`"$15,000"`). Reading them as
//! numbers is explicit: [`parse_currency`] either yields a [`Decimal`] or a
//! [`CurrencyError`], and callers that aggregate decide what a failure is worth.

use crate::core::error::CurrencyError;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse a currency string such as `"$15,000"` or `"8500.50"`.
///
/// One leading `$` is stripped and every `,` separator removed before the
/// remainder is parsed as a decimal number.
pub fn parse_currency(text: &str) -> Result<Decimal, CurrencyError> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('$').unwrap_or(trimmed);
    let digits: String = unsigned.chars().filter(|c| *c != ',').collect();

    if digits.is_empty() {
        return Err(CurrencyError::Empty);
    }

    Decimal::from_str(&digits).map_err(|_| CurrencyError::Malformed {
        input: text.to_string(),
    })
}

/// Render an amount the way the overview cards show it: `$23,500`, `$1,234.5`.
///
/// At most two fractional digits are kept and trailing zeros are dropped.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction}"),
        None => format!("{sign}${grouped}"),
    }
}
