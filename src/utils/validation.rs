//! Input coercion helpers for callers of the core

use bigdecimal::BigDecimal;
use std::str::FromStr;

/// Longest amount string accepted from a prompt
const MAX_AMOUNT_LEN: usize = 32;

/// Largest scale, in either direction, an entered amount may carry
const MAX_AMOUNT_SCALE: i64 = 18;

/// Parse a user-entered amount, falling back to zero.
///
/// Malformed or out-of-range input becomes 0, which `Account::deposit` then
/// treats as a no-op. This mirrors the permissive behaviour the console has
/// always had; it is kept for compatibility rather than as a business rule.
pub fn parse_amount(input: &str) -> BigDecimal {
    try_parse_amount(input).unwrap_or_else(|| BigDecimal::from(0))
}

/// Parse a user-entered amount, returning `None` when it is not a number
/// or lies outside the supported range
pub fn try_parse_amount(input: &str) -> Option<BigDecimal> {
    let input = input.trim();
    if input.len() > MAX_AMOUNT_LEN {
        return None;
    }

    let amount = BigDecimal::from_str(input).ok()?;
    let (_, scale) = amount.as_bigint_and_exponent();
    if scale.abs() > MAX_AMOUNT_SCALE {
        return None;
    }
    Some(amount)
}
