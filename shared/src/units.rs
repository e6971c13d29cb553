//! # Wei / Ether Conversion
//!
//! The injected provider exchanges balances and transfer values as
//! `0x`-prefixed hex quantities denominated in wei (1 ether = 10^18 wei).
//! The UI displays and accepts decimal ether strings. Conversion is done
//! with exact integer arithmetic; balances are never rounded.
//!
//! ## Functions
//!
//! - [`format_wei`] - wei to a full-precision ether decimal string
//! - [`parse_ether`] - ether decimal string to wei (transfer amounts)
//! - [`parse_quantity`] / [`to_quantity`] - hex quantity codec

use thiserror::Error;

/// Number of wei in one ether.
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Maximum fractional digits an ether amount can carry.
pub const ETHER_DECIMALS: usize = 18;

/// Errors from unit conversion and amount parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitsError {
    #[error("amount is empty")]
    Empty,
    #[error("amount is not a valid decimal number")]
    Malformed,
    #[error("amount must be greater than zero")]
    NotPositive,
    #[error("amount has more than 18 decimal places")]
    TooManyDecimals,
    #[error("amount is too large")]
    Overflow,
    #[error("malformed hex quantity")]
    BadQuantity,
}

/// Result alias for unit conversion.
pub type Result<T> = std::result::Result<T, UnitsError>;

/// Format a wei amount as an ether decimal string at full precision.
///
/// Trailing zeros in the fractional part are trimmed, but at least one
/// fractional digit is always kept, matching what wallet libraries
/// produce for display.
///
/// # Examples
///
/// ```rust
/// use shared::units::format_wei;
///
/// assert_eq!(format_wei(1_000_000_000_000_000_000), "1.0");
/// assert_eq!(format_wei(1_500_000_000_000_000_000), "1.5");
/// assert_eq!(format_wei(1), "0.000000000000000001");
/// assert_eq!(format_wei(0), "0.0");
/// ```
pub fn format_wei(wei: u128) -> String {
    let whole = wei / WEI_PER_ETHER;
    let frac = wei % WEI_PER_ETHER;
    let frac_digits = format!("{frac:018}");
    let trimmed = frac_digits.trim_end_matches('0');

    if trimmed.is_empty() {
        format!("{whole}.0")
    } else {
        format!("{whole}.{trimmed}")
    }
}

/// Parse a decimal ether string entered by the user into wei.
///
/// Accepts plain decimals (`"1"`, `"0.01"`, `".5"`, `"2."`). Rejects the
/// empty string, malformed input, more than 18 fractional digits, values
/// that overflow `u128`, and anything that is not strictly positive; a
/// transfer of zero ether is never submitted.
pub fn parse_ether(input: &str) -> Result<u128> {
    let input = input.trim();
    if input.is_empty() {
        return Err(UnitsError::Empty);
    }
    if input.starts_with('-') {
        return Err(UnitsError::NotPositive);
    }
    if input.starts_with('+') {
        return Err(UnitsError::Malformed);
    }

    let (whole, frac) = match input.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (input, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(UnitsError::Malformed);
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(UnitsError::Malformed);
    }
    if frac.len() > ETHER_DECIMALS {
        return Err(UnitsError::TooManyDecimals);
    }

    let whole_value: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| UnitsError::Overflow)?
    };

    // Pad the fraction to 18 digits so it is already denominated in wei
    let mut frac_digits = String::with_capacity(ETHER_DECIMALS);
    frac_digits.push_str(frac);
    while frac_digits.len() < ETHER_DECIMALS {
        frac_digits.push('0');
    }
    let frac_value: u128 = frac_digits.parse().map_err(|_| UnitsError::Malformed)?;

    let wei = whole_value
        .checked_mul(WEI_PER_ETHER)
        .and_then(|w| w.checked_add(frac_value))
        .ok_or(UnitsError::Overflow)?;

    if wei == 0 {
        return Err(UnitsError::NotPositive);
    }
    Ok(wei)
}

/// Parse a `0x`-prefixed hex quantity as returned by `eth_getBalance`.
pub fn parse_quantity(quantity: &str) -> Result<u128> {
    let digits = quantity
        .strip_prefix("0x")
        .ok_or(UnitsError::BadQuantity)?;
    if digits.is_empty() {
        return Err(UnitsError::BadQuantity);
    }
    u128::from_str_radix(digits, 16).map_err(|e| match e.kind() {
        std::num::IntErrorKind::PosOverflow => UnitsError::Overflow,
        _ => UnitsError::BadQuantity,
    })
}

/// Encode a wei amount as a minimal `0x`-prefixed hex quantity for
/// `eth_sendTransaction`.
pub fn to_quantity(wei: u128) -> String {
    format!("{wei:#x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_whole_and_fractional() {
        assert_eq!(format_wei(0), "0.0");
        assert_eq!(format_wei(WEI_PER_ETHER), "1.0");
        assert_eq!(format_wei(WEI_PER_ETHER / 2), "0.5");
        assert_eq!(format_wei(1_500_000_000_000_000_000), "1.5");
        assert_eq!(format_wei(2_000_000_000_000_000_001), "2.000000000000000001");
    }

    #[test]
    fn format_keeps_full_precision() {
        // 1.234567890123456789 ether, every digit shown
        assert_eq!(format_wei(1_234_567_890_123_456_789), "1.234567890123456789");
        // smallest representable value
        assert_eq!(format_wei(1), "0.000000000000000001");
    }

    #[test]
    fn parse_plain_and_fractional() {
        assert_eq!(parse_ether("1"), Ok(WEI_PER_ETHER));
        assert_eq!(parse_ether("0.5"), Ok(WEI_PER_ETHER / 2));
        assert_eq!(parse_ether(".5"), Ok(WEI_PER_ETHER / 2));
        assert_eq!(parse_ether("2."), Ok(2 * WEI_PER_ETHER));
        assert_eq!(parse_ether(" 0.01 "), Ok(10_000_000_000_000_000));
        assert_eq!(parse_ether("0.000000000000000001"), Ok(1));
    }

    #[test]
    fn parse_round_trips_format() {
        for wei in [1u128, 999, WEI_PER_ETHER, 1_234_567_890_123_456_789] {
            assert_eq!(parse_ether(&format_wei(wei)), Ok(wei));
        }
    }

    #[test]
    fn parse_rejects_empty_and_malformed() {
        assert_eq!(parse_ether(""), Err(UnitsError::Empty));
        assert_eq!(parse_ether("   "), Err(UnitsError::Empty));
        assert_eq!(parse_ether("."), Err(UnitsError::Malformed));
        assert_eq!(parse_ether("abc"), Err(UnitsError::Malformed));
        assert_eq!(parse_ether("1.2.3"), Err(UnitsError::Malformed));
        assert_eq!(parse_ether("1,5"), Err(UnitsError::Malformed));
        assert_eq!(parse_ether("+1"), Err(UnitsError::Malformed));
        assert_eq!(parse_ether("0x10"), Err(UnitsError::Malformed));
    }

    #[test]
    fn parse_rejects_non_positive() {
        assert_eq!(parse_ether("0"), Err(UnitsError::NotPositive));
        assert_eq!(parse_ether("0.0"), Err(UnitsError::NotPositive));
        assert_eq!(parse_ether("0.000000000000000000"), Err(UnitsError::NotPositive));
        assert_eq!(parse_ether("-1"), Err(UnitsError::NotPositive));
        assert_eq!(parse_ether("-0.5"), Err(UnitsError::NotPositive));
    }

    #[test]
    fn parse_rejects_excess_precision_and_overflow() {
        // 19 fractional digits
        assert_eq!(
            parse_ether("0.0000000000000000001"),
            Err(UnitsError::TooManyDecimals)
        );
        // u128::MAX wei is about 3.4e20 ether
        assert_eq!(
            parse_ether("999999999999999999999999999999"),
            Err(UnitsError::Overflow)
        );
    }

    #[test]
    fn quantity_codec() {
        assert_eq!(parse_quantity("0x0"), Ok(0));
        assert_eq!(parse_quantity("0xde0b6b3a7640000"), Ok(WEI_PER_ETHER));
        assert_eq!(parse_quantity("0xDE0B6B3A7640000"), Ok(WEI_PER_ETHER));
        assert_eq!(to_quantity(0), "0x0");
        assert_eq!(to_quantity(WEI_PER_ETHER), "0xde0b6b3a7640000");

        assert_eq!(parse_quantity(""), Err(UnitsError::BadQuantity));
        assert_eq!(parse_quantity("0x"), Err(UnitsError::BadQuantity));
        assert_eq!(parse_quantity("10"), Err(UnitsError::BadQuantity));
        assert_eq!(parse_quantity("0xzz"), Err(UnitsError::BadQuantity));
        assert_eq!(
            parse_quantity("0xffffffffffffffffffffffffffffffffff"),
            Err(UnitsError::Overflow)
        );
    }
}
