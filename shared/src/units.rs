//! # Unit Conversion
//!
//! Exact conversion between a token's smallest unit and its decimal
//! representation. Output follows the usual wallet convention: at least one
//! fractional digit, trailing zeros trimmed (`1.0`, `0.005`, `10000.0`).

use alloy_primitives::U256;

/// Decimals of ether and of the Crypto Dev token.
pub const ETHER_DECIMALS: u8 = 18;

/// `10^decimals` as a [`U256`].
pub fn unit_scale(decimals: u8) -> U256 {
    U256::from(10u64).pow(U256::from(decimals))
}

/// Format an amount of smallest units as a decimal string.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::U256;
/// use shared::units::format_units;
///
/// assert_eq!(format_units(U256::from(5_000_000u64), 6), "5.0");
/// assert_eq!(format_units(U256::from(1_500u64), 6), "0.0015");
/// assert_eq!(format_units(U256::ZERO, 6), "0.0");
/// ```
pub fn format_units(value: U256, decimals: u8) -> String {
    let digits = value.to_string();
    if decimals == 0 {
        return digits;
    }

    let decimals = decimals as usize;
    let padded = if digits.len() <= decimals {
        format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits)
    } else {
        digits
    };

    let (integer_part, fraction_part) = padded.split_at(padded.len() - decimals);
    let fraction_part = fraction_part.trim_end_matches('0');

    if fraction_part.is_empty() {
        format!("{}.0", integer_part)
    } else {
        format!("{}.{}", integer_part, fraction_part)
    }
}

/// Format wei (or token base units with 18 decimals) as ether.
pub fn format_ether(value: U256) -> String {
    format_units(value, ETHER_DECIMALS)
}

/// Parse a decimal string into smallest units.
///
/// Returns `None` for signs, exponents, empty input, more fractional digits
/// than `decimals`, or values that overflow 256 bits.
///
/// # Examples
///
/// ```rust
/// use alloy_primitives::U256;
/// use shared::units::parse_units;
///
/// assert_eq!(parse_units("0.001", 18), Some(U256::from(1_000_000_000_000_000u64)));
/// assert_eq!(parse_units("2", 3), Some(U256::from(2_000u64)));
/// assert_eq!(parse_units("1.2345", 3), None);
/// ```
pub fn parse_units(input: &str, decimals: u8) -> Option<U256> {
    let input = input.trim();
    let (integer_part, fraction_part) = match input.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (input, ""),
    };

    if integer_part.is_empty() && fraction_part.is_empty() {
        return None;
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer_part) || !all_digits(fraction_part) {
        return None;
    }
    if fraction_part.len() > decimals as usize {
        return None;
    }

    let scale = unit_scale(decimals);
    let integer = if integer_part.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(integer_part, 10).ok()?
    };

    let fraction = if fraction_part.is_empty() {
        U256::ZERO
    } else {
        let missing = decimals as usize - fraction_part.len();
        let raw = U256::from_str_radix(fraction_part, 10).ok()?;
        raw.checked_mul(unit_scale(missing as u8))?
    };

    integer.checked_mul(scale)?.checked_add(fraction)
}

/// Parse an ether amount into wei.
pub fn parse_ether(input: &str) -> Option<U256> {
    parse_units(input, ETHER_DECIMALS)
}
