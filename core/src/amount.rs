use alloy::primitives::U256;

use crate::error::AmountError;

// 10^77 is the largest power of ten below 2^256.
const MAX_DECIMALS: u8 = 77;

fn ten_pow(decimals: u8) -> Option<U256> {
    if decimals > MAX_DECIMALS {
        return None;
    }
    U256::from(10u8).checked_pow(U256::from(decimals))
}

/// Renders a base-unit amount as a decimal string, trimming trailing zeros
/// (`1500000000000000000` with 18 decimals is `"1.5"`).
pub fn format_units(value: U256, decimals: u8) -> String {
    let Some(scale) = ten_pow(decimals) else {
        return value.to_string();
    };
    if decimals == 0 {
        return value.to_string();
    }

    let whole = value / scale;
    let frac = value % scale;
    if frac.is_zero() {
        return whole.to_string();
    }

    let frac = format!("{:0>width$}", frac.to_string(), width = decimals as usize);
    format!("{}.{}", whole, frac.trim_end_matches('0'))
}

/// Parses a decimal string into base units. Digits beyond `decimals` are
/// truncated rather than rejected.
pub fn parse_units(input: &str, decimals: u8) -> Result<U256, AmountError> {
    if ten_pow(decimals).is_none() {
        return Err(AmountError::UnsupportedDecimals(decimals));
    }

    let input = input.trim();
    if input.is_empty() {
        return Err(AmountError::Empty);
    }

    let (whole, frac) = input.split_once('.').unwrap_or((input, ""));
    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !is_digits(whole) || !is_digits(frac) || (whole.is_empty() && frac.is_empty()) {
        return Err(AmountError::InvalidFormat(input.to_string()));
    }

    let frac = &frac[..frac.len().min(decimals as usize)];
    let combined = format!("{whole}{frac:0<width$}", width = decimals as usize);
    let digits = combined.trim_start_matches('0');
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }

    U256::from_str_radix(digits, 10).map_err(|_| AmountError::Overflow)
}
