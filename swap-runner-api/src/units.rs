//! Fixed-point scaling between human-unit decimal amounts and the integer
//! amounts used on the wire and on-chain
//!
//! The trading backend quotes and accepts amounts at a protocol-wide
//! precision that is independent of any asset's own ERC20 decimals, so
//! amounts are re-scaled here rather than at the asset's native precision.

use alloy_primitives::U256;

/// The fixed-point precision used by the trading backend
pub const PROTOCOL_DECIMALS: u8 = 8;

/// Scale a non-negative decimal value to an integer at `decimals` digits of
/// precision.
///
/// The value is rendered to exactly `decimals` fractional digits first,
/// rounding at the final digit, then converted exactly from the rendered
/// string. Scaling through the decimal rendering keeps the result
/// independent of the binary expansion of the input.
pub fn scale_amount(value: f64, decimals: u8) -> Result<U256, String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("cannot scale {value}: amounts must be non-negative and finite"));
    }

    let rendered = format!("{value:.prec$}", prec = decimals as usize);
    parse_fixed_point(&rendered, decimals)
}

/// Parse a decimal string into an integer at `decimals` digits of precision.
///
/// Fractional digits beyond `decimals` are truncated, not rounded.
pub fn parse_fixed_point(value: &str, decimals: u8) -> Result<U256, String> {
    let (int_part, frac_part) = match value.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (value, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(format!("cannot parse {value:?} as a decimal amount"));
    }

    for part in [int_part, frac_part] {
        if !part.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("cannot parse {value:?} as a decimal amount"));
        }
    }
    let frac_part = &frac_part[..frac_part.len().min(decimals as usize)];

    let scale = pow10(decimals)?;
    let int_value = if int_part.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(int_part, 10).map_err(|e| e.to_string())?
    };

    let frac_value = if frac_part.is_empty() {
        U256::ZERO
    } else {
        let digits = U256::from_str_radix(frac_part, 10).map_err(|e| e.to_string())?;
        digits * pow10(decimals - frac_part.len() as u8)?
    };

    int_value
        .checked_mul(scale)
        .and_then(|scaled| scaled.checked_add(frac_value))
        .ok_or_else(|| format!("{value} overflows at precision {decimals}"))
}

/// Render an integer amount at `decimals` digits of precision back to a
/// decimal string, keeping the full fractional width
pub fn format_fixed_point(value: U256, decimals: u8) -> String {
    if decimals == 0 {
        return value.to_string();
    }

    let scale = pow10(decimals).expect("precision already validated");
    let int_part = value / scale;
    let frac_part = (value % scale).to_string();
    format!("{int_part}.{frac_part:0>width$}", width = decimals as usize)
}

/// Compute 10^exp as a U256, erroring on unrepresentable precisions
fn pow10(exp: u8) -> Result<U256, String> {
    U256::from(10u8)
        .checked_pow(U256::from(exp))
        .ok_or_else(|| format!("precision {exp} is out of range"))
}
