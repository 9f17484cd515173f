//! The wire API of the trading backend, as consumed by the swap runner
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

mod serialization;
mod types;
pub mod units;
pub use types::*;

use alloy_primitives::U256;

/// Convert a U256 into a u128, erroring if the value overflows
pub fn u256_try_into_u128(value: U256) -> Result<u128, String> {
    value.try_into().map_err(|_| format!("{value} overflows u128"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that an in-range U256 converts losslessly
    #[test]
    fn test_u256_try_into_u128() {
        let value = U256::from(u128::MAX);
        assert_eq!(u256_try_into_u128(value).unwrap(), u128::MAX);
    }

    /// Test that an out-of-range U256 errors
    #[test]
    fn test_u256_try_into_u128_overflow() {
        let value = U256::from(u128::MAX) + U256::from(1u8);
        assert!(u256_try_into_u128(value).is_err());
    }
}
