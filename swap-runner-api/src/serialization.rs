//! Serialization helpers for the trading backend wire format

/// A module for serializing and deserializing U256 as decimal strings
pub(crate) mod u256_decimal_string {
    use alloy_primitives::U256;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    /// Serialize a U256 to a decimal string
    pub fn serialize<S: Serializer>(value: &U256, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.to_string())
    }

    /// Deserialize a decimal string to a U256
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<U256, D::Error> {
        let s = String::deserialize(d)?;
        U256::from_str_radix(&s, 10).map_err(|_| D::Error::custom("Invalid U256 value"))
    }
}

/// A module for deserializing U256 values the backend may encode as a JSON
/// number, a decimal string, or a 0x-prefixed hex string
pub(crate) mod u256_flexible {
    use std::fmt;

    use alloy_primitives::U256;
    use serde::{
        de::{Error, Visitor},
        Deserializer,
    };

    /// Deserialize a JSON number or string into a U256
    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<U256, D::Error> {
        d.deserialize_any(FlexibleU256Visitor)
    }

    /// Visitor accepting the integer encodings the backend is known to emit
    struct FlexibleU256Visitor;

    impl Visitor<'_> for FlexibleU256Visitor {
        type Value = U256;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a non-negative integer, decimal string, or hex string")
        }

        fn visit_u64<E: Error>(self, v: u64) -> Result<U256, E> {
            Ok(U256::from(v))
        }

        fn visit_i64<E: Error>(self, v: i64) -> Result<U256, E> {
            u64::try_from(v).map(U256::from).map_err(|_| E::custom("negative integer"))
        }

        fn visit_f64<E: Error>(self, v: f64) -> Result<U256, E> {
            if v < 0.0 || v.fract() != 0.0 || !v.is_finite() {
                return Err(E::custom("non-integral number"));
            }
            Ok(U256::from(v as u128))
        }

        fn visit_str<E: Error>(self, v: &str) -> Result<U256, E> {
            let (radix, digits) = match v.strip_prefix("0x") {
                Some(hex) => (16, hex),
                None => (10, v),
            };
            U256::from_str_radix(digits, radix).map_err(|_| E::custom("invalid integer string"))
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use serde::Deserialize;

    /// A test wrapper over the decimal string serialization
    #[derive(Debug, PartialEq, serde::Serialize, Deserialize)]
    struct Decimal(
        /// The wrapped value
        #[serde(with = "super::u256_decimal_string")]
        U256,
    );

    /// A test wrapper over the flexible deserialization
    #[derive(Debug, PartialEq, Deserialize)]
    struct Flexible(
        /// The wrapped value
        #[serde(with = "super::u256_flexible")]
        U256,
    );

    /// Test round-tripping a U256 through the decimal string encoding
    #[test]
    fn test_u256_decimal_string_roundtrip() {
        let value = Decimal(U256::from(9405000u64));
        let serialized = serde_json::to_string(&value).unwrap();
        assert_eq!(serialized, "\"9405000\"");

        let deserialized: Decimal = serde_json::from_str(&serialized).unwrap();
        assert_eq!(value, deserialized);
    }

    /// Test that a hex string is rejected by the decimal encoding
    #[test]
    fn test_u256_decimal_string_rejects_hex() {
        let res: Result<Decimal, _> = serde_json::from_str("\"0xdead\"");
        assert!(res.is_err());
    }

    /// Test the encodings accepted by the flexible deserializer
    #[test]
    fn test_u256_flexible_encodings() {
        let expected = Flexible(U256::from(600000u64));
        for encoding in ["600000", "\"600000\"", "\"0x927c0\""] {
            let deserialized: Flexible = serde_json::from_str(encoding).unwrap();
            assert_eq!(deserialized, expected, "encoding: {encoding}");
        }
    }

    /// Test that negative and fractional numbers are rejected
    #[test]
    fn test_u256_flexible_rejects_non_integers() {
        for encoding in ["-1", "1.5", "\"-1\""] {
            let res: Result<Flexible, _> = serde_json::from_str(encoding);
            assert!(res.is_err(), "encoding: {encoding}");
        }
    }
}
