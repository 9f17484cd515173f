//! API types for calldata generation

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use crate::serialization::{u256_decimal_string, u256_flexible};

// --------------
// | Api Routes |
// --------------

/// The route exchanging a swap request for executable calldata
pub const GENERATE_SWAP_CALLDATA_ROUTE: &str = "api/trade/generate-swap-calldata";

// -------------
// | Api Types |
// -------------

/// A swap intent posted to the calldata generation endpoint
///
/// Amounts are integers at the backend's fixed-point precision, independent
/// of either asset's ERC20 decimals, serialized as decimal strings.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapRequest {
    /// The input amount
    #[serde(with = "u256_decimal_string")]
    pub amount: U256,
    /// The minimum acceptable output amount
    #[serde(with = "u256_decimal_string")]
    pub min_return_amount: U256,
    /// The address receiving the swap proceeds
    pub receiver_address: Address,
    /// The routing path, forwarded from the quote unmodified
    pub path: Vec<serde_json::Value>,
}

/// The executable payload returned by the calldata generation endpoint
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapCalldataResponse {
    /// ABI-encoded executor calldata, forwarded to the exchange unmodified
    pub calldata: Bytes,
    /// The swap description forwarded to the exchange's swap entry point
    pub swap_description: ApiSwapDescription,
}

/// The backend-supplied swap description, mirroring the exchange contract's
/// swap description argument
///
/// The backend is trusted to produce a description consistent with the swap
/// request it was given; this client forwards it without cross-checking.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSwapDescription {
    /// The token being sold
    pub src_token: Address,
    /// The token being bought
    pub dst_token: Address,
    /// The address providing the input tokens
    pub src_receiver: Address,
    /// The address receiving the output tokens
    pub dst_receiver: Address,
    /// The input amount, in the source token's smallest units
    #[serde(with = "u256_flexible")]
    pub amount: U256,
    /// The minimum acceptable output, in the destination token's smallest
    /// units
    #[serde(with = "u256_flexible")]
    pub min_return_amount: U256,
    /// Executor-defined behavior flags
    #[serde(with = "u256_flexible")]
    pub flags: U256,
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, U256};

    use super::*;

    /// Test that swap request amounts serialize as decimal strings
    #[test]
    fn test_swap_request_serialization() {
        let request = SwapRequest {
            amount: U256::from(10_000_000u64),
            min_return_amount: U256::from(9_405_000u64),
            receiver_address: address!("0x61eed69c0d112c690fd6f44bb621357b89fbe67f"),
            path: vec![serde_json::json!({"pool": "0x05c5fcf3ce15cd6dca2b9bb6371a3cd5cf55e4c3"})],
        };

        let serialized = serde_json::to_value(&request).unwrap();
        assert_eq!(serialized["amount"], "10000000");
        assert_eq!(serialized["minReturnAmount"], "9405000");
        let receiver = serialized["receiverAddress"].as_str().unwrap().to_lowercase();
        assert_eq!(receiver, "0x61eed69c0d112c690fd6f44bb621357b89fbe67f");
        assert_eq!(serialized["path"].as_array().unwrap().len(), 1);
    }

    /// Test decoding the calldata generation response
    #[test]
    fn test_swap_calldata_deserialization() {
        let body = r#"{
            "calldata": "0x90411a32000000000000000000000000",
            "swapDescription": {
                "srcToken": "0x55d398326f99059ff775485246999027b3197955",
                "dstToken": "0xe4ca1f75eca6214393fce1c1b316c237664eaa8e",
                "srcReceiver": "0x55b052e186b29c1b4ff1a5fda3a2499ed1dcb199",
                "dstReceiver": "0x61eed69c0d112c690fd6f44bb621357b89fbe67f",
                "amount": "100000000000000000",
                "minReturnAmount": "9405000",
                "flags": 0
            }
        }"#;

        let payload: SwapCalldataResponse = serde_json::from_str(body).unwrap();
        assert_eq!(payload.calldata.len(), 16);
        assert_eq!(payload.swap_description.amount, U256::from(100_000_000_000_000_000u128));
        assert_eq!(payload.swap_description.flags, U256::ZERO);
    }

    /// Test that a payload without calldata fails to decode
    #[test]
    fn test_swap_calldata_missing_fields() {
        let body = r#"{"swapDescription": null}"#;
        let res: Result<SwapCalldataResponse, _> = serde_json::from_str(body);
        assert!(res.is_err());
    }
}
