//! API types for exchange deployment metadata and gas pricing

use std::collections::HashMap;

use alloy_primitives::{Address, U256};
use serde::Deserialize;

use crate::serialization::u256_flexible;

// --------------
// | Api Routes |
// --------------

/// The route serving exchange deployment metadata
pub const INFO_ROUTE: &str = "api/info";
/// The route serving the current recommended gas price
pub const GAS_PRICE_ROUTE: &str = "api/gasPrice";

// -------------
// | Api Types |
// -------------

/// The exchange deployment metadata served by the trading backend
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    /// The address of the exchange contract, the swap entry point and the
    /// spender approved to move the input token
    pub exchange_contract_address: Address,
    /// The mapping from asset symbol to token contract address
    pub asset_to_address: HashMap<String, Address>,
    /// The address of the executor contract the exchange routes swaps through
    pub swap_executor_contract_address: Address,
}

impl ExchangeInfo {
    /// Resolve an asset symbol to its token contract address
    pub fn asset_address(&self, symbol: &str) -> Option<Address> {
        self.asset_to_address.get(symbol).copied()
    }
}

/// The current recommended gas price, in wei
///
/// The backend encodes this inconsistently across deployments (bare number
/// or decimal string), so decoding is lenient.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct GasPriceResponse(
    /// The gas price, in wei
    #[serde(with = "u256_flexible")]
    pub U256,
);

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, U256};

    use super::*;

    /// Test decoding the info response and resolving asset addresses
    #[test]
    fn test_exchange_info_deserialization() {
        let body = r#"{
            "exchangeContractAddress": "0xb5599f568d3f3e6113b286d010d2bca40a7745aa",
            "assetToAddress": {
                "USDT": "0x55d398326f99059ff775485246999027b3197955",
                "ORN": "0xe4ca1f75eca6214393fce1c1b316c237664eaa8e"
            },
            "swapExecutorContractAddress": "0x55b052e186b29c1b4ff1a5fda3a2499ed1dcb199"
        }"#;

        let info: ExchangeInfo = serde_json::from_str(body).unwrap();
        assert_eq!(
            info.asset_address("USDT"),
            Some(address!("0x55d398326f99059ff775485246999027b3197955"))
        );
        assert_eq!(info.asset_address("WETH"), None);
    }

    /// Test decoding the gas price from both known encodings
    #[test]
    fn test_gas_price_deserialization() {
        let from_number: GasPriceResponse = serde_json::from_str("3000000000").unwrap();
        let from_string: GasPriceResponse = serde_json::from_str("\"3000000000\"").unwrap();
        assert_eq!(from_number.0, U256::from(3_000_000_000u64));
        assert_eq!(from_string.0, U256::from(3_000_000_000u64));
    }
}
