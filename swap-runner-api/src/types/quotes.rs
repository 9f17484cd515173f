//! API types for swap quotes

use serde::Deserialize;

// --------------
// | Api Routes |
// --------------

/// The route serving swap quotes
pub const QUOTE_ROUTE: &str = "backend/api/v1/swap";
/// The routing mode requested from the quote service: pool-based routes only
pub const POOLS_EXCHANGE_MODE: &str = "pools";

// -------------
// | Api Types |
// -------------

/// A quote for a swap intent: the expected output amount and the pool path
/// the swap will traverse
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// The ordered pool hops of the route, passed through to calldata
    /// generation without inspection
    pub exchange_contract_path: Vec<serde_json::Value>,
    /// The expected output amount, in human units of the output asset
    pub amount_out: f64,
}
