//! Helpers for the swap runner

use alloy::{
    providers::{DynProvider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::SwapRunnerError;

/// The number of confirmations to wait for on the swap transaction
pub const ONE_CONFIRMATION: u64 = 1;

/// Build a wallet-attached RPC provider for the given url
pub fn build_provider(
    rpc_url: &str,
    wallet: PrivateKeySigner,
) -> Result<DynProvider, SwapRunnerError> {
    let url = rpc_url.parse().map_err(SwapRunnerError::chain_query_failed)?;
    let provider = ProviderBuilder::new().wallet(wallet).connect_http(url);

    Ok(DynProvider::new(provider))
}

/// Parse a JSON response body, surfacing non-success statuses with the body
/// text the backend returned
pub async fn handle_http_response<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    let body = response.text().await.map_err(|e| e.to_string())?;
    if !status.is_success() {
        return Err(format!("status {status}: {body}"));
    }

    serde_json::from_str(&body).map_err(|e| format!("deserializing response: {e} (body: {body})"))
}

/// Whether an RPC error message indicates an on-chain execution revert, as
/// opposed to a transport or broadcast failure
pub fn is_revert_error(msg: &str) -> bool {
    let msg = msg.to_lowercase();
    msg.contains("revert")
}
