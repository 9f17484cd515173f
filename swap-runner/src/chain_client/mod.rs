//! Client for chain state queries and transaction submission
//!
//! Wraps a single wallet-attached RPC provider; there is exactly one signer
//! per run and all transactions are sequenced through it.

pub mod approval;

use alloy::{
    providers::{DynProvider, Provider},
    signers::local::PrivateKeySigner,
};
use alloy_primitives::Address;

use crate::{error::SwapRunnerError, helpers::build_provider};

/// A client wrapping the RPC provider and the signing wallet
#[derive(Clone)]
pub struct ChainClient {
    /// The RPC provider, configured to sign with the wallet
    rpc_provider: DynProvider,
    /// The address of the signing wallet
    wallet_address: Address,
}

impl ChainClient {
    /// Create a new client
    pub fn new(rpc_url: &str, wallet: PrivateKeySigner) -> Result<Self, SwapRunnerError> {
        let wallet_address = wallet.address();
        let rpc_provider = build_provider(rpc_url, wallet)?;

        Ok(Self { rpc_provider, wallet_address })
    }

    /// The address of the signing wallet
    pub fn wallet_address(&self) -> Address {
        self.wallet_address
    }

    /// The underlying RPC provider
    pub(crate) fn provider(&self) -> &DynProvider {
        &self.rpc_provider
    }

    /// Query the chain id of the connected network
    pub async fn chain_id(&self) -> Result<u64, SwapRunnerError> {
        self.rpc_provider.get_chain_id().await.map_err(SwapRunnerError::chain_query_failed)
    }

    /// Query the signer's pending transaction count
    ///
    /// The pending count, not the latest, so that a transaction broadcast
    /// earlier in the run is counted without waiting for its confirmation.
    pub async fn pending_nonce(&self) -> Result<u64, SwapRunnerError> {
        self.rpc_provider
            .get_transaction_count(self.wallet_address)
            .pending()
            .await
            .map_err(SwapRunnerError::chain_query_failed)
    }
}
