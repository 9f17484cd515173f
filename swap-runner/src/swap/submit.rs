//! Signs, broadcasts, and confirms the assembled swap transaction

use std::time::Duration;

use alloy::{
    providers::Provider,
    rpc::types::{TransactionReceipt, TransactionRequest},
};
use alloy_primitives::{Address, Log, U256};
use alloy_sol_types::SolEvent;
use tracing::{info, instrument, warn};

use crate::{
    abi::IERC20::Transfer, chain_client::ChainClient, error::SwapRunnerError,
    helpers::ONE_CONFIRMATION,
};

impl ChainClient {
    /// Sign and broadcast the swap transaction, then wait for one
    /// confirmation
    ///
    /// A node rejection at broadcast and an on-chain revert at inclusion are
    /// distinct terminal failures; neither is retried, since a retry needs a
    /// fresh quote.
    #[instrument(skip_all)]
    pub async fn submit_and_confirm(
        &self,
        tx: TransactionRequest,
        timeout: Duration,
    ) -> Result<TransactionReceipt, SwapRunnerError> {
        let pending_tx = self
            .provider()
            .send_transaction(tx)
            .await
            .map_err(SwapRunnerError::submission_rejected)?;

        let tx_hash = *pending_tx.tx_hash();
        info!("swap broadcast in tx {tx_hash:#x}, waiting for confirmation");

        let receipt = pending_tx
            .with_required_confirmations(ONE_CONFIRMATION)
            .with_timeout(Some(timeout))
            .get_receipt()
            .await
            .map_err(SwapRunnerError::chain_query_failed)?;

        if !receipt.status() {
            return Err(SwapRunnerError::transaction_reverted(format!(
                "{:#x}",
                receipt.transaction_hash
            )));
        }

        Ok(receipt)
    }
}

/// Report the amount of the output token received by the recipient,
/// extracted from the receipt's transfer events
///
/// Reporting only: a swap routed through a nonstandard token may not emit a
/// matching transfer, which is logged rather than treated as a failure.
pub fn log_received_amount(receipt: &TransactionReceipt, token: Address, recipient: Address) {
    let logs: Vec<Log> = receipt.logs().iter().map(|log| log.inner.clone()).collect();
    match received_amount(&logs, token, recipient) {
        Some(amount) => info!("received {amount} units of {token:#x}"),
        None => warn!("no transfer of {token:#x} to {recipient:#x} found in receipt"),
    }
}

/// Extract the amount transferred to `recipient` from the token's transfer
/// events
fn received_amount(logs: &[Log], token: Address, recipient: Address) -> Option<U256> {
    logs.iter()
        .filter(|log| log.address == token)
        .filter_map(|log| Transfer::decode_log(log).ok())
        .find_map(|transfer| (transfer.to == recipient).then_some(transfer.value))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::address;

    use super::*;

    /// The output token used across tests
    const TOKEN: Address = address!("0xe4ca1f75eca6214393fce1c1b316c237664eaa8e");
    /// The swap recipient used across tests
    const RECIPIENT: Address = address!("0x61eed69c0d112c690fd6f44bb621357b89fbe67f");

    /// Build a transfer event log emitted by `token`
    fn transfer_log(token: Address, from: Address, to: Address, value: U256) -> Log {
        let event = Transfer { from, to, value };
        Log { address: token, data: event.encode_log_data() }
    }

    /// Test extraction of the recipient's transfer from a receipt's logs
    #[test]
    fn test_received_amount() {
        let pool = address!("0x05c5fcf3ce15cd6dca2b9bb6371a3cd5cf55e4c3");
        let logs = vec![
            // An unrelated token's transfer to the recipient
            transfer_log(pool, pool, RECIPIENT, U256::from(1u8)),
            // The output token leaving the pool toward someone else
            transfer_log(TOKEN, pool, pool, U256::from(2u8)),
            // The transfer being looked for
            transfer_log(TOKEN, pool, RECIPIENT, U256::from(9_405_000u64)),
        ];

        assert_eq!(received_amount(&logs, TOKEN, RECIPIENT), Some(U256::from(9_405_000u64)));
    }

    /// Test that an absent transfer yields no amount
    #[test]
    fn test_received_amount_missing() {
        let logs = vec![transfer_log(TOKEN, RECIPIENT, TOKEN, U256::from(1u8))];
        assert_eq!(received_amount(&logs, TOKEN, RECIPIENT), None);
    }
}
