//! ERC20 allowance management for the exchange contract

use alloy_primitives::{Address, TxHash, U256};
use tracing::{info, instrument};

use super::ChainClient;
use crate::{abi::IERC20, error::SwapRunnerError, helpers::is_revert_error};

/// A broadcast allowance approval, recording the nonce it consumed
///
/// The swap transaction must take a strictly greater nonce; the assembler
/// takes this record as an input so the ordering is carried by the types
/// rather than by call-order discipline.
#[derive(Clone, Copy, Debug)]
pub struct ApprovalSubmission {
    /// The hash of the approval transaction
    pub tx_hash: TxHash,
    /// The nonce consumed by the approval transaction
    pub nonce: u64,
}

impl ChainClient {
    /// Approve `spender` to move `amount` units of the token from the signer
    ///
    /// Approves exactly the amount being swapped rather than an unbounded
    /// allowance, at the cost of re-approving on every run. The existing
    /// allowance is not read first; a fresh approval is always submitted.
    /// The approval is broadcast but not awaited: the swap is sequenced
    /// behind it by nonce alone.
    #[instrument(skip(self))]
    pub async fn approve_erc20_allowance(
        &self,
        token_address: Address,
        spender: Address,
        amount: U256,
    ) -> Result<ApprovalSubmission, SwapRunnerError> {
        let nonce = self.pending_nonce().await?;

        let erc20 = IERC20::new(token_address, self.provider().clone());
        let pending_tx =
            erc20.approve(spender, amount).nonce(nonce).send().await.map_err(|e| {
                let msg = e.to_string();
                if is_revert_error(&msg) {
                    SwapRunnerError::approval_rejected(msg)
                } else {
                    SwapRunnerError::approval_submission_failed(msg)
                }
            })?;

        let tx_hash = *pending_tx.tx_hash();
        info!("approval broadcast in tx {tx_hash:#x} (nonce {nonce})");

        Ok(ApprovalSubmission { tx_hash, nonce })
    }
}
