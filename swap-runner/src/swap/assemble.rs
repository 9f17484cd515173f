//! Assembles the unsigned swap transaction
//!
//! The transaction targets the exchange contract, which internally invokes
//! the executor with the backend-supplied swap description and calldata.

use alloy::{network::TransactionBuilder, rpc::types::TransactionRequest};
use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use swap_runner_api::swap::{ApiSwapDescription, SwapCalldataResponse};

use crate::{
    abi::{IExchange, SwapDescription},
    chain_client::approval::ApprovalSubmission,
};

/// The chain-level parameters of the swap transaction
#[derive(Clone, Copy, Debug)]
pub struct ChainParams {
    /// The chain id of the connected network
    pub chain_id: u64,
    /// The gas price, in wei
    pub gas_price: u128,
    /// The fixed gas limit
    pub gas_limit: u64,
    /// The signing wallet's address
    pub from: Address,
}

/// The nonce for the swap transaction: the signer's pending count, floored
/// strictly past the approval's nonce
///
/// The floor guards against a lagging node that has not yet counted the
/// approval in its pending set; reusing the approval's nonce would replace
/// the approval instead of following it.
pub fn swap_nonce(pending_nonce: u64, approval: &ApprovalSubmission) -> u64 {
    pending_nonce.max(approval.nonce + 1)
}

/// ABI-encode the exchange's swap entry point invocation for the payload
///
/// The auxiliary permit bytes are always empty; permit-based approvals are
/// not used by this pipeline.
pub fn encode_swap_call(executor: Address, payload: &SwapCalldataResponse) -> Bytes {
    let call = IExchange::swapCall {
        executor,
        desc: to_swap_description(&payload.swap_description),
        permit: Bytes::new(),
        data: payload.calldata.clone(),
    };

    call.abi_encode().into()
}

/// Build the unsigned swap transaction
pub fn assemble_swap_tx(
    exchange: Address,
    executor: Address,
    payload: &SwapCalldataResponse,
    params: &ChainParams,
    approval: &ApprovalSubmission,
    pending_nonce: u64,
) -> TransactionRequest {
    TransactionRequest::default()
        .with_to(exchange)
        .with_from(params.from)
        .with_value(U256::ZERO)
        .with_input(encode_swap_call(executor, payload))
        .with_chain_id(params.chain_id)
        .with_gas_price(params.gas_price)
        .with_gas_limit(params.gas_limit)
        .with_nonce(swap_nonce(pending_nonce, approval))
}

/// Convert the backend's swap description into its on-chain representation
fn to_swap_description(desc: &ApiSwapDescription) -> SwapDescription {
    SwapDescription {
        srcToken: desc.src_token,
        dstToken: desc.dst_token,
        srcReceiver: desc.src_receiver,
        dstReceiver: desc.dst_receiver,
        amount: desc.amount,
        minReturnAmount: desc.min_return_amount,
        flags: desc.flags,
    }
}
