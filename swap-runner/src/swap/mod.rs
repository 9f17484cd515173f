//! The swap execution pipeline
//!
//! One run is a strictly sequential pass through: exchange metadata, chain
//! parameters, allowance approval, quote, request building, calldata
//! generation, transaction assembly, and submission. Each stage's output is
//! the next stage's sole input, and any failure aborts the run; the caller
//! restarts from a fresh quote if a retry is wanted.

pub mod assemble;
pub mod request;
pub mod submit;

use alloy::rpc::types::TransactionReceipt;
use alloy_primitives::Address;
use swap_runner_api::{info::ExchangeInfo, units::scale_amount};
use tracing::{info, instrument};

use crate::{
    chain_client::ChainClient,
    cli::SwapConfig,
    error::SwapRunnerError,
    swap::assemble::{assemble_swap_tx, ChainParams},
    trade_client::TradeClient,
};

/// Run one swap intent end to end, returning the confirmation receipt
#[instrument(
    skip_all,
    fields(
        asset_in = %config.asset_in,
        asset_out = %config.asset_out,
        amount_in = config.amount_in,
    )
)]
pub async fn run_swap(
    config: &SwapConfig,
    trade_client: &TradeClient,
    chain_client: &ChainClient,
) -> Result<TransactionReceipt, SwapRunnerError> {
    let exchange_info = trade_client.get_exchange_info().await?;
    let asset_in_address = resolve_asset(&exchange_info, &config.asset_in)?;

    // Chain parameters for the assembly stage
    let chain_id = chain_client.chain_id().await?;
    let gas_price = trade_client.get_gas_price().await?;

    // Authorize the exchange to move exactly this swap's input
    let allowance_amount = scale_amount(config.amount_in, config.asset_in_decimals)
        .map_err(SwapRunnerError::invalid_swap_parameters)?;
    let approval = chain_client
        .approve_erc20_allowance(
            asset_in_address,
            exchange_info.exchange_contract_address,
            allowance_amount,
        )
        .await?;

    let quote =
        trade_client.get_quote(&config.asset_in, &config.asset_out, config.amount_in).await?;
    info!(
        "quoted {} {} for {} {} over {} hops",
        quote.amount_out,
        config.asset_out,
        config.amount_in,
        config.asset_in,
        quote.exchange_contract_path.len(),
    );

    let swap_request = request::build_swap_request(
        &quote,
        config.amount_in,
        config.min_return_percent,
        chain_client.wallet_address(),
        config.protocol_decimals,
    )?;
    let payload = trade_client.generate_swap_calldata(&swap_request).await?;

    // The pending count includes the approval broadcast above; the approval
    // is also passed in so the nonce ordering survives reordering of the
    // queries themselves
    let pending_nonce = chain_client.pending_nonce().await?;
    let params = ChainParams {
        chain_id,
        gas_price,
        gas_limit: config.gas_limit,
        from: chain_client.wallet_address(),
    };
    let tx = assemble_swap_tx(
        exchange_info.exchange_contract_address,
        exchange_info.swap_executor_contract_address,
        &payload,
        &params,
        &approval,
        pending_nonce,
    );

    let receipt = chain_client.submit_and_confirm(tx, config.confirmation_timeout).await?;
    submit::log_received_amount(
        &receipt,
        payload.swap_description.dst_token,
        chain_client.wallet_address(),
    );

    Ok(receipt)
}

/// Resolve an asset symbol against the exchange's asset listing
fn resolve_asset(info: &ExchangeInfo, symbol: &str) -> Result<Address, SwapRunnerError> {
    info.asset_address(symbol).ok_or_else(|| {
        SwapRunnerError::invalid_swap_parameters(format!("unknown asset symbol {symbol}"))
    })
}
