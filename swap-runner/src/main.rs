//! Executes a single-hop token swap through the exchange contract, sourcing
//! the quote and the executable calldata from the trading backend
#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]
#![deny(unsafe_code)]

pub mod abi;
pub mod chain_client;
pub mod cli;
pub mod error;
pub mod helpers;
pub mod swap;
pub mod trade_client;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    chain_client::ChainClient, cli::Cli, error::SwapRunnerError, trade_client::TradeClient,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swap_runner=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        error!("swap failed: {e}");
        std::process::exit(1);
    }
}

/// Run one swap end to end
async fn run(cli: Cli) -> Result<(), SwapRunnerError> {
    cli.validate().map_err(SwapRunnerError::invalid_swap_parameters)?;
    let signer = cli.signer().map_err(SwapRunnerError::invalid_swap_parameters)?;
    let config = cli.swap_config();

    let chain_client = ChainClient::new(&cli.rpc_url, signer)?;
    info!("wallet {:#x}", chain_client.wallet_address());

    let trade_client = TradeClient::new(cli.api_url.clone());

    let receipt = swap::run_swap(&config, &trade_client, &chain_client).await?;
    info!("swap confirmed in tx {:#x}", receipt.transaction_hash);

    Ok(())
}
