//! CLI argument definition & parsing for the swap runner

use std::time::Duration;

use alloy::signers::local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};
use clap::Parser;
use swap_runner_api::units::PROTOCOL_DECIMALS;

use crate::swap::request::validate_swap_parameters;

/// The gas limit covering a worst-case swap through the pool executor; a
/// fixed constant, never estimated
const SWAP_THROUGH_POOLS_GAS_LIMIT: u64 = 600_000;

/// The cli for the swap runner
#[rustfmt::skip]
#[derive(Parser)]
#[clap(about = "Single-hop swap execution runner")]
pub struct Cli {
    // --- Signing --- //

    /// The secret recovery phrase the signing wallet is derived from
    #[clap(long, env = "SECRET_PHRASE", hide_env_values = true)]
    pub secret_phrase: String,

    // --- Endpoints --- //

    /// The chain RPC url to use
    #[clap(long, env = "RPC_URL")]
    pub rpc_url: String,
    /// The base url of the trading backend
    #[clap(long, env = "API_URL")]
    pub api_url: String,

    // --- Swap Parameters --- //

    /// The amount of the input asset to swap, in human units
    #[clap(long, env = "AMOUNT_IN")]
    pub amount_in: f64,
    /// The symbol of the input asset
    #[clap(long, env = "ASSET_IN")]
    pub asset_in: String,
    /// The ERC20 decimals of the input asset, used for the allowance amount
    #[clap(long, env = "ASSET_IN_DECIMALS", default_value = "18")]
    pub asset_in_decimals: u8,
    /// The symbol of the output asset
    #[clap(long, env = "ASSET_OUT")]
    pub asset_out: String,
    /// The fraction of the quoted output accepted as a minimum, in (0, 1]
    #[clap(long, env = "MIN_RETURN_PERCENT", default_value = "0.99")]
    pub min_return_percent: f64,

    // --- Execution Constants --- //

    /// The fixed-point precision the trading backend expects amounts at
    #[clap(long, default_value_t = PROTOCOL_DECIMALS)]
    pub protocol_decimals: u8,
    /// The gas limit for the swap transaction
    #[clap(long, default_value_t = SWAP_THROUGH_POOLS_GAS_LIMIT)]
    pub gas_limit: u64,
    /// How long to wait for swap confirmation, in seconds
    #[clap(long, default_value = "600")]
    pub confirmation_timeout_secs: u64,
}

/// The immutable configuration of one swap run, handed to the pipeline entry
/// point
#[derive(Clone, Debug)]
pub struct SwapConfig {
    /// The amount of the input asset to swap, in human units
    pub amount_in: f64,
    /// The symbol of the input asset
    pub asset_in: String,
    /// The ERC20 decimals of the input asset
    pub asset_in_decimals: u8,
    /// The symbol of the output asset
    pub asset_out: String,
    /// The fraction of the quoted output accepted as a minimum
    pub min_return_percent: f64,
    /// The fixed-point precision the trading backend expects amounts at
    pub protocol_decimals: u8,
    /// The gas limit for the swap transaction
    pub gas_limit: u64,
    /// How long to wait for swap confirmation
    pub confirmation_timeout: Duration,
}

impl Cli {
    /// Validate the CLI arguments
    ///
    /// Runs before any network call so that invalid intents never reach the
    /// backend or the chain.
    pub fn validate(&self) -> Result<(), String> {
        validate_swap_parameters(self.amount_in, self.min_return_percent)?;

        if self.asset_in == self.asset_out {
            return Err("asset in and asset out must differ".to_string());
        }

        Ok(())
    }

    /// Derive the signing wallet from the secret recovery phrase
    pub fn signer(&self) -> Result<PrivateKeySigner, String> {
        MnemonicBuilder::<English>::default()
            .phrase(self.secret_phrase.trim())
            .build()
            .map_err(|e| format!("deriving wallet from phrase: {e}"))
    }

    /// Build the swap configuration passed to the pipeline
    pub fn swap_config(&self) -> SwapConfig {
        SwapConfig {
            amount_in: self.amount_in,
            asset_in: self.asset_in.clone(),
            asset_in_decimals: self.asset_in_decimals,
            asset_out: self.asset_out.clone(),
            min_return_percent: self.min_return_percent,
            protocol_decimals: self.protocol_decimals,
            gas_limit: self.gas_limit,
            confirmation_timeout: Duration::from_secs(self.confirmation_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a Cli with valid defaults for tests
    fn test_cli() -> Cli {
        Cli {
            secret_phrase: "test test test test test test test test test test test junk".into(),
            rpc_url: "http://localhost:8545".into(),
            api_url: "http://localhost:3000".into(),
            amount_in: 0.1,
            asset_in: "USDT".into(),
            asset_in_decimals: 18,
            asset_out: "ORN".into(),
            min_return_percent: 0.99,
            protocol_decimals: PROTOCOL_DECIMALS,
            gas_limit: SWAP_THROUGH_POOLS_GAS_LIMIT,
            confirmation_timeout_secs: 600,
        }
    }

    /// Test that a well-formed configuration validates
    #[test]
    fn test_validate_ok() {
        assert!(test_cli().validate().is_ok());
    }

    /// Test that a non-positive amount is rejected before any network call
    #[test]
    fn test_validate_rejects_non_positive_amount() {
        for amount_in in [0.0, -0.1] {
            let cli = Cli { amount_in, ..test_cli() };
            assert!(cli.validate().is_err(), "amount_in: {amount_in}");
        }
    }

    /// Test that a slippage tolerance outside (0, 1] is rejected
    #[test]
    fn test_validate_rejects_bad_tolerance() {
        for min_return_percent in [0.0, -0.5, 1.01] {
            let cli = Cli { min_return_percent, ..test_cli() };
            assert!(cli.validate().is_err(), "tolerance: {min_return_percent}");
        }
    }

    /// Test that a same-asset pair is rejected
    #[test]
    fn test_validate_rejects_same_assets() {
        let cli = Cli { asset_out: "USDT".into(), ..test_cli() };
        assert!(cli.validate().is_err());
    }

    /// Test wallet derivation from a well-known development phrase
    #[test]
    fn test_signer_derivation() {
        let signer = test_cli().signer().unwrap();
        assert_eq!(
            format!("{:#x}", signer.address()),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    /// Test that a malformed phrase fails derivation
    #[test]
    fn test_signer_rejects_bad_phrase() {
        let cli = Cli { secret_phrase: "not a phrase".into(), ..test_cli() };
        assert!(cli.signer().is_err());
    }
}
