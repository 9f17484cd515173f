//! Client methods for fetching exchange metadata and gas pricing

use swap_runner_api::{
    info::{ExchangeInfo, GasPriceResponse, GAS_PRICE_ROUTE, INFO_ROUTE},
    u256_try_into_u128,
};
use tracing::instrument;

use super::TradeClient;
use crate::error::SwapRunnerError;

impl TradeClient {
    /// Fetch the exchange deployment metadata
    #[instrument(skip_all)]
    pub async fn get_exchange_info(&self) -> Result<ExchangeInfo, SwapRunnerError> {
        self.send_get_request(INFO_ROUTE, &[]).await.map_err(SwapRunnerError::chain_query_failed)
    }

    /// Fetch the current recommended gas price, in wei
    #[instrument(skip_all)]
    pub async fn get_gas_price(&self) -> Result<u128, SwapRunnerError> {
        let GasPriceResponse(wei) = self
            .send_get_request(GAS_PRICE_ROUTE, &[])
            .await
            .map_err(SwapRunnerError::chain_query_failed)?;

        u256_try_into_u128(wei).map_err(SwapRunnerError::chain_query_failed)
    }
}
