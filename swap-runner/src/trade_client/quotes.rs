//! Client methods for fetching swap quotes

use swap_runner_api::quotes::{QuoteResponse, POOLS_EXCHANGE_MODE, QUOTE_ROUTE};
use tracing::instrument;

use super::TradeClient;
use crate::error::SwapRunnerError;

impl TradeClient {
    /// Fetch a quote for swapping `amount_in` of `asset_in` into `asset_out`
    ///
    /// There are no retries: without a usable quote there is no safe
    /// minimum-return bound, so a failure here aborts the run.
    #[instrument(skip(self))]
    pub async fn get_quote(
        &self,
        asset_in: &str,
        asset_out: &str,
        amount_in: f64,
    ) -> Result<QuoteResponse, SwapRunnerError> {
        let amount_in = amount_in.to_string();
        let params = [
            ("amountIn", amount_in.as_str()),
            ("assetIn", asset_in),
            ("assetOut", asset_out),
            ("exchanges", POOLS_EXCHANGE_MODE),
        ];

        let quote: QuoteResponse = self
            .send_get_request(QUOTE_ROUTE, &params)
            .await
            .map_err(SwapRunnerError::quote_unavailable)?;

        if !quote.amount_out.is_finite() || quote.amount_out < 0.0 {
            return Err(SwapRunnerError::quote_unavailable(format!(
                "malformed output amount {}",
                quote.amount_out
            )));
        }

        Ok(quote)
    }
}
