//! Builds the minimum-acceptable-return swap request from a quote

use alloy_primitives::Address;
use swap_runner_api::{quotes::QuoteResponse, swap::SwapRequest, units::scale_amount};

use crate::error::SwapRunnerError;

/// Validate the user-supplied swap parameters
pub fn validate_swap_parameters(amount_in: f64, min_return_percent: f64) -> Result<(), String> {
    if !amount_in.is_finite() || amount_in <= 0.0 {
        return Err(format!("amount in must be positive, got {amount_in}"));
    }

    if !(min_return_percent > 0.0 && min_return_percent <= 1.0) {
        return Err(format!("min return percent must be in (0, 1], got {min_return_percent}"));
    }

    Ok(())
}

/// Build a swap request from a quote and the configured slippage tolerance
///
/// Both amounts are re-scaled to the backend's fixed-point precision, which
/// is independent of the input asset's own ERC20 decimals. A quote of zero
/// yields a well-formed request with a zero minimum return.
pub fn build_swap_request(
    quote: &QuoteResponse,
    amount_in: f64,
    min_return_percent: f64,
    receiver_address: Address,
    protocol_decimals: u8,
) -> Result<SwapRequest, SwapRunnerError> {
    validate_swap_parameters(amount_in, min_return_percent)
        .map_err(SwapRunnerError::invalid_swap_parameters)?;

    let amount = scale_amount(amount_in, protocol_decimals)
        .map_err(SwapRunnerError::invalid_swap_parameters)?;
    let min_return_amount = scale_amount(quote.amount_out * min_return_percent, protocol_decimals)
        .map_err(SwapRunnerError::invalid_swap_parameters)?;

    Ok(SwapRequest {
        amount,
        min_return_amount,
        receiver_address,
        path: quote.exchange_contract_path.clone(),
    })
}
