//! Client methods for generating executable swap calldata

use swap_runner_api::swap::{SwapCalldataResponse, SwapRequest, GENERATE_SWAP_CALLDATA_ROUTE};
use tracing::instrument;

use super::TradeClient;
use crate::error::SwapRunnerError;

impl TradeClient {
    /// Exchange a swap request for executable calldata and a swap description
    ///
    /// The returned payload is the trust boundary of the pipeline: the
    /// backend is trusted to produce calldata consistent with the request,
    /// and nothing downstream re-validates it.
    #[instrument(skip_all)]
    pub async fn generate_swap_calldata(
        &self,
        request: &SwapRequest,
    ) -> Result<SwapCalldataResponse, SwapRunnerError> {
        self.send_post_request(GENERATE_SWAP_CALLDATA_ROUTE, request)
            .await
            .map_err(SwapRunnerError::calldata_generation_failed)
    }
}
