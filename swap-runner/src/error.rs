//! Error types for the swap runner
//!
//! Every pipeline stage maps its failures into exactly one variant here, so
//! the failing stage is identifiable from the error alone. There is no
//! recovery anywhere: each stage depends on fresh state from the previous
//! one, so the only safe retry is a new run with a fresh quote.

/// An error produced by the swap pipeline
#[derive(Debug, Clone, thiserror::Error)]
pub enum SwapRunnerError {
    /// The quote service was unreachable or returned an unusable quote
    #[error("quote unavailable: {0}")]
    QuoteUnavailable(String),
    /// The swap parameters failed validation
    #[error("invalid swap parameters: {0}")]
    InvalidSwapParameters(String),
    /// The allowance approval could not be broadcast
    #[error("approval submission failed: {0}")]
    ApprovalSubmissionFailed(String),
    /// The node reported that the allowance approval would revert
    #[error("approval rejected: {0}")]
    ApprovalRejected(String),
    /// The calldata endpoint failed or returned an unusable payload
    #[error("calldata generation failed: {0}")]
    CalldataGenerationFailed(String),
    /// A chain state query failed
    #[error("chain query failed: {0}")]
    ChainQueryFailed(String),
    /// The node rejected the swap transaction at broadcast
    #[error("submission rejected: {0}")]
    SubmissionRejected(String),
    /// The swap transaction was included on-chain but reverted
    #[error("transaction reverted: {0}")]
    TransactionReverted(String),
}

#[allow(clippy::needless_pass_by_value)]
impl SwapRunnerError {
    /// Create a new quote unavailable error
    pub fn quote_unavailable<T: ToString>(e: T) -> Self {
        SwapRunnerError::QuoteUnavailable(e.to_string())
    }

    /// Create a new invalid swap parameters error
    pub fn invalid_swap_parameters<T: ToString>(e: T) -> Self {
        SwapRunnerError::InvalidSwapParameters(e.to_string())
    }

    /// Create a new approval submission error
    pub fn approval_submission_failed<T: ToString>(e: T) -> Self {
        SwapRunnerError::ApprovalSubmissionFailed(e.to_string())
    }

    /// Create a new approval rejected error
    pub fn approval_rejected<T: ToString>(e: T) -> Self {
        SwapRunnerError::ApprovalRejected(e.to_string())
    }

    /// Create a new calldata generation error
    pub fn calldata_generation_failed<T: ToString>(e: T) -> Self {
        SwapRunnerError::CalldataGenerationFailed(e.to_string())
    }

    /// Create a new chain query error
    pub fn chain_query_failed<T: ToString>(e: T) -> Self {
        SwapRunnerError::ChainQueryFailed(e.to_string())
    }

    /// Create a new submission rejected error
    pub fn submission_rejected<T: ToString>(e: T) -> Self {
        SwapRunnerError::SubmissionRejected(e.to_string())
    }

    /// Create a new transaction reverted error
    pub fn transaction_reverted<T: ToString>(e: T) -> Self {
        SwapRunnerError::TransactionReverted(e.to_string())
    }
}
