/// Error type for risk scoring
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    /// Input that should have been rejected by the HTTP boundary
    #[error("invalid parameter: {0}")]
    Validation(String),

    /// Unexpected failure during scoring; not retried, not recoverable
    #[error("computation failed: {0}")]
    Computation(String),
}
