/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("scoring failed: {reason}")]
    ScoringFailed { reason: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },
}
