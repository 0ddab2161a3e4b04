use thiserror::Error;

/// Failure modes for a single check or request. One check's error fills only
/// that check's slot in the report; it never aborts the rest of the batch.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A check was invoked without a capability it requires.
    #[error("required capability unavailable: {0}")]
    CapabilityUnavailable(&'static str),

    /// The request (or a field of it) could not be interpreted.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
