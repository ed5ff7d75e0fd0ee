//! Error taxonomy for gateway operations.

use thiserror::Error;

/// Errors that can occur while talking to the external generative model.
///
/// None of these ever reach a caller of a gateway operation: every public
/// operation converts a failure into a fallback result. The taxonomy exists
/// so the driver can log what went wrong before degrading.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Missing or invalid credential, or a client that could not be built.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Transport-level failure reaching the model API.
    #[error("network error: {0}")]
    Network(String),

    /// The response arrived but did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The model answered with nothing usable (no candidates, zero verses).
    #[error("empty response: {0}")]
    EmptyResponse(String),
}

/// Result type for gateway-internal operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
