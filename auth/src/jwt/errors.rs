use thiserror::Error;

/// Error type for session token operations.
///
/// The three verification failures are all client faults and map to a 401
/// at the HTTP boundary; none of them is a server error.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Token string cannot be parsed as a JWT.
    #[error("Malformed token: {0}")]
    Malformed(String),

    /// Signature does not match the payload (tampered or wrong key).
    #[error("Invalid token signature")]
    BadSignature,

    /// Token was valid but its expiry has passed.
    #[error("Token expired")]
    Expired,

    /// Claims could not be signed into a token.
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}
