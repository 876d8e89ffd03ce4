//! Token issuance error types

use thiserror::Error;

/// Token issuance result type
pub type TokenResult<T> = Result<T, TokenError>;

/// Errors produced while building claims or signing a token.
///
/// None of these are transient: signing has no I/O, so retrying the same
/// call with the same inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Signing was attempted without a signing key
    #[error("no signing key is configured for this token issuer")]
    UnconfiguredSigningKey,
    /// Claims or payload could not be encoded as a JSON object
    #[error("failed to encode claims: {0}")]
    EncodingFailure(String),
    /// The MAC primitive rejected the key material.
    ///
    /// HMAC-SHA256 accepts keys of any length, so HS256 signing never
    /// returns this; it covers the fallible `new_from_slice` constructor.
    #[error("invalid signing key: {0}")]
    InvalidKey(String),
    /// Issuer configuration is unusable
    #[error("invalid issuer configuration: {0}")]
    InvalidConfig(String),
}

impl TokenError {
    /// Create an encoding failure error
    #[inline]
    #[must_use]
    pub fn encoding_failure(msg: &str) -> Self {
        TokenError::EncodingFailure(msg.to_string())
    }

    /// Create an invalid key error
    #[inline]
    #[must_use]
    pub fn invalid_key(msg: &str) -> Self {
        TokenError::InvalidKey(msg.to_string())
    }

    /// Create an invalid configuration error
    #[inline]
    #[must_use]
    pub fn invalid_config(msg: &str) -> Self {
        TokenError::InvalidConfig(msg.to_string())
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::EncodingFailure(err.to_string())
    }
}
