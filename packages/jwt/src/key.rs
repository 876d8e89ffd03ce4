//! Signing key storage

use std::fmt;
use zeroize::Zeroizing;

/// Symmetric HS256 signing key.
///
/// The bytes are wiped on drop and never printed by `Debug`. Not serializable.
#[derive(Clone)]
pub struct SigningKey {
    bytes: Zeroizing<Vec<u8>>,
}

impl SigningKey {
    /// Derive a key from a string secret (its UTF-8 bytes)
    #[must_use]
    pub fn from_secret(secret: &str) -> Self {
        Self::from_bytes(secret.as_bytes())
    }

    /// Create a key from raw bytes
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: Zeroizing::new(bytes.to_vec()),
        }
    }

    /// Whether the key holds no bytes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Key length in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
