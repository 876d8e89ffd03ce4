//! Token and header types

use serde::Serialize;

/// JOSE header for HS256 tokens.
///
/// Field order is fixed, so the encoded header is always
/// `{"alg":"HS256","typ":"JWT"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JwtHeader {
    /// Signing algorithm
    pub alg: &'static str,
    /// Token type
    pub typ: &'static str,
}

impl JwtHeader {
    /// Header for HMAC-SHA256 signed tokens
    pub const HS256: JwtHeader = JwtHeader {
        alg: "HS256",
        typ: "JWT",
    };
}

impl Default for JwtHeader {
    fn default() -> Self {
        Self::HS256
    }
}

/// Signed compact token (`header.payload.signature`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JwtToken(String);

impl JwtToken {
    pub(crate) fn new(token: String) -> Self {
        Self(token)
    }

    /// Borrow the token string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the token string
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Split into the encoded header, payload and signature segments
    #[must_use]
    pub fn segments(&self) -> Option<(&str, &str, &str)> {
        let mut parts = self.0.splitn(3, '.');
        let header = parts.next()?;
        let payload = parts.next()?;
        let signature = parts.next()?;
        Some((header, payload, signature))
    }
}

impl AsRef<str> for JwtToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<JwtToken> for String {
    fn from(token: JwtToken) -> Self {
        token.0
    }
}

impl std::fmt::Display for JwtToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
