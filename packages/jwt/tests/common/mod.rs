//! HS256 verification helper for tests; the library itself only signs.

#![allow(dead_code)]

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use bindle_jwt::Claims;
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, PartialEq, Eq)]
pub enum VerifyError {
    Format,
    Signature,
    Json,
}

/// Check the signature of `token` with `secret` and return the raw claim object.
pub fn verify_hs256(token: &str, secret: &[u8]) -> Result<Value, VerifyError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(VerifyError::Format);
    }

    let header = decode_segment(parts[0])?;
    if header != serde_json::json!({"alg": "HS256", "typ": "JWT"}) {
        return Err(VerifyError::Format);
    }

    let mut mac = HmacSha256::new_from_slice(secret).map_err(|_| VerifyError::Format)?;
    mac.update(format!("{}.{}", parts[0], parts[1]).as_bytes());
    let expected = mac.finalize().into_bytes();
    let actual = URL_SAFE_NO_PAD
        .decode(parts[2])
        .map_err(|_| VerifyError::Format)?;

    if !bool::from(expected.as_slice().ct_eq(&actual)) {
        return Err(VerifyError::Signature);
    }

    decode_segment(parts[1])
}

/// Verify and decode into [`Claims`].
pub fn verify_claims(token: &str, secret: &[u8]) -> Result<Claims, VerifyError> {
    let value = verify_hs256(token, secret)?;
    serde_json::from_value(value).map_err(|_| VerifyError::Json)
}

fn decode_segment(segment: &str) -> Result<Value, VerifyError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| VerifyError::Format)?;
    serde_json::from_slice(&bytes).map_err(|_| VerifyError::Json)
}
