//! HMAC-SHA256 compact token signing

use crate::error::{TokenError, TokenResult};
use crate::key::SigningKey;
use crate::types::{JwtHeader, JwtToken};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 over raw bytes. Any key length is accepted, so the
/// `InvalidKey` branch is unreachable in practice.
pub(crate) fn hmac_sha256_sign(data: &[u8], key: &SigningKey) -> TokenResult<Vec<u8>> {
    let mut mac = HmacSha256::new_from_slice(key.as_bytes())
        .map_err(|e| TokenError::invalid_key(&e.to_string()))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Encode `header` and `claims`, sign `header.payload` and join the three
/// base64url (unpadded) segments with `.`.
pub(crate) fn sign_hs256<T: Serialize>(
    header: &JwtHeader,
    claims: &T,
    key: &SigningKey,
) -> TokenResult<JwtToken> {
    if key.is_empty() {
        return Err(TokenError::UnconfiguredSigningKey);
    }

    let header_bytes = serde_json::to_vec(header)?;
    let claims_bytes = serde_json::to_vec(claims)?;

    let header_b64 = URL_SAFE_NO_PAD.encode(&header_bytes);
    let claims_b64 = URL_SAFE_NO_PAD.encode(&claims_bytes);

    let signing_input = format!("{header_b64}.{claims_b64}");
    let signature = hmac_sha256_sign(signing_input.as_bytes(), key)?;
    let signature_b64 = URL_SAFE_NO_PAD.encode(&signature);

    Ok(JwtToken::new(format!("{signing_input}.{signature_b64}")))
}
