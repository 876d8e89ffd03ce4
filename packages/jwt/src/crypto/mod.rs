//! Token signing primitives

pub(crate) mod hmac_sha256;
