//! Claims builder
//!
//! Seeds the standard claims from a [`TokenIssuer`] and merges in the
//! caller's payload. Identity fields are passed through verbatim; failures
//! are only detected when the claims are signed.

use super::standard_claims::{Bindle, Claims, RESERVED_CLAIMS};
use crate::error::{TokenError, TokenResult};
use crate::issuer::TokenIssuer;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

const SECONDS_PER_MINUTE: i64 = 60;

/// Builder for [`Claims`]
#[derive(Debug, Clone)]
pub struct ClaimsBuilder {
    subject_id: String,
    audience: String,
    issuer: String,
    expiry_minutes: i64,
    bindle: Bindle,
}

impl ClaimsBuilder {
    /// Start from the issuer's configured identity fields
    #[must_use]
    pub fn new(issuer: &TokenIssuer) -> Self {
        Self {
            subject_id: issuer.subject_id().to_string(),
            audience: issuer.audience().to_string(),
            issuer: issuer.application_name().to_string(),
            expiry_minutes: issuer.expiry_minutes(),
            bindle: Bindle::new(),
        }
    }

    /// Override the subject identifier for this token only
    #[inline]
    #[must_use]
    pub fn subject(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_id = subject_id.into();
        self
    }

    /// Override the audience for this token only
    #[inline]
    #[must_use]
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// Override the validity window for this token only
    #[inline]
    #[must_use]
    pub fn expiry_minutes(mut self, minutes: i64) -> Self {
        self.expiry_minutes = minutes;
        self
    }

    /// Merge a payload map; later keys win
    #[must_use]
    pub fn bindle(mut self, bindle: Bindle) -> Self {
        self.bindle.extend(bindle);
        self
    }

    /// Set a single payload entry
    #[must_use]
    pub fn claim(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.bindle.insert(key.into(), value.into());
        self
    }

    /// Merge any serializable value whose JSON form is an object
    ///
    /// # Errors
    /// Returns `TokenError::EncodingFailure` if `payload` fails to serialize
    /// or does not serialize to a JSON object.
    pub fn bindle_from<T: Serialize + ?Sized>(self, payload: &T) -> TokenResult<Self> {
        match serde_json::to_value(payload)? {
            Value::Object(map) => Ok(self.bindle(map)),
            other => Err(TokenError::EncodingFailure(format!(
                "payload must be a JSON object, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Build with the current wall-clock time
    #[must_use]
    pub fn build(self) -> Claims {
        self.build_at(Utc::now())
    }

    /// Build with `now` as the issuance instant
    #[must_use]
    pub fn build_at(self, now: DateTime<Utc>) -> Claims {
        let mut bindle = self.bindle;
        for reserved in RESERVED_CLAIMS {
            if bindle.remove(reserved).is_some() {
                tracing::warn!(
                    claim = reserved,
                    "dropping payload entry that shadows a standard claim"
                );
            }
        }

        Claims::from_parts(
            self.subject_id,
            self.audience,
            self.issuer,
            expiry_timestamp(now, self.expiry_minutes),
            bindle,
        )
    }
}

/// Build claims for `bindle` from the issuer's identity fields, expiring
/// `issuer.expiry_minutes()` from now.
#[must_use]
pub fn build_claims(issuer: &TokenIssuer, bindle: Bindle) -> Claims {
    ClaimsBuilder::new(issuer).bindle(bindle).build()
}

/// `now + minutes` in Unix seconds, saturating at the `i64` bounds
pub(crate) fn expiry_timestamp(now: DateTime<Utc>, minutes: i64) -> i64 {
    now.timestamp()
        .saturating_add(minutes.saturating_mul(SECONDS_PER_MINUTE))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_expiry_timestamp() {
        assert_eq!(expiry_timestamp(fixed_now(), 15), 1_700_000_900);
        assert_eq!(expiry_timestamp(fixed_now(), 0), 1_700_000_000);
        assert_eq!(expiry_timestamp(fixed_now(), -1), 1_699_999_940);
    }

    #[test]
    fn test_expiry_timestamp_saturates() {
        assert_eq!(expiry_timestamp(fixed_now(), i64::MAX), i64::MAX);
        assert_eq!(
            expiry_timestamp(fixed_now(), i64::MIN),
            i64::MIN + 1_700_000_000
        );

        let before_epoch = Utc.timestamp_opt(-1, 0).unwrap();
        assert_eq!(expiry_timestamp(before_epoch, i64::MIN), i64::MIN);
    }

    #[test]
    fn test_reserved_keys_are_dropped() {
        let issuer = TokenIssuer::new("orders-service", "s3cr3t");
        let claims = ClaimsBuilder::new(&issuer)
            .claim("iss", "spoofed")
            .claim("exp", 0)
            .claim("role", "admin")
            .build_at(fixed_now());

        assert_eq!(claims.issuer(), "orders-service");
        assert_eq!(claims.expires_at(), 1_700_000_900);
        assert_eq!(claims.bindle().len(), 1);
        assert_eq!(claims.bindle().get("role"), Some(&json!("admin")));
    }

    #[test]
    fn test_bindle_from_rejects_non_objects() {
        let issuer = TokenIssuer::new("orders-service", "s3cr3t");
        let err = ClaimsBuilder::new(&issuer)
            .bindle_from(&vec![1, 2, 3])
            .unwrap_err();
        assert_eq!(
            err,
            TokenError::encoding_failure("payload must be a JSON object, got an array")
        );
    }
}
