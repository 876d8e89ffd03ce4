//! Standard claim set with a flattened application payload

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Schema-less application payload carried inside a token.
pub type Bindle = Map<String, Value>;

/// Claim names owned by the issuer. A payload cannot override them.
pub const RESERVED_CLAIMS: [&str; 4] = ["aud", "exp", "jti", "iss"];

/// Immutable token claims.
///
/// Encodes as one flat JSON object: `aud`, `exp`, `jti` and `iss` first,
/// then every payload entry. Empty `aud`, `jti` and `iss` are omitted and
/// decode back to empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    aud: String,
    exp: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    jti: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    iss: String,
    #[serde(flatten)]
    bindle: Bindle,
}

impl Claims {
    /// Callers go through `ClaimsBuilder`, which strips reserved keys from
    /// `bindle` first.
    pub(crate) fn from_parts(
        subject_id: String,
        audience: String,
        issuer: String,
        expires_at: i64,
        bindle: Bindle,
    ) -> Self {
        Self {
            aud: audience,
            exp: expires_at,
            jti: subject_id,
            iss: issuer,
            bindle,
        }
    }

    /// Subject identifier (`jti`)
    #[must_use]
    pub fn subject_id(&self) -> &str {
        &self.jti
    }

    /// Intended audience (`aud`)
    #[must_use]
    pub fn audience(&self) -> &str {
        &self.aud
    }

    /// Issuing application (`iss`)
    #[must_use]
    pub fn issuer(&self) -> &str {
        &self.iss
    }

    /// Expiry as Unix seconds (`exp`)
    #[must_use]
    pub fn expires_at(&self) -> i64 {
        self.exp
    }

    /// Expiry as a UTC instant, if it is representable
    #[must_use]
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Application payload
    #[must_use]
    pub fn bindle(&self) -> &Bindle {
        &self.bindle
    }

    /// Take the application payload
    #[must_use]
    pub fn into_bindle(self) -> Bindle {
        self.bindle
    }
}
