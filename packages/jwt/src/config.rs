//! Issuer configuration

use crate::error::{TokenError, TokenResult};
use serde::{Deserialize, Deserializer};
use std::fmt;
use zeroize::Zeroizing;

/// Default validity window of an issued token, in minutes.
pub const DEFAULT_EXPIRY_MINUTES: i64 = 15;

/// Serializable description of a [`TokenIssuer`](crate::TokenIssuer).
#[derive(Clone, Deserialize)]
pub struct IssuerConfig {
    /// Issuing application, written to `iss`
    pub application_name: String,
    /// HS256 secret, wiped on drop; an empty secret fails at signing time
    #[serde(default = "empty_secret", deserialize_with = "deserialize_secret")]
    pub signing_secret: Zeroizing<String>,
    /// Subject identifier, written to `jti`
    #[serde(default)]
    pub subject_id: String,
    /// Intended recipient, written to `aud`
    #[serde(default)]
    pub audience: String,
    /// Minutes between claim construction and `exp`
    #[serde(default = "default_expiry_minutes")]
    pub expiry_minutes: i64,
}

fn default_expiry_minutes() -> i64 {
    DEFAULT_EXPIRY_MINUTES
}

fn empty_secret() -> Zeroizing<String> {
    Zeroizing::new(String::new())
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Zeroizing<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Zeroizing::new)
}

impl IssuerConfig {
    /// Configuration with the default expiry and empty subject/audience
    #[must_use]
    pub fn new(application_name: impl Into<String>, signing_secret: impl Into<String>) -> Self {
        Self {
            application_name: application_name.into(),
            signing_secret: Zeroizing::new(signing_secret.into()),
            subject_id: String::new(),
            audience: String::new(),
            expiry_minutes: DEFAULT_EXPIRY_MINUTES,
        }
    }

    /// Parse a JSON configuration document
    ///
    /// # Errors
    /// Returns `TokenError::InvalidConfig` if the document is malformed or
    /// `application_name` is missing.
    pub fn from_json_str(json: &str) -> TokenResult<Self> {
        serde_json::from_str(json).map_err(|e| {
            tracing::error!(error = %e, "failed to parse issuer configuration");
            TokenError::invalid_config(&e.to_string())
        })
    }
}

impl fmt::Debug for IssuerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssuerConfig")
            .field("application_name", &self.application_name)
            .field("signing_secret", &"<redacted>")
            .field("subject_id", &self.subject_id)
            .field("audience", &self.audience)
            .field("expiry_minutes", &self.expiry_minutes)
            .finish()
    }
}
