//! HS256 token issuer
//!
//! A [`TokenIssuer`] is immutable once built: the `with_*` methods return a
//! new value, so one issuer can be shared across threads without locking.
//! Per-token subject, audience and expiry changes go through
//! [`ClaimsBuilder`] instead.

use crate::claims::{Bindle, Claims, ClaimsBuilder};
use crate::config::{DEFAULT_EXPIRY_MINUTES, IssuerConfig};
use crate::crypto::hmac_sha256::sign_hs256;
use crate::error::{TokenError, TokenResult};
use crate::key::SigningKey;
use crate::types::{JwtHeader, JwtToken};
use serde::Serialize;

/// Signs claims on behalf of one application.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    application_name: String,
    subject_id: String,
    audience: String,
    expiry_minutes: i64,
    signing_key: SigningKey,
}

impl TokenIssuer {
    /// Issuer for `application_name` signing with `signing_secret`.
    ///
    /// Expiry defaults to [`DEFAULT_EXPIRY_MINUTES`]; subject and audience
    /// start empty.
    #[must_use]
    pub fn new(application_name: impl Into<String>, signing_secret: &str) -> Self {
        Self {
            application_name: application_name.into(),
            subject_id: String::new(),
            audience: String::new(),
            expiry_minutes: DEFAULT_EXPIRY_MINUTES,
            signing_key: SigningKey::from_secret(signing_secret),
        }
    }

    /// Build an issuer from configuration.
    ///
    /// # Errors
    /// Returns `TokenError::InvalidConfig` when `application_name` is empty.
    pub fn from_config(config: IssuerConfig) -> TokenResult<Self> {
        if config.application_name.is_empty() {
            return Err(TokenError::invalid_config("application_name must not be empty"));
        }

        Ok(Self {
            application_name: config.application_name,
            subject_id: config.subject_id,
            audience: config.audience,
            expiry_minutes: config.expiry_minutes,
            signing_key: SigningKey::from_secret(&config.signing_secret),
        })
    }

    /// Copy of this issuer with a different default subject identifier
    #[must_use]
    pub fn with_subject_id(mut self, subject_id: impl Into<String>) -> Self {
        self.subject_id = subject_id.into();
        self
    }

    /// Copy of this issuer with a different default audience
    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = audience.into();
        self
    }

    /// Copy of this issuer with a different validity window.
    ///
    /// Zero or negative values are accepted and yield tokens that are
    /// already expired.
    #[must_use]
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.expiry_minutes = minutes;
        self
    }

    /// Copy of this issuer signing with `key`
    #[must_use]
    pub fn with_signing_key(mut self, key: SigningKey) -> Self {
        self.signing_key = key;
        self
    }

    /// Issuing application name
    #[must_use]
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Default subject identifier
    #[must_use]
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// Default audience
    #[must_use]
    pub fn audience(&self) -> &str {
        &self.audience
    }

    /// Default validity window in minutes
    #[must_use]
    pub fn expiry_minutes(&self) -> i64 {
        self.expiry_minutes
    }

    /// Whether a non-empty signing key is present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.signing_key.is_empty()
    }

    /// Claims builder seeded from this issuer
    #[must_use]
    pub fn claims_builder(&self) -> ClaimsBuilder {
        ClaimsBuilder::new(self)
    }

    /// Claims for `bindle` expiring [`expiry_minutes`](Self::expiry_minutes)
    /// from now
    #[must_use]
    pub fn claims(&self, bindle: Bindle) -> Claims {
        crate::claims::build_claims(self, bindle)
    }

    /// Sign `claims` into a compact HS256 token.
    ///
    /// Output is deterministic: equal claims and key give an equal token.
    ///
    /// # Errors
    /// - `TokenError::UnconfiguredSigningKey` if the signing key is empty
    /// - `TokenError::EncodingFailure` if the claims cannot be encoded
    pub fn issue_token(&self, claims: &Claims) -> TokenResult<JwtToken> {
        if !self.is_configured() {
            tracing::error!(
                issuer = %self.application_name,
                "refusing to sign token: no signing key configured"
            );
            return Err(TokenError::UnconfiguredSigningKey);
        }

        match sign_hs256(&JwtHeader::HS256, claims, &self.signing_key) {
            Ok(token) => {
                tracing::debug!(
                    iss = %claims.issuer(),
                    exp = claims.expires_at(),
                    "issued token"
                );
                Ok(token)
            }
            Err(e) => {
                tracing::error!(
                    issuer = %self.application_name,
                    error = %e,
                    "token signing failed"
                );
                Err(e)
            }
        }
    }

    /// Build claims for `bindle` and sign them
    ///
    /// # Errors
    /// See [`issue_token`](Self::issue_token).
    pub fn issue(&self, bindle: Bindle) -> TokenResult<JwtToken> {
        self.issue_token(&self.claims(bindle))
    }

    /// Build claims from a typed payload and sign them
    ///
    /// # Errors
    /// `TokenError::EncodingFailure` if `payload` is not a JSON object, plus
    /// everything [`issue_token`](Self::issue_token) returns.
    pub fn issue_serializable<T: Serialize + ?Sized>(&self, payload: &T) -> TokenResult<JwtToken> {
        let claims = self.claims_builder().bindle_from(payload)?.build();
        self.issue_token(&claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_issuer_is_shareable() {
        assert_send_sync::<TokenIssuer>();
    }

    #[test]
    fn test_new_defaults() {
        let issuer = TokenIssuer::new("orders-service", "s3cr3t");
        assert_eq!(issuer.application_name(), "orders-service");
        assert_eq!(issuer.subject_id(), "");
        assert_eq!(issuer.audience(), "");
        assert_eq!(issuer.expiry_minutes(), 15);
        assert!(issuer.is_configured());
    }

    #[test]
    fn test_with_methods_leave_base_untouched() {
        let base = TokenIssuer::new("orders-service", "s3cr3t");
        let tuned = base
            .clone()
            .with_subject_id("user-42")
            .with_audience("billing")
            .with_expiry_minutes(60);

        assert_eq!(base.subject_id(), "");
        assert_eq!(tuned.subject_id(), "user-42");
        assert_eq!(tuned.audience(), "billing");
        assert_eq!(tuned.expiry_minutes(), 60);
    }

    #[test]
    fn test_debug_hides_key() {
        let issuer = TokenIssuer::new("orders-service", "s3cr3t");
        assert!(!format!("{issuer:?}").contains("s3cr3t"));
    }

    #[test]
    fn test_from_config_rejects_empty_application_name() {
        let err = TokenIssuer::from_config(IssuerConfig::new("", "s3cr3t")).unwrap_err();
        assert!(matches!(err, TokenError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_config_accepts_empty_secret() {
        let issuer = TokenIssuer::from_config(IssuerConfig::new("orders-service", "")).unwrap();
        assert!(!issuer.is_configured());
    }
}
