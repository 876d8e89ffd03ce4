//! HS256 token issuance
//!
//! Given an application identity, a signing secret and an arbitrary JSON
//! payload (a "bindle"), produces a signed, time-bounded compact token:
//! - [`ClaimsBuilder`] combines the payload with `iss`, `aud`, `jti` and `exp`
//! - [`TokenIssuer`] signs the claims with HMAC-SHA256
//!
//! Verification, key rotation and token transport are left to callers.
//!
//! ```
//! use bindle_jwt::{Bindle, TokenIssuer};
//! use serde_json::json;
//!
//! let issuer = TokenIssuer::new("orders-service", "s3cr3t");
//! let mut bindle = Bindle::new();
//! bindle.insert("role".to_string(), json!("admin"));
//!
//! let token = issuer.issue(bindle)?;
//! assert_eq!(token.as_str().split('.').count(), 3);
//! # Ok::<(), bindle_jwt::TokenError>(())
//! ```

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod claims;
pub mod config;
pub(crate) mod crypto;
mod error;
pub mod issuer;
pub mod key;
mod types;

pub use claims::{Bindle, Claims, ClaimsBuilder, RESERVED_CLAIMS, build_claims};
pub use config::{DEFAULT_EXPIRY_MINUTES, IssuerConfig};
pub use error::*;
pub use issuer::TokenIssuer;
pub use key::SigningKey;
pub use types::*;
