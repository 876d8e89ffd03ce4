//! Token claims and the builder that assembles them

pub mod builder;
pub mod standard_claims;

pub use builder::{ClaimsBuilder, build_claims};
pub use standard_claims::{Bindle, Claims, RESERVED_CLAIMS};
