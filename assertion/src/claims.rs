//! Registered JWT header and claim names, and the fragment types decorators produce.
//!
//! Claim names follow RFC 7519 §4.1, the thumbprint header RFC 7515 §4.1.7.

use serde_json::{Map, Value};

/// Header parameters contributed by one decorator, keyed by parameter name.
pub type HeaderFragment = Map<String, Value>;

/// Claims contributed by one decorator, keyed by registered claim name.
pub type ClaimFragment = Map<String, Value>;

pub const AUDIENCE: &str = "aud";
pub const ISSUER: &str = "iss";
pub const SUBJECT: &str = "sub";
pub const JWT_ID: &str = "jti";
pub const ISSUED_AT: &str = "iat";
pub const EXPIRATION_TIME: &str = "exp";

/// X.509 certificate SHA-1 thumbprint header parameter.
pub const X509_THUMBPRINT: &str = "x5t";
