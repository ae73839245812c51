//! X.509 certificate thumbprint, the value carried in the `x5t` header.
//!
//! A thumbprint is `base64(SHA-1(der))`, always exactly 28 characters of the
//! standard base64 alphabet, the last one being `=` padding.

use crate::sha1_base64_fingerprint;
use std::fmt;

/// A certificate thumbprint, computed once from the certificate bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Thumbprint(String);

impl Thumbprint {
    /// Compute the thumbprint of a DER-encoded certificate.
    #[must_use]
    pub fn compute(certificate: &[u8]) -> Self {
        Self(sha1_base64_fingerprint(certificate))
    }

    /// Return the thumbprint as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Thumbprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
