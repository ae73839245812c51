//! Certificate thumbprint utilities for client assertions
//!
//! This crate computes the `x5t` header value a client places in a
//! self-signed assertion so the authorization server can locate the
//! certificate it was signed with.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
pub(crate) use sha1::{Digest, Sha1};

mod thumbprint;
pub use thumbprint::Thumbprint;

/// Length in bytes of a SHA-1 digest.
pub const SHA1_DIGEST_LENGTH: usize = 20;

/// Error type for base64 decoding failures
#[derive(Debug, thiserror::Error)]
#[error("invalid base64 encoding: {0}")]
pub struct DecodeError(#[from] base64::DecodeError);

/// Compute the SHA-1 thumbprint of a DER-encoded certificate.
///
/// The thumbprint is computed as: `base64(SHA-1(certificate))`
///
/// The bytes are hashed as-is; no attempt is made to parse them as a
/// certificate. An empty slice yields the thumbprint of the empty string.
///
/// # Arguments
/// * `certificate` - The DER encoding of an X.509 certificate
///
/// # Returns
/// A 28 character standard base64 string (with padding) of the 20 byte digest
#[must_use]
pub fn sha1_base64_fingerprint(certificate: &[u8]) -> String {
    encode_base64(&Sha1::digest(certificate))
}

/// Encode bytes as standard base64 (RFC 4648 §4) with padding.
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode a standard base64 string (RFC 4648 §4) to bytes.
///
/// # Errors
/// Returns `DecodeError` if the input is not valid padded base64
pub fn decode_base64(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    STANDARD.decode(encoded).map_err(DecodeError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_deterministic() {
        let certificate = [1u8; 32];
        let first = sha1_base64_fingerprint(&certificate);
        let second = sha1_base64_fingerprint(&certificate);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fingerprint_known_vectors() {
        // If these change, the algorithm changed
        assert_eq!(sha1_base64_fingerprint(b""), "2jmj7l5rSw0yVb/vlWAYkK/YBwk=");
        assert_eq!(sha1_base64_fingerprint(b"abc"), "qZk+NkcGgWq6PiVxeFDCbJzQ2J0=");
        assert_eq!(
            sha1_base64_fingerprint(&[1u8; 32]),
            "1KNHOHMWYZbWAbwjYAtP9OY2yRE="
        );
    }

    #[test]
    fn test_fingerprint_of_empty_input() {
        let fingerprint = sha1_base64_fingerprint(&[]);
        assert_eq!(fingerprint.len(), 28);
        let digest = decode_base64(&fingerprint).expect("decode should succeed");
        assert_eq!(digest.len(), SHA1_DIGEST_LENGTH);
    }

    #[test]
    fn test_fingerprint_differs_for_different_input() {
        assert_ne!(
            sha1_base64_fingerprint(&[0x30, 0x82, 0x01, 0x0a]),
            sha1_base64_fingerprint(&[0x30, 0x82, 0x01, 0x0b])
        );
    }

    #[test]
    fn test_encode_base64() {
        assert_eq!(encode_base64(b"Hello"), "SGVsbG8=");
    }

    #[test]
    fn test_decode_base64() {
        let decoded = decode_base64("SGVsbG8=").expect("decode should succeed");
        assert_eq!(decoded, b"Hello");
    }

    #[test]
    fn test_decode_invalid_base64() {
        assert!(decode_base64("not valid base64!!!").is_err());
        // url-safe alphabet is not accepted
        assert!(decode_base64("qZk-NkcGgWq6PiVxeFDCbJzQ2J0=").is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Equal input always produces the same fingerprint
        #[test]
        fn fingerprint_deterministic(certificate: Vec<u8>) {
            let first = sha1_base64_fingerprint(&certificate);
            let second = sha1_base64_fingerprint(&certificate.clone());
            prop_assert_eq!(first, second);
        }

        /// The fingerprint always decodes back to a 20 byte digest
        #[test]
        fn fingerprint_decodes_to_digest(certificate: Vec<u8>) {
            let fingerprint = sha1_base64_fingerprint(&certificate);
            prop_assert_eq!(fingerprint.len(), 28);
            let digest = decode_base64(&fingerprint).unwrap();
            let expected = Sha1::digest(&certificate).to_vec();
            prop_assert_eq!(digest, expected);
        }

        /// Distinct inputs yield distinct fingerprints
        #[test]
        fn fingerprint_distinguishes_inputs(a: Vec<u8>, b: Vec<u8>) {
            prop_assume!(a != b);
            prop_assert_ne!(sha1_base64_fingerprint(&a), sha1_base64_fingerprint(&b));
        }

        /// Encoded output contains only standard base64 characters
        #[test]
        fn encode_produces_valid_base64_chars(bytes: Vec<u8>) {
            let encoded = encode_base64(&bytes);
            prop_assert!(encoded.chars().all(|c|
                c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='
            ));
        }
    }
}
