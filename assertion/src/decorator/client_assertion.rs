use std::sync::Arc;

use ca_crypto::Thumbprint;
use serde_json::Value;
use uuid::Uuid;

use super::JwtDecorator;
use crate::claims::{
    ClaimFragment, HeaderFragment, AUDIENCE, EXPIRATION_TIME, ISSUED_AT, ISSUER, JWT_ID, SUBJECT,
    X509_THUMBPRINT,
};
use crate::clock::Clock;
use crate::config::{AssertionConfig, ConfigError};

/// Produces the header and claims of a certificate-bound client assertion.
///
/// The client asserts its own identity: `iss` and `sub` both carry the client
/// id, and the `x5t` header lets the authorization server find the
/// certificate whose key signs the token.
#[derive(Debug, Clone)]
pub struct ClientAssertionDecorator {
    audience: String,
    client_id: String,
    thumbprint: Thumbprint,
    clock: Arc<dyn Clock>,
    validity_seconds: u64,
}

impl ClientAssertionDecorator {
    /// Create a decorator for one client.
    ///
    /// # Arguments
    /// * `audience` - Identifier of the authorization server (usually its token endpoint)
    /// * `client_id` - Client identifier, used as issuer and subject
    /// * `certificate` - DER encoding of the client certificate; hashed, never parsed
    /// * `clock` - Time source read on every [`JwtDecorator::claims`] call
    /// * `validity_seconds` - Distance between `iat` and `exp`
    pub fn new(
        audience: impl Into<String>,
        client_id: impl Into<String>,
        certificate: &[u8],
        clock: Arc<dyn Clock>,
        validity_seconds: u64,
    ) -> Self {
        Self {
            audience: audience.into(),
            client_id: client_id.into(),
            thumbprint: Thumbprint::compute(certificate),
            clock,
            validity_seconds,
        }
    }

    /// Create a decorator from loaded configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` if the configuration is invalid.
    pub fn from_config(
        config: &AssertionConfig,
        certificate: &[u8],
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        let validity_seconds = config.validity()?;
        Ok(Self::new(
            config.audience.clone(),
            config.client_id.clone(),
            certificate,
            clock,
            validity_seconds,
        ))
    }

    #[must_use]
    pub fn audience(&self) -> &str {
        &self.audience
    }

    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    #[must_use]
    pub const fn validity_seconds(&self) -> u64 {
        self.validity_seconds
    }

    #[must_use]
    pub const fn thumbprint(&self) -> &Thumbprint {
        &self.thumbprint
    }
}

impl JwtDecorator for ClientAssertionDecorator {
    fn headers(&self) -> HeaderFragment {
        let mut headers = HeaderFragment::new();
        headers.insert(
            X509_THUMBPRINT.to_string(),
            Value::from(self.thumbprint.as_str()),
        );
        headers
    }

    fn claims(&self) -> ClaimFragment {
        // One clock reading for both timestamps keeps exp - iat exact
        let issued_at = self.clock.now().timestamp();
        let validity = i64::try_from(self.validity_seconds).unwrap_or(i64::MAX);
        let expires_at = issued_at.saturating_add(validity);
        let jti = Uuid::new_v4().to_string();

        tracing::trace!(jti = %jti, iat = issued_at, exp = expires_at, "generated assertion claims");

        let mut claims = ClaimFragment::new();
        claims.insert(
            AUDIENCE.to_string(),
            Value::from(vec![self.audience.clone()]),
        );
        claims.insert(ISSUER.to_string(), Value::from(self.client_id.as_str()));
        claims.insert(SUBJECT.to_string(), Value::from(self.client_id.as_str()));
        claims.insert(JWT_ID.to_string(), Value::from(jti));
        claims.insert(ISSUED_AT.to_string(), Value::from(issued_at));
        claims.insert(EXPIRATION_TIME.to_string(), Value::from(expires_at));
        claims
    }
}
