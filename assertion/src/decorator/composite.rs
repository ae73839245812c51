use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::JwtDecorator;
use crate::claims::{ClaimFragment, HeaderFragment};

/// Merges the fragments of several decorators into one header and one claim set.
///
/// Decorators are consulted in insertion order. When two decorators set the
/// same key the later one wins.
#[derive(Clone, Default)]
pub struct CompositeDecorator {
    decorators: Vec<Arc<dyn JwtDecorator>>,
}

impl CompositeDecorator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, decorator: Arc<dyn JwtDecorator>) {
        self.decorators.push(decorator);
    }

    #[must_use]
    pub fn with(mut self, decorator: Arc<dyn JwtDecorator>) -> Self {
        self.push(decorator);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Compute the merged headers and claims.
    #[must_use]
    pub fn into_parts(self) -> (HeaderFragment, ClaimFragment) {
        (self.headers(), self.claims())
    }
}

fn merge(target: &mut Map<String, Value>, fragment: Map<String, Value>, section: &'static str) {
    for (key, value) in fragment {
        if target.contains_key(&key) {
            tracing::debug!(key = %key, section, "decorator overrides earlier value");
        }
        target.insert(key, value);
    }
}

impl JwtDecorator for CompositeDecorator {
    fn headers(&self) -> HeaderFragment {
        let mut headers = HeaderFragment::new();
        for decorator in &self.decorators {
            merge(&mut headers, decorator.headers(), "header");
        }
        headers
    }

    fn claims(&self) -> ClaimFragment {
        let mut claims = ClaimFragment::new();
        for decorator in &self.decorators {
            merge(&mut claims, decorator.claims(), "claims");
        }
        claims
    }
}

impl fmt::Debug for CompositeDecorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeDecorator")
            .field("decorators", &self.decorators.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claims::{AUDIENCE, ISSUER, JWT_ID, X509_THUMBPRINT};
    use crate::clock::FixedClock;
    use crate::decorator::{ClientAssertionDecorator, StaticDecorator};
    use chrono::{TimeZone, Utc};

    fn client_assertion() -> Arc<dyn JwtDecorator> {
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        ));
        Arc::new(ClientAssertionDecorator::new(
            "https://as.example/token",
            "client-123",
            b"der",
            clock,
            300,
        ))
    }

    #[test]
    fn empty_composite_produces_empty_fragments() {
        let composite = CompositeDecorator::new();
        assert!(composite.is_empty());
        let (headers, claims) = composite.into_parts();
        assert!(headers.is_empty());
        assert!(claims.is_empty());
    }

    #[test]
    fn merges_disjoint_fragments() {
        let composite = CompositeDecorator::new()
            .with(client_assertion())
            .with(Arc::new(
                StaticDecorator::new()
                    .with_header("typ", "JWT")
                    .with_claim("scope", "read"),
            ));
        assert_eq!(composite.len(), 2);

        let (headers, claims) = composite.into_parts();
        assert_eq!(headers.len(), 2);
        assert!(headers.contains_key(X509_THUMBPRINT));
        assert_eq!(headers["typ"], "JWT");
        assert_eq!(claims.len(), 7);
        assert_eq!(claims["scope"], "read");
    }

    #[test]
    fn later_decorator_wins_on_collision() {
        let composite = CompositeDecorator::new()
            .with(client_assertion())
            .with(Arc::new(StaticDecorator::new().with_claim(ISSUER, "override")));

        let claims = composite.claims();
        assert_eq!(claims[ISSUER], "override");
        assert_eq!(claims[AUDIENCE], serde_json::json!(["https://as.example/token"]));
    }

    #[test]
    fn earlier_decorator_is_overridden_by_client_assertion() {
        let mut composite = CompositeDecorator::new();
        composite.push(Arc::new(StaticDecorator::new().with_header(X509_THUMBPRINT, "stale")));
        composite.push(client_assertion());

        let headers = composite.headers();
        assert_eq!(headers[X509_THUMBPRINT], ca_crypto::sha1_base64_fingerprint(b"der"));
    }

    #[test]
    fn composites_nest() {
        let inner = CompositeDecorator::new().with(client_assertion());
        let outer = CompositeDecorator::new()
            .with(Arc::new(inner))
            .with(Arc::new(StaticDecorator::new().with_header("typ", "JWT")));

        let headers = outer.headers();
        assert_eq!(headers.len(), 2);
        assert!(outer.claims().contains_key(JWT_ID));
    }

    #[test]
    fn merged_claims_are_fresh_per_call() {
        let composite = CompositeDecorator::new().with(client_assertion());
        assert_ne!(composite.claims()[JWT_ID], composite.claims()[JWT_ID]);
    }
}
