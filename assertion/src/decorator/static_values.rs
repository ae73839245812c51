use serde_json::Value;

use super::JwtDecorator;
use crate::claims::{ClaimFragment, HeaderFragment};

/// Contributes the same header parameters and claims to every token.
///
/// Useful for fixed values such as `typ` or deployment specific claims.
#[derive(Debug, Clone, Default)]
pub struct StaticDecorator {
    headers: HeaderFragment,
    claims: ClaimFragment,
}

impl StaticDecorator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_claim(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.claims.insert(name.into(), value.into());
        self
    }
}

impl JwtDecorator for StaticDecorator {
    fn headers(&self) -> HeaderFragment {
        self.headers.clone()
    }

    fn claims(&self) -> ClaimFragment {
        self.claims.clone()
    }
}
