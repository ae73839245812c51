mod client_assertion;
mod composite;
mod static_values;

pub use client_assertion::ClientAssertionDecorator;
pub use composite::CompositeDecorator;
pub use static_values::StaticDecorator;

use crate::claims::{ClaimFragment, HeaderFragment};

/// Contributes header parameters and claims to a token before it is signed.
///
/// Implementations capture their configuration at construction. Each call
/// computes a fresh fragment; nothing is cached between calls, so time and
/// randomness dependent values differ from one call to the next.
pub trait JwtDecorator: Send + Sync {
    fn headers(&self) -> HeaderFragment;

    fn claims(&self) -> ClaimFragment;
}
