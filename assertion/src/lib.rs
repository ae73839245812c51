//! Header and claim generation for certificate-bound OAuth2 client assertions
//!
//! A client authenticating with `private_key_jwt` signs a short-lived token
//! about itself. This crate produces that token's content: the `x5t` header
//! pointing at the client certificate, and the `aud`/`iss`/`sub`/`jti`/`iat`/`exp`
//! claims. Signing and transport are left to the caller.

#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

pub mod claims;
pub mod cli;
pub mod clock;
pub mod config;
pub mod decorator;

pub use ca_crypto::{sha1_base64_fingerprint, Thumbprint};
pub use claims::{ClaimFragment, HeaderFragment};
pub use clock::{Clock, FixedClock, SystemClock};
pub use decorator::{ClientAssertionDecorator, CompositeDecorator, JwtDecorator, StaticDecorator};
