//! Token adapters
//!
//! Implementations of the AuthTokenIssuer port.

pub mod hmac;

pub use self::hmac::HmacTokenIssuer;
