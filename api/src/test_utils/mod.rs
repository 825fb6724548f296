//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! Why manual mocks instead of mockall?
//! - Services are generic over their ports, so a concrete in-memory type
//!   slots straight into the generic parameter
//! - Manual mocks are more explicit and easier to debug
//! - Call recording (storage, command queries) is a plain field, no macro magic

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
